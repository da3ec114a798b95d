//! Absolute paths for one generation run.

use std::path::{Path, PathBuf};

use super::GeneratorConfig;

/// Concrete file locations derived once from the repository root and the configuration.
///
/// Built at process start and passed to every stage; no stage computes paths on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub root: PathBuf,
    pub parser_dir: PathBuf,
    /// One template per grammar, in configuration order.
    pub templates: Vec<PathBuf>,
    pub template_suffix: String,
    pub expander_enabled: bool,
    pub cog_install_dir: PathBuf,
    pub python: String,
    pub expand_targets: Vec<PathBuf>,
}

impl Layout {
    /// Resolve `config` against `root`.
    ///
    /// Absolute paths in the configuration are kept as they are.
    pub fn resolve(root: &Path, config: &GeneratorConfig) -> Self {
        let parser_dir = root.join(&config.parser_dir);
        let templates = config
            .grammars
            .iter()
            .map(|grammar| parser_dir.join(grammar).join(&config.template_name))
            .collect();
        let expand_targets =
            config.expander.targets.iter().map(|target| parser_dir.join(target)).collect();

        Self {
            root: root.to_path_buf(),
            templates,
            template_suffix: config.template_suffix.clone(),
            expander_enabled: config.expander.enabled,
            cog_install_dir: root.join(&config.expander.install_dir),
            python: config.expander.python.clone(),
            expand_targets,
            parser_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_default_layout() {
        let root = Path::new("/work/Pydev");
        let layout = Layout::resolve(root, &GeneratorConfig::default());

        let parser = root.join("plugins/org.python.pydev.parser/src/org/python/pydev/parser");
        assert_eq!(layout.parser_dir, parser);
        assert_eq!(layout.templates.len(), 4);
        assert_eq!(layout.templates[0], parser.join("grammar24").join("python.jjt_template"));
        assert_eq!(layout.templates[3], parser.join("grammar30").join("python.jjt_template"));
        assert_eq!(layout.cog_install_dir, root.join("builders/org.python.pydev.build/cog_src"));
        assert_eq!(
            layout.expand_targets,
            vec![parser.join("grammarcommon").join("AbstractTokenManagerWithConstants.java")]
        );
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let config = GeneratorConfig {
            parser_dir: PathBuf::from("/elsewhere/parser"),
            ..GeneratorConfig::default()
        };
        let layout = Layout::resolve(Path::new("/work"), &config);
        assert_eq!(layout.parser_dir, PathBuf::from("/elsewhere/parser"));
    }
}
