//! Throwaway repository layouts.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::{GeneratorConfig, Layout};
use crate::constants::CONFIG_FILE_NAME;

/// A temporary repository shaped like the PyDev tree.
///
/// Templates are added with [`with_template`](Self::with_template); only grammars that
/// received a template are part of [`layout`](Self::layout). The directory is removed
/// when the fixture is dropped.
pub struct LayoutFixture {
    temp_dir: TempDir,
    config: GeneratorConfig,
}

impl LayoutFixture {
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        let config = GeneratorConfig {
            grammars: Vec::new(),
            ..GeneratorConfig::default()
        };
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
            config,
        }
    }

    /// Repository root.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Write the template of `grammar` and add the grammar to the configuration.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn with_template(mut self, grammar: &str, content: &str) -> Self {
        let path = self.template_path(grammar);
        write_file(&path, content);
        if !self.config.grammars.iter().any(|g| g == grammar) {
            self.config.grammars.push(grammar.to_string());
        }
        self
    }

    /// Write every configured expansion target with `content`.
    #[must_use]
    pub fn with_expand_targets(self, content: &str) -> Self {
        for target in &self.layout().expand_targets {
            write_file(target, content);
        }
        self
    }

    /// Create the cog install directory with `cog_py` as its `cog.py`.
    #[must_use]
    pub fn with_cog_install(self, cog_py: &str) -> Self {
        let dir = self.path().join(&self.config.expander.install_dir);
        write_file(&dir.join("cog.py"), cog_py);
        self
    }

    /// Write `grammargen.toml` at the root with the current configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configuration cannot be serialized or written.
    pub fn write_config(&self) -> PathBuf {
        let path = self.path().join(CONFIG_FILE_NAME);
        let text = toml::to_string(&self.config).expect("Failed to serialize config");
        write_file(&path, &text);
        path
    }

    /// Modify the configuration in place.
    #[must_use]
    pub fn configure(mut self, f: impl FnOnce(&mut GeneratorConfig)) -> Self {
        f(&mut self.config);
        self
    }

    pub fn template_path(&self, grammar: &str) -> PathBuf {
        self.path().join(&self.config.parser_dir).join(grammar).join(&self.config.template_name)
    }

    /// Output path of `grammar`'s template.
    pub fn output_path(&self, grammar: &str) -> PathBuf {
        let name = self
            .config
            .template_name
            .strip_suffix(self.config.template_suffix.as_str())
            .unwrap_or(&self.config.template_name);
        self.template_path(grammar).with_file_name(name)
    }

    pub fn layout(&self) -> Layout {
        Layout::resolve(self.path(), &self.config)
    }
}

impl Default for LayoutFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(path, content).expect("Failed to write fixture file");
}
