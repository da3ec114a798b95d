//! Generator settings read from `grammargen.toml`.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::parser::parse_config;
use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_COG_INSTALL_DIR, DEFAULT_EXPAND_TARGETS, DEFAULT_GRAMMARS,
    DEFAULT_PARSER_DIR, DEFAULT_PYTHON, DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE_SUFFIX,
};
use crate::core::GrammarError;

/// Source layout and expansion settings.
///
/// Every key is optional; an absent key takes the PyDev default. Paths are relative
/// to the repository root unless noted otherwise.
///
/// ```toml
/// parser_dir = "plugins/org.python.pydev.parser/src/org/python/pydev/parser"
/// template_name = "python.jjt_template"
/// template_suffix = "_template"
/// grammars = ["grammar24", "grammar25", "grammar26", "grammar30"]
///
/// [expander]
/// enabled = true
/// install_dir = "builders/org.python.pydev.build/cog_src"
/// python = "python3"
/// targets = ["grammarcommon/AbstractTokenManagerWithConstants.java"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory holding one subdirectory per grammar version.
    pub parser_dir: PathBuf,

    /// Template file name inside each grammar directory.
    pub template_name: String,

    /// Suffix stripped from the template name to form the output name.
    pub template_suffix: String,

    /// Grammar directories to generate, in processing order.
    pub grammars: Vec<String>,

    pub expander: ExpanderConfig,
}

/// Settings for the cog expansion step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpanderConfig {
    /// Run the expansion step as part of `generate`.
    pub enabled: bool,

    /// cog installation directory.
    pub install_dir: PathBuf,

    /// Interpreter name or path.
    pub python: String,

    /// Files to expand, relative to `parser_dir`.
    pub targets: Vec<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            parser_dir: PathBuf::from(DEFAULT_PARSER_DIR),
            template_name: DEFAULT_TEMPLATE_NAME.to_string(),
            template_suffix: DEFAULT_TEMPLATE_SUFFIX.to_string(),
            grammars: DEFAULT_GRAMMARS.iter().map(|g| (*g).to_string()).collect(),
            expander: ExpanderConfig::default(),
        }
    }
}

impl Default for ExpanderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            install_dir: PathBuf::from(DEFAULT_COG_INSTALL_DIR),
            python: DEFAULT_PYTHON.to_string(),
            targets: DEFAULT_EXPAND_TARGETS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl GeneratorConfig {
    /// Load the configuration for the repository at `root`.
    ///
    /// An explicit `path` must exist. Without one, `<root>/grammargen.toml` is used
    /// when present and the defaults otherwise.
    pub fn load_with_optional(root: &Path, path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(&path),
            None => {
                let default_path = root.join(CONFIG_FILE_NAME);
                if default_path.exists() {
                    Self::load_from(&default_path)
                } else {
                    tracing::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, root.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load and validate the configuration file at `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Self = parse_config(path)?;
        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Reject settings that cannot produce a usable layout.
    pub fn validate(&self) -> Result<(), GrammarError> {
        if self.template_suffix.is_empty() {
            return Err(GrammarError::ConfigError {
                message: "template_suffix must not be empty".to_string(),
            });
        }
        if !self.template_name.ends_with(&self.template_suffix)
            || self.template_name == self.template_suffix
        {
            return Err(GrammarError::ConfigError {
                message: format!(
                    "template_name '{}' must end with template_suffix '{}'",
                    self.template_name, self.template_suffix
                ),
            });
        }
        if self.grammars.is_empty() {
            return Err(GrammarError::ConfigError {
                message: "grammars must list at least one grammar directory".to_string(),
            });
        }
        Ok(())
    }
}
