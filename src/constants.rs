//! Defaults for the PyDev source layout.
//!
//! Every value here can be overridden in `grammargen.toml`; see
//! [`GeneratorConfig`](crate::config::GeneratorConfig).

/// Name of the optional configuration file at the repository root.
pub const CONFIG_FILE_NAME: &str = "grammargen.toml";

/// Parser sources, relative to the repository root.
pub const DEFAULT_PARSER_DIR: &str = "plugins/org.python.pydev.parser/src/org/python/pydev/parser";

/// Template file name inside each grammar directory.
pub const DEFAULT_TEMPLATE_NAME: &str = "python.jjt_template";

/// Suffix marking a file as a template; stripped to form the output name.
pub const DEFAULT_TEMPLATE_SUFFIX: &str = "_template";

/// One directory per supported Python grammar version.
pub const DEFAULT_GRAMMARS: &[&str] = &["grammar24", "grammar25", "grammar26", "grammar30"];

/// cog installation, relative to the repository root.
pub const DEFAULT_COG_INSTALL_DIR: &str = "builders/org.python.pydev.build/cog_src";

/// Interpreter used to run cog.
pub const DEFAULT_PYTHON: &str = "python3";

/// Files expanded by cog, relative to the parser directory.
pub const DEFAULT_EXPAND_TARGETS: &[&str] = &["grammarcommon/AbstractTokenManagerWithConstants.java"];
