//! Configuration for grammargen.
//!
//! # Configuration File (`grammargen.toml`)
//!
//! **Location:** the repository root, or any path given with `--config`.
//!
//! **Purpose:** override the PyDev defaults for where templates live, which grammar
//! versions are generated and how the cog expansion step is run. The file is optional;
//! without it the tool works on an unmodified PyDev checkout.
//!
//! ```toml
//! grammars = ["grammar26", "grammar30"]
//!
//! [expander]
//! enabled = false
//! ```
//!
//! Unknown keys are rejected so that a misspelled setting never falls back silently to
//! its default.
//!
//! # Modules
//!
//! - `generator` - [`GeneratorConfig`] and [`ExpanderConfig`]
//! - `layout` - [`Layout`], the resolved absolute paths for a run
//! - `parser` - generic TOML parsing with file context

mod generator;
mod layout;
mod parser;

pub use generator::{ExpanderConfig, GeneratorConfig};
pub use layout::Layout;
pub use parser::parse_config;
