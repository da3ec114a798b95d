//! grammargen - PyDev grammar generator
//!
//! Builds the JavaCC grammar (`python.jjt`) of every supported Python version from a
//! single library of reusable grammar fragments.
//!
//! # Architecture Overview
//!
//! Each grammar directory holds a `python.jjt_template` file: grammar text with `$NAME`
//! placeholders. A run:
//!
//! 1. **Expands** cog directives in the shared Java sources ([`expander`])
//! 2. **Assembles** the fragment registry in dependency order ([`fragments`], [`resolver`])
//! 3. **Applies** the registry to every template, writing `python.jjt` next to it
//!    ([`templating`])
//!
//! Fragments are either static text or built from other fragments. Build order is
//! computed from those inputs, and the registry is rebuilt from scratch on every run.
//!
//! # Core Modules
//!
//! - [`fragments`] - fragment recipes and the PyDev fragment catalog
//! - [`resolver`] - dependency graph, build plan and the fragment [`Registry`](resolver::Registry)
//! - [`templating`] - placeholder scanning and the template applier
//! - [`expander`] - the cog expansion boundary
//! - [`generator`] - the end-to-end pipeline
//!
//! ## Supporting Modules
//! - [`cli`] - command-line interface
//! - [`config`] - `grammargen.toml` and the resolved [`Layout`](config::Layout)
//! - [`constants`] - defaults for the PyDev source tree
//! - [`core`] - error types and user-facing error formatting
//! - [`utils`] - atomic file writes and reads
//!
//! # Example
//!
//! ```rust,no_run
//! use grammargen::config::{GeneratorConfig, Layout};
//! use grammargen::expander::CogExpander;
//! use grammargen::generator::generate;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let root = Path::new("/path/to/Pydev");
//! let config = GeneratorConfig::load_with_optional(root, None)?;
//! let layout = Layout::resolve(root, &config);
//! let expander = CogExpander::locate(&layout.cog_install_dir, &layout.python)?;
//!
//! let report = generate(&layout, &expander)?;
//! println!("wrote {} grammar files", report.outputs.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod expander;
pub mod fragments;
pub mod generator;
pub mod resolver;
pub mod templating;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
