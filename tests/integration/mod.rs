//! Integration test suite for grammargen
//!
//! End-to-end tests of the generation pipeline and the command-line interface.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **generate**: full runs over the four PyDev grammar templates
//! - **check**: up-to-date detection without writing
//! - **cli**: flags, subcommands, exit codes and error output
//! - **expand**: the cog expansion step with a stand-in cog module

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod check;
mod cli;
mod expand;
mod generate;
