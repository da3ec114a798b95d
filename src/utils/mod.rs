//! Shared helpers.
//!
//! - [`fs`] - atomic writes and file reads with path context

pub mod fs;

