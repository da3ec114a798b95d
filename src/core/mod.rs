//! Core types for grammargen
//!
//! This module holds the error system shared by every stage of the generator:
//! - [`GrammarError`] - enumerated failure modes of fragment assembly, template
//!   application and external expansion
//! - [`ErrorContext`] - user-facing wrapper with details and suggestions
//! - [`user_friendly_error`] - recover a typed error from an [`anyhow::Error`] chain
//!
//! Errors are never downgraded to warnings; every variant stops the run.

pub mod error;

pub use error::{ErrorContext, GrammarError, user_friendly_error};
