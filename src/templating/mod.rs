//! Registry-level template substitution.
//!
//! Grammar templates are plain text files whose names end with a template suffix
//! (`python.jjt_template`). Each one is rendered against the resolved fragment
//! registry and written next to itself with the suffix stripped (`python.jjt`).
//!
//! # Placeholder Syntax
//!
//! ```text
//! // Simple placeholder
//! $FILE_INPUT
//!
//! // Braced placeholder, useful when a name is followed by identifier characters
//! ${COLON}suffix
//!
//! // Escaped dollar
//! $$
//! ```
//!
//! See [`placeholder`] for the scanner and the two substitution operations.
//!
//! # Single Pass
//!
//! Rendering scans the template text once. Fragment text is inserted verbatim and is
//! never scanned again, so marker-like text carried by a fragment reaches the output
//! unchanged.
//!
//! # Failure
//!
//! Templates are processed in list order. A failure stops the run at the failing
//! template; outputs written for earlier templates are kept.

pub mod applier;
pub mod placeholder;

pub use applier::{OutputStatus, RenderedTemplate, TemplateApplier};
pub use placeholder::{Segment, SubstituteError, placeholder_names, splice, substitute};
