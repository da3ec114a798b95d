//! Error handling for grammargen
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** ([`GrammarError`]) for precise handling inside the library
//! 2. **User-friendly messages** ([`ErrorContext`]) with actionable suggestions for the CLI
//!
//! # Error Categories
//!
//! - **Fragments**: [`GrammarError::DuplicateFragment`], [`GrammarError::UnresolvedFragment`],
//!   [`GrammarError::CircularDependency`]
//! - **Templates**: [`GrammarError::UnresolvedPlaceholder`], [`GrammarError::InvalidPlaceholder`],
//!   [`GrammarError::InvalidTemplatePath`], [`GrammarError::StaleOutput`]
//! - **External expansion**: [`GrammarError::MissingDependency`],
//!   [`GrammarError::InterpreterNotFound`], [`GrammarError::ExpansionFailed`]
//! - **Environment**: [`GrammarError::ConfigError`], [`GrammarError::Io`], [`GrammarError::Other`]
//!
//! Every error is fatal to the run. Library code returns [`GrammarError`] directly or wraps it
//! in [`anyhow::Error`] with path context; [`user_friendly_error`] recovers the typed error for
//! display.
//!
//! # Examples
//!
//! ```rust,no_run
//! use grammargen::core::{GrammarError, user_friendly_error};
//!
//! let error = GrammarError::DuplicateFragment {
//!     name: "COLON".to_string(),
//! };
//! let context = user_friendly_error(anyhow::Error::from(error));
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for grammargen operations.
#[derive(Error, Debug)]
pub enum GrammarError {
    /// The installation directory of the external expansion tool does not exist.
    ///
    /// Detected by an explicit existence check before the tool is used.
    #[error("External expansion tool not found: {path} does not exist")]
    MissingDependency {
        /// The directory that was expected to contain the tool
        path: String,
    },

    /// No Python interpreter could be located to run the expansion tool.
    #[error("Python interpreter '{interpreter}' not found in PATH")]
    InterpreterNotFound {
        /// The interpreter name or path that was searched for
        interpreter: String,
    },

    /// The expansion tool ran but reported failure.
    #[error("Expansion failed for {targets}: {status}")]
    ExpansionFailed {
        /// Comma-separated list of the files handed to the tool
        targets: String,
        /// Exit status description
        status: String,
        /// Captured standard error of the tool
        stderr: String,
    },

    /// Two fragments were registered under the same name.
    #[error("Fragment '{name}' is defined more than once")]
    DuplicateFragment {
        /// The repeated fragment name
        name: String,
    },

    /// A fragment recipe needs another fragment that is unknown or not yet built.
    #[error("Fragment '{fragment}' requires '{missing}', which has not been resolved")]
    UnresolvedFragment {
        /// The fragment being constructed
        fragment: String,
        /// The input it could not find
        missing: String,
    },

    /// Fragment inputs form a cycle.
    #[error("Circular fragment dependency detected: {chain}")]
    CircularDependency {
        /// The cycle, rendered as `A → B → A`
        chain: String,
    },

    /// A template references a placeholder with no registry entry.
    #[error("Unresolved placeholder '${key}' in {file}")]
    UnresolvedPlaceholder {
        /// The placeholder name without the `$`
        key: String,
        /// The template (or fragment) containing it
        file: String,
        /// Registered names close to `key`
        suggestions: Vec<String>,
    },

    /// A `$` that starts neither a placeholder nor a `$$` escape.
    #[error("Invalid placeholder in {file}: line {line}, column {column}")]
    InvalidPlaceholder {
        /// The template (or fragment) containing it
        file: String,
        /// 1-based line of the `$`
        line: usize,
        /// 1-based column of the `$`
        column: usize,
    },

    /// A template path does not carry the template suffix.
    #[error("Template path {path} does not end with '{suffix}'")]
    InvalidTemplatePath {
        /// The offending path
        path: String,
        /// The configured template suffix
        suffix: String,
    },

    /// Generated files differ from what the current templates would produce.
    #[error("Generated grammar files are out of date: {files}")]
    StaleOutput {
        /// Comma-separated list of stale or missing outputs
        files: String,
    },

    /// Configuration file could not be used.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What went wrong
        message: String,
    },

    /// Standard I/O errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for GrammarError {
    fn clone(&self) -> Self {
        match self {
            Self::MissingDependency {
                path,
            } => Self::MissingDependency {
                path: path.clone(),
            },
            Self::InterpreterNotFound {
                interpreter,
            } => Self::InterpreterNotFound {
                interpreter: interpreter.clone(),
            },
            Self::ExpansionFailed {
                targets,
                status,
                stderr,
            } => Self::ExpansionFailed {
                targets: targets.clone(),
                status: status.clone(),
                stderr: stderr.clone(),
            },
            Self::DuplicateFragment {
                name,
            } => Self::DuplicateFragment {
                name: name.clone(),
            },
            Self::UnresolvedFragment {
                fragment,
                missing,
            } => Self::UnresolvedFragment {
                fragment: fragment.clone(),
                missing: missing.clone(),
            },
            Self::CircularDependency {
                chain,
            } => Self::CircularDependency {
                chain: chain.clone(),
            },
            Self::UnresolvedPlaceholder {
                key,
                file,
                suggestions,
            } => Self::UnresolvedPlaceholder {
                key: key.clone(),
                file: file.clone(),
                suggestions: suggestions.clone(),
            },
            Self::InvalidPlaceholder {
                file,
                line,
                column,
            } => Self::InvalidPlaceholder {
                file: file.clone(),
                line: *line,
                column: *column,
            },
            Self::InvalidTemplatePath {
                path,
                suffix,
            } => Self::InvalidTemplatePath {
                path: path.clone(),
                suffix: suffix.clone(),
            },
            Self::StaleOutput {
                files,
            } => Self::StaleOutput {
                files: files.clone(),
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            // io::Error is not Clone; keep kind and message
            Self::Io(e) => Self::Io(std::io::Error::new(e.kind(), e.to_string())),
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// A [`GrammarError`] with optional details and a suggestion for the user.
///
/// Details are printed in yellow, suggestions in green.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: GrammarError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context with no details or suggestion.
    #[must_use]
    pub const fn new(error: GrammarError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details and suggestion to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with suggestions.
///
/// Recognises [`GrammarError`] anywhere in the error chain, then [`std::io::Error`] and
/// [`toml::de::Error`]. Anything else becomes [`GrammarError::Other`] with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    // Path context is usually layered on top of the typed error
    for cause in error.chain() {
        if let Some(grammar_error) = cause.downcast_ref::<GrammarError>() {
            let context = create_error_context(grammar_error.clone());
            if context.details.is_none() && error.chain().count() > 1 {
                return context.with_details(error.to_string());
            }
            return context;
        }
    }

    // Outer context names the file the underlying error is about
    let outer = (error.chain().count() > 1).then(|| error.to_string());

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        let context = ErrorContext::new(GrammarError::Io(std::io::Error::new(
            io_error.kind(),
            io_error.to_string(),
        )))
        .with_suggestion(match io_error.kind() {
            std::io::ErrorKind::NotFound => {
                "Check that the file exists and that --root points at the repository checkout"
            }
            std::io::ErrorKind::PermissionDenied => {
                "Check file permissions on the grammar directories"
            }
            _ => "Re-run with --verbose for more information",
        });
        return match outer {
            Some(outer) => context.with_details(outer),
            None => context,
        };
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        let context = ErrorContext::new(GrammarError::ConfigError {
            message: toml_error.to_string(),
        })
        .with_suggestion("Check the keys and TOML syntax of grammargen.toml");
        return match outer {
            Some(outer) => context.with_details(outer),
            None => context,
        };
    }

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();
    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(GrammarError::Other {
        message,
    })
}

/// Attach tailored suggestions to each [`GrammarError`] variant.
fn create_error_context(error: GrammarError) -> ErrorContext {
    match &error {
        GrammarError::MissingDependency {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check out the 'builders' tree next to 'plugins', or pass --skip-expand")
            .with_details("The cog sources are looked up relative to the repository root"),

        GrammarError::InterpreterNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Install Python or set [expander] python in grammargen.toml"),

        GrammarError::ExpansionFailed {
            stderr,
            ..
        } => {
            let details = if stderr.trim().is_empty() {
                "The expansion tool produced no error output".to_string()
            } else {
                stderr.trim().to_string()
            };
            ErrorContext::new(error)
                .with_details(details)
                .with_suggestion("Fix the cog directives in the target file and re-run")
        }

        GrammarError::DuplicateFragment {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Rename one of the fragment definitions in the catalog"),

        GrammarError::UnresolvedFragment {
            missing,
            ..
        } => {
            let suggestion =
                format!("Add a fragment named '{missing}' to the catalog or fix the reference");
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        GrammarError::CircularDependency {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Break the cycle: a fragment cannot consume its own text")
            .with_details("Fragments are built in dependency order and each is built once"),

        GrammarError::UnresolvedPlaceholder {
            suggestions,
            ..
        } => {
            let context = ErrorContext::new(error.clone())
                .with_details("Every $NAME in a template must match a fragment name exactly");
            if suggestions.is_empty() {
                context.with_suggestion("Add the fragment or escape a literal dollar sign as $$")
            } else {
                context.with_suggestion(format!("Did you mean: {}?", suggestions.join(", ")))
            }
        }

        GrammarError::InvalidPlaceholder {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Write a literal dollar sign as $$"),

        GrammarError::InvalidTemplatePath {
            suffix,
            ..
        } => {
            let suggestion = format!("Template file names must end with '{suffix}'");
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        GrammarError::StaleOutput {
            ..
        } => ErrorContext::new(error).with_suggestion("Run 'grammargen generate' and commit the result"),

        GrammarError::ConfigError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Accepted keys: parser_dir, template_name, template_suffix, grammars, [expander]"),

        GrammarError::Other {
            ..
        } => ErrorContext::new(error),

        GrammarError::Io(_) => ErrorContext::new(error)
            .with_suggestion("Check that the file exists and is writable"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_error_display() {
        let error = GrammarError::DuplicateFragment {
            name: "COLON".to_string(),
        };
        assert_eq!(error.to_string(), "Fragment 'COLON' is defined more than once");

        let error = GrammarError::UnresolvedPlaceholder {
            key: "UNDEFINED_KEY".to_string(),
            file: "grammar24/python.jjt_template".to_string(),
            suggestions: vec![],
        };
        assert_eq!(
            error.to_string(),
            "Unresolved placeholder '$UNDEFINED_KEY' in grammar24/python.jjt_template"
        );

        let error = GrammarError::MissingDependency {
            path: "/repo/builders/cog_src".to_string(),
        };
        assert!(error.to_string().contains("/repo/builders/cog_src"));
    }

    #[test]
    fn test_error_context_display() {
        let ctx = ErrorContext::new(GrammarError::InvalidPlaceholder {
            file: "t".to_string(),
            line: 3,
            column: 7,
        })
        .with_suggestion("Write $$");

        let display = format!("{ctx}");
        assert!(display.contains("line 3, column 7"));
        assert!(display.contains("Suggestion: Write $$"));
    }

    #[test]
    fn test_user_friendly_error_finds_typed_error_under_context() {
        let result: anyhow::Result<()> = Err(GrammarError::UnresolvedPlaceholder {
            key: "COLN".to_string(),
            file: "python.jjt_template".to_string(),
            suggestions: vec!["COLON".to_string()],
        })
        .context("Failed to render grammar30");

        let ctx = user_friendly_error(result.unwrap_err());
        assert!(matches!(ctx.error, GrammarError::UnresolvedPlaceholder { .. }));
        assert_eq!(ctx.suggestion.as_deref(), Some("Did you mean: COLON?"));
    }

    #[test]
    fn test_user_friendly_error_generic_chain() {
        let error = anyhow::anyhow!("root cause").context("outer");
        let ctx = user_friendly_error(error);
        let message = ctx.error.to_string();
        assert!(message.contains("outer"));
        assert!(message.contains("root cause"));
    }

    #[test]
    fn test_clone_io_error_keeps_kind() {
        let error = GrammarError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        match error.clone() {
            GrammarError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected {other:?}"),
        }
    }
}
