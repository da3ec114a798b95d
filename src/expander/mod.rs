//! In-place expansion of generator directives with cog.
//!
//! Some Java sources in the parser tree carry cog directives (`[[[cog ... ]]]`) that
//! cog rewrites in place. The generator treats cog as an opaque routine behind the
//! [`Expander`] trait: it hands over a list of files and only cares whether the run
//! succeeded.
//!
//! [`CogExpander`] runs cog from its source checkout with a Python interpreter:
//!
//! ```text
//! python3 -c "<bootstrap>" <cog install dir> <file>...
//! ```
//!
//! where the bootstrap appends the install directory to `sys.path`, imports `cog` and
//! calls `cog.RunCogInFiles` with the remaining arguments.

pub mod command;

use std::path::{Path, PathBuf};

use crate::core::GrammarError;
use command::ToolCommand;

/// Runs an external expansion routine over files, rewriting them in place.
pub trait Expander {
    /// Expand every file of `paths`.
    ///
    /// # Errors
    ///
    /// Any failure of the routine; there is no partial success.
    fn expand(&self, paths: &[PathBuf]) -> Result<(), GrammarError>;
}

const COG_BOOTSTRAP: &str =
    "import sys; sys.path.append(sys.argv[1]); import cog; cog.RunCogInFiles(sys.argv[2:])";

/// cog run from a source checkout.
#[derive(Debug, Clone)]
pub struct CogExpander {
    install_dir: PathBuf,
    python: PathBuf,
}

impl CogExpander {
    /// Locate cog and an interpreter to run it.
    ///
    /// The installation directory is checked first, before anything else is looked up.
    ///
    /// # Errors
    ///
    /// - [`GrammarError::MissingDependency`] if `install_dir` is not a directory
    /// - [`GrammarError::InterpreterNotFound`] if `python` cannot be found on `PATH`
    pub fn locate(install_dir: &Path, python: &str) -> Result<Self, GrammarError> {
        if !install_dir.is_dir() {
            return Err(GrammarError::MissingDependency {
                path: install_dir.display().to_string(),
            });
        }

        let python = which::which(python).map_err(|e| {
            tracing::debug!("Interpreter lookup for '{}' failed: {}", python, e);
            GrammarError::InterpreterNotFound {
                interpreter: python.to_string(),
            }
        })?;

        tracing::debug!("Using cog from {} with {}", install_dir.display(), python.display());
        Ok(Self {
            install_dir: install_dir.to_path_buf(),
            python,
        })
    }

    fn command(&self, paths: &[PathBuf]) -> ToolCommand {
        ToolCommand::new(&self.python)
            .arg("-c")
            .arg(COG_BOOTSTRAP)
            .arg(self.install_dir.display().to_string())
            .args(paths.iter().map(|p| p.display().to_string()))
            .with_context("cog")
    }
}

impl Expander for CogExpander {
    fn expand(&self, paths: &[PathBuf]) -> Result<(), GrammarError> {
        if paths.is_empty() {
            tracing::debug!("No files to expand");
            return Ok(());
        }

        for path in paths {
            if !path.is_file() {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Expansion target not found: {}", path.display()),
                )
                .into());
            }
        }

        let targets = paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ");
        let output = self.command(paths).execute()?;

        if !output.success() {
            return Err(GrammarError::ExpansionFailed {
                targets,
                status: output.status_description(),
                stderr: output.stderr,
            });
        }

        tracing::info!("Expanded {}", targets);
        Ok(())
    }
}

/// Expander used when expansion is turned off; it only logs what it skips.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipExpander;

impl Expander for SkipExpander {
    fn expand(&self, paths: &[PathBuf]) -> Result<(), GrammarError> {
        for path in paths {
            tracing::warn!("Skipping expansion of {}", path.display());
        }
        Ok(())
    }
}
