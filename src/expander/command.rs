//! Builder for running external programs.
//!
//! A synchronous, fluent wrapper around [`std::process::Command`] that logs the
//! invocation and captures output in one place.
//!
//! ```rust,no_run
//! use grammargen::expander::command::ToolCommand;
//!
//! # fn example() -> std::io::Result<()> {
//! let output = ToolCommand::new("python3")
//!     .args(["-c", "print('hello')"])
//!     .with_context("Probing interpreter")
//!     .execute()?;
//! assert!(output.success());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

/// Fluent builder for one external process invocation.
#[derive(Debug, Clone)]
pub struct ToolCommand {
    /// Program name or path
    program: PathBuf,

    /// Arguments passed to the program
    args: Vec<String>,

    /// Optional context string for log lines
    context: Option<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            context: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// The command line as it would be typed in a shell, for logs and errors.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }

    /// Run the program to completion and capture its output.
    ///
    /// A non-zero exit is not an error here; inspect [`ToolOutput::success`].
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the process could not be started.
    pub fn execute(self) -> std::io::Result<ToolOutput> {
        let start = std::time::Instant::now();
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        match self.context {
            Some(ref ctx) => tracing::debug!(target: "tool", "({}) Executing: {}", ctx, self.display()),
            None => tracing::debug!(target: "tool", "Executing: {}", self.display()),
        }

        let output = cmd.output().inspect_err(|e| {
            tracing::debug!(target: "tool", "Failed to start {}: {}", self.program.display(), e);
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            tracing::debug!(target: "tool", "Command failed with exit code: {:?}", output.status.code());
        }
        if !stdout.trim().is_empty() {
            tracing::debug!(target: "tool", "{}", stdout.trim());
        }
        if !stderr.trim().is_empty() {
            tracing::debug!(target: "tool", "{}", stderr.trim());
        }
        tracing::debug!(target: "tool::perf", "{} took {}ms", self.display(), start.elapsed().as_millis());

        Ok(ToolOutput {
            status: output.status,
            stdout,
            stderr,
        })
    }
}

/// Captured result of a [`ToolCommand`].
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// `exit status 3`, or `terminated by signal` when there is no code.
    pub fn status_description(&self) -> String {
        match self.status.code() {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_program_and_args() {
        let cmd = ToolCommand::new("python3").args(["-c", "pass"]).arg("file.java");
        assert_eq!(cmd.display(), "python3 -c pass file.java");
    }

    #[test]
    fn test_missing_program_is_io_error() {
        let err = ToolCommand::new("grammargen-no-such-program").execute().unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_output_and_status() {
        let output = ToolCommand::new("sh")
            .args(["-c", "echo out; echo err >&2; exit 3"])
            .execute()
            .unwrap();
        assert!(!output.success());
        assert_eq!(output.status_description(), "exit status 3");
        assert_eq!(output.stdout.trim(), "out");
        assert_eq!(output.stderr.trim(), "err");
    }
}
