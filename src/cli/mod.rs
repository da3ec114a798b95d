//! Command-line interface for grammargen.
//!
//! # Commands
//!
//! - `generate` - expand cog targets, then write every grammar file (the default)
//! - `check` - verify that the grammar files on disk match what `generate` would write
//! - `fragments` - list the fragment catalog or print one resolved fragment
//! - `expand` - run only the cog expansion step
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug output
//! - `--quiet` - Suppress all output except errors
//! - `--root <DIR>` - Repository root (defaults to the current directory)
//! - `--config <FILE>` - Configuration file (defaults to `<root>/grammargen.toml`)
//!
//! # Examples
//!
//! ```bash
//! grammargen                       # same as `grammargen generate`
//! grammargen generate --skip-expand
//! grammargen --root ~/Pydev check
//! grammargen fragments --format json
//! grammargen fragments SUITE
//! ```

mod check;
mod expand;
mod fragments;
mod generate;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::{GeneratorConfig, Layout};

/// Settings derived from the global flags, shared by every command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Default tracing filter; `RUST_LOG` takes precedence when set.
    pub log_level: String,

    /// Suppress normal output.
    pub quiet: bool,

    /// Repository root.
    pub root: PathBuf,

    /// Explicit configuration file.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Load the configuration file and resolve the layout for this run.
    pub fn layout(&self) -> Result<Layout> {
        let config = GeneratorConfig::load_with_optional(&self.root, self.config_path.clone())?;
        Ok(Layout::resolve(&self.root, &config))
    }

    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// A subscriber that is already installed is left in place.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    }
}

/// Assembles versioned JavaCC grammar files from reusable fragments.
#[derive(Parser)]
#[command(
    name = "grammargen",
    about = "Generate the PyDev JavaCC grammars from shared fragments",
    version,
    long_about = "grammargen builds a registry of grammar fragments and substitutes it into the \
                  python.jjt_template file of every supported grammar version."
)]
pub struct Cli {
    /// The subcommand to execute; `generate` when omitted.
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output for debugging and detailed information.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Repository root containing `plugins/` and `builders/`.
    #[arg(long, global = true, value_name = "DIR", env = "GRAMMARGEN_ROOT")]
    root: Option<PathBuf>,

    /// Path to the configuration file.
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand cog targets and write every grammar file.
    ///
    /// See [`generate::GenerateCommand`].
    Generate(generate::GenerateCommand),

    /// Check that the grammar files on disk are up to date.
    ///
    /// Renders in memory and writes nothing. Fails if an output is stale or missing.
    Check(check::CheckCommand),

    /// List the fragment catalog, or print one resolved fragment.
    Fragments(fragments::FragmentsCommand),

    /// Run only the cog expansion step.
    Expand(expand::ExpandCommand),
}

impl Cli {
    /// Execute the CLI with the configuration built from its flags.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config()?;
        self.execute_with_config(config)
    }

    /// Translate the global flags into a [`CliConfig`].
    ///
    /// - `--verbose` → `debug`
    /// - `--quiet` → `error`
    /// - otherwise → `info`
    pub fn build_config(&self) -> Result<CliConfig> {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        };

        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("Failed to determine the current directory")?,
        };

        Ok(CliConfig {
            log_level: log_level.to_string(),
            quiet: self.quiet,
            root,
            config_path: self.config.clone(),
        })
    }

    /// Execute with an explicit configuration.
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        match self.command {
            Some(Commands::Generate(cmd)) => cmd.execute(&config),
            Some(Commands::Check(cmd)) => cmd.execute(&config),
            Some(Commands::Fragments(cmd)) => cmd.execute(&config),
            Some(Commands::Expand(cmd)) => cmd.execute(&config),
            None => generate::GenerateCommand::default().execute(&config),
        }
    }
}
