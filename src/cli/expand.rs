//! `grammargen expand`

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::CliConfig;
use crate::expander::CogExpander;
use crate::generator;

/// Run only the cog expansion step.
///
/// Runs even when `[expander] enabled = false`, since it was asked for explicitly.
#[derive(Args, Debug, Default)]
pub struct ExpandCommand {}

impl ExpandCommand {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let layout = config.layout()?;
        let expander = CogExpander::locate(&layout.cog_install_dir, &layout.python)?;
        let expanded = generator::expand(&layout, &expander)?;

        if !config.quiet {
            for path in &expanded {
                println!("  {} {}", "✓".green(), path.display());
            }
            println!("{} {} file(s)", "Expanded".green().bold(), expanded.len());
        }
        Ok(())
    }
}
