//! `grammargen generate`

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::CliConfig;
use crate::expander::{CogExpander, Expander, SkipExpander};
use crate::generator;

/// Expand cog targets, then write every grammar file.
#[derive(Args, Debug, Default)]
pub struct GenerateCommand {
    /// Do not run cog before generating.
    #[arg(long)]
    skip_expand: bool,
}

impl GenerateCommand {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let layout = config.layout()?;

        let expander: Box<dyn Expander> = if self.skip_expand || !layout.expander_enabled {
            Box::new(SkipExpander)
        } else {
            Box::new(CogExpander::locate(&layout.cog_install_dir, &layout.python)?)
        };

        let report = generator::generate(&layout, expander.as_ref())?;

        if !config.quiet {
            for output in &report.outputs {
                println!("  {} {}", "✓".green(), output.display());
            }
            println!(
                "{} {} grammar file(s) from {} fragments",
                "Generated".green().bold(),
                report.outputs.len(),
                report.fragments
            );
        }
        Ok(())
    }
}
