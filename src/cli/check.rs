//! `grammargen check`

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::CliConfig;
use crate::generator;
use crate::templating::OutputStatus;

/// Verify that the generated grammar files match their templates.
///
/// Intended for CI: exits non-zero when `generate` would change anything.
#[derive(Args, Debug, Default)]
pub struct CheckCommand {}

impl CheckCommand {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let layout = config.layout()?;
        let report = generator::check(&layout)?;

        if !config.quiet {
            for (output, status) in &report.entries {
                let label = match status {
                    OutputStatus::UpToDate => "up to date".green(),
                    OutputStatus::Stale => "stale".yellow(),
                    OutputStatus::Missing => "missing".red(),
                };
                println!("  {} {}", label, output.display());
            }
        }

        report.ensure_up_to_date()?;

        if !config.quiet {
            println!("{} {} grammar file(s) up to date", "✓".green(), report.entries.len());
        }
        Ok(())
    }
}
