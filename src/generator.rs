//! The generation pipeline.
//!
//! [`generate`] is the single entry routine: it expands the configured cog targets,
//! assembles the fragment registry from the catalog and applies it to every grammar
//! template in configuration order. [`check`] runs the same assembly and rendering in
//! memory and compares the result with the files on disk.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::Layout;
use crate::core::GrammarError;
use crate::expander::Expander;
use crate::fragments::catalog;
use crate::resolver::{Registry, assemble};
use crate::templating::{OutputStatus, TemplateApplier};

/// What a [`generate`] run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Files handed to the expander
    pub expanded: Vec<PathBuf>,
    /// Number of fragments in the registry
    pub fragments: usize,
    /// Output files written, in template order
    pub outputs: Vec<PathBuf>,
}

/// Output status of every template, in template order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub entries: Vec<(PathBuf, OutputStatus)>,
}

impl CheckReport {
    /// Outputs that are stale or missing.
    pub fn outdated(&self) -> Vec<&PathBuf> {
        self.entries
            .iter()
            .filter(|(_, status)| *status != OutputStatus::UpToDate)
            .map(|(path, _)| path)
            .collect()
    }

    /// Fail with [`GrammarError::StaleOutput`] unless every output is up to date.
    pub fn ensure_up_to_date(&self) -> Result<(), GrammarError> {
        let outdated = self.outdated();
        if outdated.is_empty() {
            return Ok(());
        }
        Err(GrammarError::StaleOutput {
            files: outdated.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", "),
        })
    }
}

/// Build the registry for the shipped fragment catalog.
pub fn assemble_catalog() -> Result<Registry, GrammarError> {
    assemble(&catalog())
}

/// Run the external expansion step over the configured targets.
pub fn expand(layout: &Layout, expander: &dyn Expander) -> Result<Vec<PathBuf>> {
    expander
        .expand(&layout.expand_targets)
        .with_context(|| format!("Failed to expand files under {}", layout.parser_dir.display()))?;
    Ok(layout.expand_targets.clone())
}

/// Expand, assemble and apply every template of `layout`.
///
/// Stops at the first failure. Outputs written before the failure are kept.
pub fn generate(layout: &Layout, expander: &dyn Expander) -> Result<GenerateReport> {
    let expanded = expand(layout, expander)?;

    let registry = assemble_catalog()?;
    tracing::debug!("Registry holds {} fragments", registry.len());

    let applier = TemplateApplier::new(&registry, layout.template_suffix.clone());
    let outputs = applier.apply_all(&layout.templates)?;

    Ok(GenerateReport {
        expanded,
        fragments: registry.len(),
        outputs,
    })
}

/// Compare what [`generate`] would write with the outputs on disk. Writes nothing.
pub fn check(layout: &Layout) -> Result<CheckReport> {
    let registry = assemble_catalog()?;
    let applier = TemplateApplier::new(&registry, layout.template_suffix.clone());

    let mut entries = Vec::with_capacity(layout.templates.len());
    for template in &layout.templates {
        let (output, status) = applier.check(template)?;
        tracing::debug!("{}: {:?}", output.display(), status);
        entries.push((output, status));
    }

    Ok(CheckReport {
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expander::SkipExpander;
    use crate::test_utils::{LayoutFixture, RecordingExpander};
    use std::fs;

    #[test]
    fn test_generate_writes_every_output() {
        let fixture = LayoutFixture::new()
            .with_template("grammar25", "options {$IMPORTS}\n$FILE_INPUT\n")
            .with_template("grammar30", "$IF\n$ASSERT\n");
        let layout = fixture.layout();
        let expander = RecordingExpander::default();

        let report = generate(&layout, &expander).unwrap();
        assert_eq!(report.outputs.len(), 2);
        assert_eq!(report.fragments, catalog().len());
        assert_eq!(expander.calls(), vec![layout.expand_targets.clone()]);

        let registry = assemble_catalog().unwrap();
        let out = fs::read_to_string(&report.outputs[1]).unwrap();
        assert_eq!(
            out,
            format!("{}\n{}\n", registry.get("IF").unwrap(), registry.get("ASSERT").unwrap())
        );
    }

    #[test]
    fn test_expansion_runs_before_templates() {
        let fixture = LayoutFixture::new().with_template("grammar30", "$UNDEFINED_KEY");
        let layout = fixture.layout();
        let expander = RecordingExpander::default();

        assert!(generate(&layout, &expander).is_err());
        assert_eq!(expander.calls().len(), 1);
    }

    #[test]
    fn test_expansion_failure_stops_run() {
        let fixture = LayoutFixture::new().with_template("grammar30", "$COLON");
        let layout = fixture.layout();
        let expander = RecordingExpander::failing();

        let err = generate(&layout, &expander).unwrap_err();
        assert!(err.chain().any(|e| e.downcast_ref::<GrammarError>().is_some()));
        assert!(!layout.templates[0].with_file_name("python.jjt").exists());
    }

    #[test]
    fn test_check_detects_stale_and_missing() {
        let fixture = LayoutFixture::new()
            .with_template("grammar26", "$COMMA")
            .with_template("grammar30", "$COLON");
        let layout = fixture.layout();

        let report = check(&layout).unwrap();
        assert_eq!(report.outdated().len(), 2);
        assert!(matches!(report.ensure_up_to_date(), Err(GrammarError::StaleOutput { .. })));

        generate(&layout, &SkipExpander).unwrap();
        let report = check(&layout).unwrap();
        assert!(report.ensure_up_to_date().is_ok());

        fs::write(&report.entries[0].0, "edited by hand").unwrap();
        let report = check(&layout).unwrap();
        assert_eq!(report.entries[0].1, OutputStatus::Stale);
        assert_eq!(report.entries[1].1, OutputStatus::UpToDate);
    }
}
