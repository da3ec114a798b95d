//! The template applier.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::core::GrammarError;
use crate::resolver::Registry;
use crate::templating::placeholder::{self, SubstituteError};
use crate::utils::fs::{read_text, read_text_if_exists, safe_write};

/// A template rendered in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTemplate {
    pub template: PathBuf,
    pub output: PathBuf,
    pub content: String,
}

/// How an output on disk compares with its freshly rendered content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStatus {
    UpToDate,
    /// The output exists with different content
    Stale,
    Missing,
}

/// Renders grammar templates against a resolved registry.
pub struct TemplateApplier<'a> {
    registry: &'a Registry,
    suffix: String,
}

impl<'a> TemplateApplier<'a> {
    pub fn new(registry: &'a Registry, suffix: impl Into<String>) -> Self {
        Self {
            registry,
            suffix: suffix.into(),
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Output path for `template`: the same path with the suffix removed.
    ///
    /// # Errors
    ///
    /// [`GrammarError::InvalidTemplatePath`] if the file name does not end with the
    /// suffix, or consists of the suffix alone.
    pub fn output_path(&self, template: &Path) -> Result<PathBuf, GrammarError> {
        let invalid = || GrammarError::InvalidTemplatePath {
            path: template.display().to_string(),
            suffix: self.suffix.clone(),
        };

        let file_name = template.file_name().and_then(|n| n.to_str()).ok_or_else(invalid)?;
        let stem = file_name.strip_suffix(self.suffix.as_str()).ok_or_else(invalid)?;
        if stem.is_empty() || self.suffix.is_empty() {
            return Err(invalid());
        }

        Ok(template.with_file_name(stem))
    }

    /// Substitute every placeholder of `text` in one pass.
    ///
    /// `origin` names the text in errors.
    ///
    /// # Errors
    ///
    /// - [`GrammarError::UnresolvedPlaceholder`] for a name absent from the registry
    /// - [`GrammarError::InvalidPlaceholder`] for a stray `$`
    pub fn render_text(&self, text: &str, origin: &str) -> Result<String, GrammarError> {
        placeholder::substitute(text, |key| self.registry.get(key)).map_err(|e| match e {
            SubstituteError::Missing(key) => GrammarError::UnresolvedPlaceholder {
                suggestions: self.registry.similar_names(&key),
                key,
                file: origin.to_string(),
            },
            SubstituteError::Invalid {
                line,
                column,
            } => GrammarError::InvalidPlaceholder {
                file: origin.to_string(),
                line,
                column,
            },
        })
    }

    /// Read and render one template without touching its output.
    pub fn render(&self, template: &Path) -> Result<RenderedTemplate> {
        let output = self.output_path(template)?;
        let text = read_text(template)?;
        let content = self.render_text(&text, &template.display().to_string())?;

        tracing::debug!(
            "Rendered {} ({} placeholders)",
            template.display(),
            placeholder::placeholder_names(&text).len()
        );

        Ok(RenderedTemplate {
            template: template.to_path_buf(),
            output,
            content,
        })
    }

    /// Render `template` and write the result over its output path.
    pub fn apply(&self, template: &Path) -> Result<PathBuf> {
        let rendered = self.render(template)?;
        safe_write(&rendered.output, &rendered.content)
            .with_context(|| format!("Failed to write output for {}", template.display()))?;
        tracing::info!("Generated {}", rendered.output.display());
        Ok(rendered.output)
    }

    /// Apply every template in order, stopping at the first failure.
    ///
    /// Outputs written before the failing template are left in place.
    pub fn apply_all(&self, templates: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut outputs = Vec::with_capacity(templates.len());
        for template in templates {
            outputs.push(self.apply(template)?);
        }
        Ok(outputs)
    }

    /// Compare the rendered content of `template` with its output on disk.
    pub fn check(&self, template: &Path) -> Result<(PathBuf, OutputStatus)> {
        let rendered = self.render(template)?;
        let status = match read_text_if_exists(&rendered.output)? {
            None => OutputStatus::Missing,
            Some(existing) if existing == rendered.content => OutputStatus::UpToDate,
            Some(_) => OutputStatus::Stale,
        };
        Ok((rendered.output, status))
    }
}
