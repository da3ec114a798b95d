//! The run-scoped fragment registry.

use std::collections::BTreeMap;

use crate::core::GrammarError;

/// Mapping from fragment name to resolved text for one generation run.
///
/// Every name is written exactly once; a second insert under the same name is an
/// error rather than an overwrite. Iteration is sorted by name so listings and
/// diagnostics are stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: BTreeMap<String, String>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `text` under `name`.
    ///
    /// # Errors
    ///
    /// [`GrammarError::DuplicateFragment`] when `name` is already present. The stored
    /// value is left unchanged in that case.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) -> Result<(), GrammarError> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(GrammarError::DuplicateFragment {
                name,
            });
        }
        self.entries.insert(name, text.into());
        Ok(())
    }

    /// Resolved text of `name`, if registered.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(name, text)` pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Up to three registered names close to `target`, closest first.
    ///
    /// Used to enrich unresolved-placeholder errors.
    pub fn similar_names(&self, target: &str) -> Vec<String> {
        let mut scored: Vec<(&str, usize)> =
            self.names().map(|name| (name, strsim::levenshtein(target, name))).collect();
        scored.sort_by_key(|(_, distance)| *distance);

        scored
            .into_iter()
            .filter(|(_, distance)| *distance <= target.len() * SIMILARITY_THRESHOLD_PERCENT / 100)
            .take(3)
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

/// Maximum Levenshtein distance, as a percentage of the target length, for a suggestion.
const SIMILARITY_THRESHOLD_PERCENT: usize = 50;
