//! Prefix table and base IRI, the namespace state a parse mutates.

use std::collections::HashMap;

use tracing::debug;

use crate::model::iri;

/// Mapping from prefix label (with its trailing colon, e.g. `"ns:"`) to
/// namespace IRI.
///
/// Insert-only: redefining a label replaces the old namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTable {
    entries: HashMap<String, String>,
}

impl PrefixTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `label` to `namespace`, returning the namespace it replaced.
    pub fn insert(&mut self, label: &str, namespace: &str) -> Option<String> {
        let previous = self
            .entries
            .insert(label.to_string(), namespace.to_string());
        if let Some(old) = &previous {
            debug!(label, old = %old, new = namespace, "prefix redefined");
        }
        previous
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }

    /// Expand `prefix:local` when `prefix:` is bound.
    pub fn expand(&self, label: &str, local: &str) -> Option<String> {
        self.get(label).map(|ns| format!("{ns}{local}"))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by label.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort();
        entries
    }
}

/// Base IRI plus prefix table for one parse.
#[derive(Debug, Clone, Default)]
pub struct Namespaces {
    pub base: String,
    pub prefixes: PrefixTable,
}

impl Namespaces {
    pub fn with_base(base: &str) -> Self {
        Self {
            base: base.to_string(),
            prefixes: PrefixTable::new(),
        }
    }

    /// Resolve an IRI reference read between `<` and `>`.
    pub fn resolve(&self, reference: &str) -> String {
        iri::resolve(&self.base, reference)
    }
}
