// src/registry.rs
use std::collections::HashMap;

use crate::models::TagOccurrence;

/// Summary label to occurrence, used to resolve "jump to" requests.
///
/// Filled by [`render_summary`](crate::summary::render_summary) and replaced
/// as a whole on every render. Lookups may return occurrences a newer scan
/// no longer knows about.
#[derive(Debug, Default, Clone)]
pub struct NavigationRegistry {
    entries: HashMap<String, TagOccurrence>,
}

impl NavigationRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every entry and keys the given occurrences by label. When two
    /// occurrences share a label the later one is kept.
    pub fn replace(&mut self, occurrences: impl IntoIterator<Item = TagOccurrence>) {
        self.entries.clear();
        for occurrence in occurrences {
            self.entries.insert(occurrence.label.clone(), occurrence);
        }
    }

    #[must_use]
    pub fn resolve(&self, label: &str) -> Option<&TagOccurrence> {
        self.entries.get(label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
