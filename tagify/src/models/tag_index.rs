// src/models/tag_index.rs
use indexmap::IndexMap;
use indexmap::map::Iter;

use crate::models::TagOccurrence;
use crate::utils::natural_cmp;

/// Tag name to occurrences, in the order tags were first seen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagIndex {
    tags: IndexMap<String, Vec<TagOccurrence>>,
}

impl TagIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an occurrence under its own tag name.
    pub fn push(&mut self, occurrence: TagOccurrence) {
        self.tags
            .entry(occurrence.tag_name.clone())
            .or_default()
            .push(occurrence);
    }

    pub fn extend(&mut self, occurrences: impl IntoIterator<Item = TagOccurrence>) {
        for occurrence in occurrences {
            self.push(occurrence);
        }
    }

    pub(crate) fn insert(&mut self, tag: String, occurrences: Vec<TagOccurrence>) {
        self.tags.insert(tag, occurrences);
    }

    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&[TagOccurrence]> {
        self.tags.get(tag).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains_tag(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Total number of occurrences over all tags.
    #[must_use]
    pub fn occurrence_count(&self) -> usize {
        self.tags.values().map(Vec::len).sum()
    }

    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    /// Tag names in natural order, the order summaries and pickers use.
    #[must_use]
    pub fn sorted_tag_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tag_names().collect();
        names.sort_by(|a, b| natural_cmp(a, b));
        names
    }

    pub fn iter(&self) -> Iter<'_, String, Vec<TagOccurrence>> {
        self.tags.iter()
    }
}

impl<'a> IntoIterator for &'a TagIndex {
    type Item = (&'a String, &'a Vec<TagOccurrence>);
    type IntoIter = Iter<'a, String, Vec<TagOccurrence>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for TagIndex {
    type Item = (String, Vec<TagOccurrence>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<TagOccurrence>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}
