// src/core/aggregate.rs
use std::collections::HashSet;
use std::path::PathBuf;

use crate::models::TagIndex;

/// Drops repeated `(path, line)` pairs within each tag.
///
/// The first occurrence of a pair wins and order is otherwise kept. Pairs are
/// tracked per tag, so one line carrying two different tags stays listed
/// under both. Applying it twice changes nothing.
#[must_use]
pub fn deduplicate(raw: TagIndex) -> TagIndex {
    let mut unique = TagIndex::new();

    for (tag, occurrences) in raw {
        let mut seen: HashSet<(PathBuf, usize)> = HashSet::with_capacity(occurrences.len());
        let kept = occurrences
            .into_iter()
            .filter(|occurrence| seen.insert((occurrence.path.clone(), occurrence.line)))
            .collect();
        unique.insert(tag, kept);
    }

    unique
}
