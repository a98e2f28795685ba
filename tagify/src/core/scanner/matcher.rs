// src/core/scanner/matcher.rs
use regex::Regex;

use crate::core::error::ScanError;

/// Characters a tag name is made of, after the anchor.
const TAG_NAME_CLASS: &str = "[._a-zA-Z0-9]+";

/// A tag found in a line. `start..end` is the byte span of `name` within the
/// line, anchor excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMatch<'a> {
    pub name: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Finds `<anchor><name>` occurrences in text.
///
/// The anchor is literal (no escaping mechanism, no word boundary on its
/// left) and the name is the longest run of `[A-Za-z0-9._]` following it.
#[derive(Debug, Clone)]
pub struct TagMatcher {
    pattern: Regex,
}

impl TagMatcher {
    /// # Errors
    ///
    /// Returns [`ScanError::Pattern`] if the compiled expression exceeds the
    /// regex size limits (only possible with absurdly long anchors).
    pub fn new(anchor: &str) -> Result<Self, ScanError> {
        let pattern = Regex::new(&format!("{}({TAG_NAME_CLASS})", regex::escape(anchor)))?;
        Ok(Self { pattern })
    }

    /// All matches in `line`, left to right, non-overlapping.
    #[must_use]
    pub fn find_all<'a>(&self, line: &'a str) -> Vec<TagMatch<'a>> {
        self.pattern
            .captures_iter(line)
            .filter_map(|caps| caps.get(1))
            .map(|name| TagMatch {
                name: name.as_str(),
                start: name.start(),
                end: name.end(),
            })
            .collect()
    }
}
