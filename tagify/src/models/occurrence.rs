// src/models/occurrence.rs
use std::ops::Range;
use std::path::PathBuf;

/// One tag found at a specific file and line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOccurrence {
    pub tag_name: String,
    /// Absolute path of the containing file.
    pub path: PathBuf,
    /// `<path relative to the scan root>:<line>`, also the navigation key.
    pub label: String,
    /// 1-based line number.
    pub line: usize,
    /// Byte offsets of the tag name inside the decoded file text.
    pub byte_range: Range<usize>,
}

impl TagOccurrence {
    /// `<absolute path>:<line>`, the form editors accept to open a file at a line.
    #[must_use]
    pub fn encoded_position(&self) -> String {
        format!("{}:{}", self.path.display(), self.line)
    }

    #[must_use]
    pub fn location(&self) -> (&PathBuf, usize) {
        (&self.path, self.line)
    }
}
