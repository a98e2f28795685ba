// src/summary.rs
use std::ops::Range;

use crate::models::{TagIndex, TagOccurrence};
use crate::registry::NavigationRegistry;

/// Trailing spaces after each label line, a Markdown hard line break.
const LABEL_PADDING: &str = "  ";

/// A rendered summary document and the clickable label spans inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub text: String,
    pub links: Vec<SummaryLink>,
}

/// Byte span of one occurrence label within [`Summary::text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLink {
    pub label: String,
    pub range: Range<usize>,
}

impl Summary {
    /// The link containing the byte offset, if any.
    #[must_use]
    pub fn link_at(&self, offset: usize) -> Option<&SummaryLink> {
        self.links.iter().find(|link| link.range.contains(&offset))
    }
}

/// Renders the summary of `index` and refills `registry` with every listed
/// occurrence.
///
/// Tags are listed in natural order. Each gets a heading, an `=` underline of
/// the same length, one `label  ` line per occurrence and a blank line:
///
/// ```text
/// bug
/// ===
/// a.md:3  
/// b.md:1  
///
/// ```
pub fn render_summary(index: &TagIndex, registry: &mut NavigationRegistry) -> Summary {
    let mut lines: Vec<String> = Vec::new();
    let mut links = Vec::new();
    let mut written: Vec<&TagOccurrence> = Vec::new();
    // Offset of the next line; every line is followed by one `\n`.
    let mut cursor = 0_usize;

    for tag in index.sorted_tag_names() {
        let heading = format!("{tag}\n{}", "=".repeat(tag.len()));
        cursor = cursor.saturating_add(heading.len()).saturating_add(1);
        lines.push(heading);

        for occurrence in index.get(tag).unwrap_or_default() {
            let start = cursor;
            let line = format!("{}{LABEL_PADDING}", occurrence.label);
            cursor = cursor.saturating_add(line.len()).saturating_add(1);
            lines.push(line);

            // Back off the padding and the newline.
            let end = cursor.saturating_sub(LABEL_PADDING.len().saturating_add(1));
            links.push(SummaryLink {
                label: occurrence.label.clone(),
                range: start..end,
            });
            written.push(occurrence);
        }

        lines.push(String::new());
        cursor = cursor.saturating_add(1);
    }

    registry.replace(written.into_iter().cloned());

    Summary {
        text: lines.join("\n"),
        links,
    }
}
