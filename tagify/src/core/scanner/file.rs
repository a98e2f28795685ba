// src/core/scanner/file.rs
use std::fs;
use std::path::Path;
use tracing::trace;

use crate::config::ScanConfig;
use crate::core::error::ScanError;
use crate::core::scanner::matcher::TagMatcher;
use crate::models::TagOccurrence;
use crate::utils::{decode_lossy, relative_label};

/// Scans one file for tags.
///
/// The file is decoded lossily, so encoding problems never fail the scan.
/// Labels are built relative to `scan_root`.
///
/// # Errors
///
/// Returns [`ScanError::Io`] if the file cannot be read.
#[inline]
pub fn scan_file(
    path: &Path,
    scan_root: &Path,
    config: &ScanConfig,
    matcher: &TagMatcher,
) -> Result<Vec<TagOccurrence>, ScanError> {
    let bytes = fs::read(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_lossy(&bytes);
    Ok(scan_text(&text, path, scan_root, config, matcher))
}

/// Scans text already in memory as if it were the contents of `path`.
///
/// Byte ranges are offsets into `text`. Lines end at `\n`, `\r\n` or a lone
/// `\r` and keep their terminators while the running cursor advances.
#[must_use]
pub fn scan_text(
    text: &str,
    path: &Path,
    scan_root: &Path,
    config: &ScanConfig,
    matcher: &TagMatcher,
) -> Vec<TagOccurrence> {
    let mut occurrences = Vec::new();
    let mut cursor = 0_usize;

    for (index, line) in lines_inclusive(text).enumerate() {
        let line_number = index.saturating_add(1);

        for found in matcher.find_all(line) {
            if config.is_blacklisted(found.name) {
                trace!("Skipping blacklisted tag {} in {}", found.name, path.display());
                continue;
            }
            occurrences.push(TagOccurrence {
                tag_name: found.name.to_owned(),
                path: path.to_path_buf(),
                label: relative_label(path, scan_root, line_number),
                line: line_number,
                byte_range: cursor.saturating_add(found.start)..cursor.saturating_add(found.end),
            });
        }

        cursor = cursor.saturating_add(line.len());
    }

    occurrences
}

/// Lines with their terminators. `\n`, `\r\n` and a lone `\r` all end a line.
fn lines_inclusive(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = rest.find(['\n', '\r']).map_or(rest.len(), |pos| {
            let width = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
            pos.saturating_add(width)
        });
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}
