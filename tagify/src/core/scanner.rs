// src/core/scanner.rs
pub mod cancel;
pub mod file;
pub mod matcher;
pub mod walk;


use std::path::PathBuf;
use tracing::info;

use crate::config::ScanConfig;
use crate::core::aggregate::deduplicate;
use crate::core::error::ScanError;
use crate::models::{ScanStats, TagIndex};

pub use cancel::CancelToken;
pub use file::{scan_file, scan_text};
pub use matcher::{TagMatch, TagMatcher};
pub use walk::{collect_raw, is_eligible};

/// Scans roots and open files and returns the deduplicated index.
///
/// # Errors
///
/// See [`collect_raw`].
#[inline]
pub fn build_index(
    roots: &[PathBuf],
    open_files: &[PathBuf],
    config: &ScanConfig,
    cancel: &CancelToken,
) -> Result<TagIndex, ScanError> {
    build_index_with_stats(roots, open_files, config, cancel).map(|(index, _)| index)
}

/// Like [`build_index`], also returning the walk counters.
///
/// # Errors
///
/// See [`collect_raw`].
pub fn build_index_with_stats(
    roots: &[PathBuf],
    open_files: &[PathBuf],
    config: &ScanConfig,
    cancel: &CancelToken,
) -> Result<(TagIndex, ScanStats), ScanError> {
    let (raw, stats) = collect_raw(roots, open_files, config, cancel)?;
    let index = deduplicate(raw);

    info!(
        "Indexed {} tags ({} occurrences) in {} of {} files",
        index.len(),
        index.occurrence_count(),
        stats.files_scanned,
        stats.files_seen
    );

    Ok((index, stats))
}
