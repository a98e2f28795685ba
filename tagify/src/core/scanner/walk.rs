// src/core/scanner/walk.rs
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::ScanConfig;
use crate::core::error::ScanError;
use crate::core::exclude::ExcludePatterns;
use crate::core::scanner::cancel::CancelToken;
use crate::core::scanner::file::scan_file;
use crate::core::scanner::matcher::TagMatcher;
use crate::models::{Extension, ScanStats, TagIndex};
use crate::utils::absolutize;

/// Walks every root folder and every open file and gathers all occurrences,
/// duplicates included, in visit order.
///
/// Roots are walked depth first with the files of a directory before its
/// subdirectories, siblings sorted by name. Symlinks are followed; an entry
/// that would loop back onto one of its ancestors is skipped. Each open file
/// is labelled relative to its own directory.
///
/// Unreadable roots and files are logged and skipped.
///
/// # Errors
///
/// * [`ScanError::Cancelled`] if `cancel` fires during the walk
/// * [`ScanError::Pattern`] if the anchor cannot be compiled
pub fn collect_raw(
    roots: &[PathBuf],
    open_files: &[PathBuf],
    config: &ScanConfig,
    cancel: &CancelToken,
) -> Result<(TagIndex, ScanStats), ScanError> {
    let mut walker = Walker {
        config,
        matcher: TagMatcher::new(&config.anchor)?,
        excludes: ExcludePatterns::new(&config.exclude),
        cancel,
        index: TagIndex::new(),
        stats: ScanStats::new(),
    };

    for root in roots {
        walker.walk_root(root)?;
    }

    for file in open_files {
        let file = match absolutize(file) {
            Ok(path) => path,
            Err(err) => {
                warn!("Skipping open file {}: {err}", file.display());
                continue;
            }
        };
        let scan_root = file.parent().map_or_else(PathBuf::new, Path::to_path_buf);
        walker.visit_file(&file, &scan_root)?;
    }

    debug!(
        "Collected {} raw occurrences of {} tags from {} files",
        walker.index.occurrence_count(),
        walker.index.len(),
        walker.stats.files_scanned
    );

    Ok((walker.index, walker.stats))
}

struct Walker<'a> {
    config: &'a ScanConfig,
    matcher: TagMatcher,
    excludes: ExcludePatterns,
    cancel: &'a CancelToken,
    index: TagIndex,
    stats: ScanStats,
}

impl Walker<'_> {
    fn walk_root(&mut self, root: &Path) -> Result<(), ScanError> {
        let root = match absolutize(root) {
            Ok(path) => path,
            Err(err) => {
                warn!("Skipping root {}: {err}", root.display());
                return Ok(());
            }
        };

        for entry in WalkDir::new(&root)
            .follow_links(true)
            .sort_by(files_before_dirs)
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    if let Some(ancestor) = err.loop_ancestor() {
                        debug!("Skipping symlink loop back to {}", ancestor.display());
                    } else {
                        warn!("Skipping unreadable entry under {}: {err}", root.display());
                    }
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            // A root given as a plain file behaves like an open file.
            let scan_root = if entry.depth() == 0 {
                entry
                    .path()
                    .parent()
                    .map_or_else(PathBuf::new, Path::to_path_buf)
            } else {
                root.clone()
            };
            self.visit_file(entry.path(), &scan_root)?;
        }

        Ok(())
    }

    fn visit_file(&mut self, path: &Path, scan_root: &Path) -> Result<(), ScanError> {
        if self.cancel.is_cancelled() {
            return Err(ScanError::Cancelled);
        }

        self.stats.files_seen = self.stats.files_seen.saturating_add(1);

        if !is_eligible(path, scan_root, self.config, &self.excludes) {
            return Ok(());
        }

        match scan_file(path, scan_root, self.config, &self.matcher) {
            Ok(occurrences) => {
                debug!("{}: {} tags", path.display(), occurrences.len());
                self.stats.files_scanned = self.stats.files_scanned.saturating_add(1);
                self.index.extend(occurrences);
            }
            Err(err) => {
                warn!("Skipping file: {err}");
                self.stats.files_skipped = self.stats.files_skipped.saturating_add(1);
            }
        }

        Ok(())
    }
}

/// Whether a file takes part in the scan: its extension is allowed and no
/// exclude pattern matches it.
#[must_use]
pub fn is_eligible(
    path: &Path,
    scan_root: &Path,
    config: &ScanConfig,
    excludes: &ExcludePatterns,
) -> bool {
    if !config.accepts(&Extension::of_path(path)) {
        return false;
    }
    let relative = path.strip_prefix(scan_root).unwrap_or(path);
    !excludes.matches(relative)
}

fn files_before_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
