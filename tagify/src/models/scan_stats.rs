// src/models/scan_stats.rs

/// Counters collected while walking the file set of one scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Files visited, eligible or not.
    pub files_seen: u64,
    pub files_scanned: u64,
    /// Eligible files that could not be read.
    pub files_skipped: u64,
}

impl ScanStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files_seen: 0,
            files_scanned: 0,
            files_skipped: 0,
        }
    }

    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "display only")]
    pub fn scanned_percentage(&self) -> f64 {
        if self.files_seen == 0 {
            return 0.0;
        }
        self.files_scanned as f64 * 100.0 / self.files_seen as f64
    }
}
