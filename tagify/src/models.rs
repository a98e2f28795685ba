// src/models.rs
pub mod extension;
pub mod occurrence;
pub mod scan_stats;
pub mod tag_index;

pub use extension::Extension;
pub use occurrence::TagOccurrence;
pub use scan_stats::ScanStats;
pub use tag_index::TagIndex;
