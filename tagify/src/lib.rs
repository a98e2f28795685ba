// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod registry;
pub mod session;
pub mod summary;
pub mod utils;

pub use cli::{Args, execute, run};
pub use config::{ScanConfig, Settings};
pub use crate::core::aggregate::deduplicate;
pub use crate::core::error::ScanError;
pub use crate::core::scanner::{
    CancelToken, TagMatch, TagMatcher, build_index, build_index_with_stats, collect_raw,
    scan_file, scan_text,
};
pub use models::{Extension, ScanStats, TagIndex, TagOccurrence};
pub use registry::NavigationRegistry;
pub use session::{TagSession, Trigger, Workspace};
pub use summary::{Summary, SummaryLink, render_summary};
pub use utils::natural_cmp;
