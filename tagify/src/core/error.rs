// src/core/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid tag anchor: {0}")]
    Pattern(#[from] regex::Error),

    #[error("scan cancelled")]
    Cancelled,
}
