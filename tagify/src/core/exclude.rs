// src/core/exclude.rs
use glob::{MatchOptions, Pattern};
use std::path::Path;
use tracing::warn;

/// Compiled `exclude` globs.
///
/// A pattern excludes a file when it matches either the path relative to the
/// scan root or the bare file name, so `*.min.js` and `vendor/**` both work.
#[derive(Debug, Default)]
pub struct ExcludePatterns {
    patterns: Vec<Pattern>,
}

impl ExcludePatterns {
    /// Compiles every pattern, dropping (and logging) invalid ones.
    #[must_use]
    pub fn new(patterns: &[String]) -> Self {
        let patterns = patterns
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .filter_map(|p| match Pattern::new(p) {
                Ok(compiled) => Some(compiled),
                Err(err) => {
                    warn!("Ignoring invalid exclude pattern `{p}`: {err}");
                    None
                }
            })
            .collect();
        Self { patterns }
    }

    #[must_use]
    pub fn matches(&self, relative_path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }

        let options = MatchOptions {
            require_literal_separator: true,
            ..MatchOptions::new()
        };
        let file_name = relative_path.file_name().map(Path::new);

        self.patterns.iter().any(|pattern| {
            pattern.matches_path_with(relative_path, options)
                || file_name.is_some_and(|name| pattern.matches_path_with(name, options))
        })
    }
}
