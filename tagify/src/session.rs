// src/session.rs
use std::path::PathBuf;
use tracing::debug;

use crate::config::Settings;
use crate::core::error::ScanError;
use crate::core::scanner::{CancelToken, build_index_with_stats};
use crate::models::{ScanStats, TagIndex, TagOccurrence};
use crate::registry::NavigationRegistry;
use crate::summary::{Summary, render_summary};
use crate::utils::natural_cmp;

/// Host events that start a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The host started. Only scans when `analyse_on_start` is set.
    Startup,
    FileOpened,
    FileSaved,
    /// The user asked for a fresh summary.
    Rescan,
}

/// What the host currently has open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workspace {
    pub roots: Vec<PathBuf>,
    pub open_files: Vec<PathBuf>,
}

impl Workspace {
    #[must_use]
    pub fn new(roots: Vec<PathBuf>, open_files: Vec<PathBuf>) -> Self {
        Self { roots, open_files }
    }
}

/// State a host keeps between tag operations: settings, the tag names seen
/// by the last scan and the navigation registry of the last summary.
#[derive(Debug, Default)]
pub struct TagSession {
    settings: Settings,
    registry: NavigationRegistry,
    known_tags: Vec<String>,
    last_stats: ScanStats,
    cancel: CancelToken,
}

impl TagSession {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Swaps settings; the next scan uses them.
    pub fn reload_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Token that interrupts the scan currently running in this session.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    #[must_use]
    pub const fn registry(&self) -> &NavigationRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn last_stats(&self) -> ScanStats {
        self.last_stats
    }

    /// Reacts to a host event. Returns `None` for a startup event when
    /// `analyse_on_start` is off, otherwise the freshly built index.
    ///
    /// # Errors
    ///
    /// See [`TagSession::scan`].
    pub fn handle(
        &mut self,
        trigger: Trigger,
        workspace: &Workspace,
    ) -> Result<Option<TagIndex>, ScanError> {
        if trigger == Trigger::Startup && !self.settings.analyse_on_start {
            debug!("Startup scan disabled by settings");
            return Ok(None);
        }
        debug!("Scanning on {trigger:?}");
        self.scan(workspace).map(Some)
    }

    /// Full scan of the workspace. Refreshes the known tag names.
    ///
    /// # Errors
    ///
    /// * [`ScanError::Cancelled`] if the session's cancel token fired
    /// * [`ScanError::Pattern`] if the configured anchor cannot be compiled
    pub fn scan(&mut self, workspace: &Workspace) -> Result<TagIndex, ScanError> {
        self.cancel.reset();
        let config = self.settings.scan_config();
        let (index, stats) =
            build_index_with_stats(&workspace.roots, &workspace.open_files, &config, &self.cancel)?;

        self.known_tags = index.tag_names().map(str::to_owned).collect();
        self.last_stats = stats;
        Ok(index)
    }

    /// Renders `index` and makes its labels navigable.
    pub fn summarize(&mut self, index: &TagIndex) -> Summary {
        render_summary(index, &mut self.registry)
    }

    /// Occurrence behind a summary label, if the last summary listed it.
    #[must_use]
    pub fn navigate(&self, label: &str) -> Option<&TagOccurrence> {
        self.registry.resolve(label)
    }

    /// Tags to offer in a picker: known tags plus `common_tags`, without
    /// duplicates, in natural order.
    #[must_use]
    pub fn tag_menu(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .known_tags
            .iter()
            .chain(&self.settings.common_tags)
            .cloned()
            .collect();
        tags.sort_by(|a, b| natural_cmp(a, b).then_with(|| a.cmp(b)));
        tags.dedup();
        tags
    }

    /// Text inserted into a buffer when a tag is picked.
    #[must_use]
    pub fn tag_insertion(&self, tag: &str) -> String {
        format!("{}{tag} ", self.settings.tag_anchor)
    }
}
