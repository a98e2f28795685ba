// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::models::Extension;

/// Name of the settings file looked up from the scanned folder upwards.
pub const SETTINGS_FILE: &str = ".tagify.toml";

pub const DEFAULT_ANCHOR: &str = "#@";
pub const DEFAULT_BLACKLIST: &[&str] = &["property"];
pub const DEFAULT_EXTENSIONS: &[&str] = &["md", "py", "html", "htm", "js"];

/// Everything one scan needs. Built from [`Settings`] and never changed while
/// the scan runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub anchor: String,
    pub blacklisted_tags: HashSet<String>,
    pub extensions: Vec<Extension>,
    /// Glob patterns matched against root-relative paths and file names.
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            anchor: DEFAULT_ANCHOR.to_owned(),
            blacklisted_tags: DEFAULT_BLACKLIST.iter().map(|&t| t.to_owned()).collect(),
            extensions: default_extensions(),
            exclude: Vec::new(),
        }
    }
}

impl ScanConfig {
    #[must_use]
    pub fn accepts(&self, extension: &Extension) -> bool {
        self.extensions.contains(extension)
    }

    #[must_use]
    pub fn is_blacklisted(&self, tag: &str) -> bool {
        self.blacklisted_tags.contains(tag)
    }
}

/// Host settings, as read from `.tagify.toml`.
///
/// Every key is optional. A key holding a value of the wrong type falls back
/// to its default, so a broken settings file never prevents a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Tag names always offered by the tag picker, found or not.
    pub common_tags: Vec<String>,
    pub blacklisted_tags: Vec<String>,
    pub analyse_on_start: bool,
    pub extensions: Vec<Extension>,
    pub tag_anchor: String,
    pub exclude: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            common_tags: Vec::new(),
            blacklisted_tags: DEFAULT_BLACKLIST.iter().map(|&t| t.to_owned()).collect(),
            analyse_on_start: true,
            extensions: default_extensions(),
            tag_anchor: DEFAULT_ANCHOR.to_owned(),
            exclude: Vec::new(),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct RawSettings {
    common_tags: Option<toml::Value>,
    blacklisted_tags: Option<toml::Value>,
    analyse_on_start: Option<toml::Value>,
    extensions: Option<toml::Value>,
    tag_anchor: Option<toml::Value>,
    exclude: Option<toml::Value>,
}

impl Settings {
    /// Parses settings, replacing malformed keys (or a malformed document)
    /// with defaults.
    #[must_use]
    pub fn from_toml_str(content: &str) -> Self {
        let raw: RawSettings = match toml::from_str(content) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("Ignoring unparsable settings, using defaults: {err}");
                return Self::default();
            }
        };

        let defaults = Self::default();
        Self {
            common_tags: raw
                .common_tags
                .and_then(|v| string_list("common_tags", &v))
                .unwrap_or(defaults.common_tags),
            blacklisted_tags: raw
                .blacklisted_tags
                .and_then(|v| string_list("blacklisted_tags", &v))
                .unwrap_or(defaults.blacklisted_tags),
            analyse_on_start: raw
                .analyse_on_start
                .and_then(|v| boolean("analyse_on_start", &v))
                .unwrap_or(defaults.analyse_on_start),
            extensions: raw
                .extensions
                .and_then(|v| string_list("extensions", &v))
                .map_or(defaults.extensions, |exts| {
                    exts.iter().map(|e| Extension::from(e.as_str())).collect()
                }),
            tag_anchor: raw
                .tag_anchor
                .and_then(|v| anchor(&v))
                .unwrap_or(defaults.tag_anchor),
            exclude: raw
                .exclude
                .and_then(|v| string_list("exclude", &v))
                .unwrap_or(defaults.exclude),
        }
    }

    /// Reads settings from one file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read. Malformed content is not
    /// an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        debug!("Loaded settings from {}", path.display());
        Ok(Self::from_toml_str(&content))
    }

    /// Looks for `.tagify.toml` in `dir` and then in each parent directory,
    /// stopping at the first one found. Defaults when there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file exists but cannot be read.
    pub fn discover(dir: &Path) -> Result<Self> {
        let mut current_dir = dir.to_path_buf();
        let mut visited: HashSet<PathBuf> = HashSet::new();

        while visited.insert(current_dir.clone()) {
            let candidate = current_dir.join(SETTINGS_FILE);
            if candidate.is_file() {
                return Self::load(&candidate);
            }

            match current_dir.parent() {
                Some(parent) => current_dir = parent.to_path_buf(),
                None => break,
            }
        }

        Ok(Self::default())
    }

    #[must_use]
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            anchor: self.tag_anchor.clone(),
            blacklisted_tags: self.blacklisted_tags.iter().cloned().collect(),
            extensions: self.extensions.clone(),
            exclude: self.exclude.clone(),
        }
    }
}

fn default_extensions() -> Vec<Extension> {
    DEFAULT_EXTENSIONS.iter().map(|&e| Extension::from(e)).collect()
}

fn string_list(key: &str, value: &toml::Value) -> Option<Vec<String>> {
    let list = value.as_array().and_then(|items| {
        items
            .iter()
            .map(|item| item.as_str().map(str::to_owned))
            .collect::<Option<Vec<_>>>()
    });
    if list.is_none() {
        warn!("Setting `{key}` must be a list of strings, using the default");
    }
    list
}

fn boolean(key: &str, value: &toml::Value) -> Option<bool> {
    let flag = value.as_bool();
    if flag.is_none() {
        warn!("Setting `{key}` must be true or false, using the default");
    }
    flag
}

fn anchor(value: &toml::Value) -> Option<String> {
    let anchor = value.as_str().filter(|s| !s.is_empty()).map(str::to_owned);
    if anchor.is_none() {
        warn!("Setting `tag_anchor` must be a non-empty string, using the default");
    }
    anchor
}
