// src/models/extension.rs
use std::fmt;
use std::path::Path;

/// A file extension accepted by the scanner.
///
/// `NoExtension` stands for file names without any `.` (e.g. `Makefile`) or
/// ending in one. In settings it is spelled `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Extension {
    Named(String),
    NoExtension,
}

impl Extension {
    /// Extension of a file name: the text after its last `.`.
    ///
    /// `.bashrc` has the extension `bashrc`. Names without a `.` and names
    /// ending in one (`archive.`) have none.
    #[must_use]
    pub fn of_file_name(name: &str) -> Self {
        match name.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => Self::Named(ext.to_owned()),
            _ => Self::NoExtension,
        }
    }

    #[must_use]
    pub fn of_path(path: &Path) -> Self {
        path.file_name()
            .map_or(Self::NoExtension, |name| Self::of_file_name(&name.to_string_lossy()))
    }
}

impl From<&str> for Extension {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Self::NoExtension
        } else {
            Self::Named(value.to_owned())
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(ext) => write!(f, ".{ext}"),
            Self::NoExtension => f.write_str("<no extension>"),
        }
    }
}
