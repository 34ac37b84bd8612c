//! File format resolution from file name extensions.

use merge_common::{FileError, Result};
use std::fmt;
use std::path::Path;
use tracing::trace;

/// Document formats understood by the loader and writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// JSON, selected by `.json`.
    Json,
    /// YAML, selected by `.yaml` or `.yml`.
    Yaml,
}

impl FileFormat {
    /// Resolves the format for a bare extension (without the leading dot).
    ///
    /// Matching ignores ASCII case.
    pub fn from_extension(extension: &str) -> Result<Self> {
        if extension.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else if extension.eq_ignore_ascii_case("yaml") || extension.eq_ignore_ascii_case("yml") {
            Ok(Self::Yaml)
        } else {
            Err(FileError::unsupported(extension))
        }
    }

    /// Resolves the format from the extension of `path`'s file name.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = file_extension(path)?;
        let format = Self::from_extension(extension)?;
        trace!(path = %path.display(), %format, "Resolved file format");
        Ok(format)
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Yaml => write!(f, "YAML"),
        }
    }
}

/// Returns the text after the last `.` of the file name.
///
/// A name with no `.`, or with nothing after its last `.`, has no valid
/// extension. Unlike [`Path::extension`], a leading dot counts, so
/// `.json` yields `json`.
pub fn file_extension(path: &Path) -> Result<&str> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| FileError::invalid_extension(path))?;

    match name.rfind('.') {
        Some(index) if index + 1 < name.len() => Ok(&name[index + 1..]),
        _ => Err(FileError::invalid_extension(path)),
    }
}
