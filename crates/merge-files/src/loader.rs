//! Loading configuration files into documents or typed values.

use crate::codec::{parse_document, parse_object};
use crate::format::FileFormat;
use merge_common::{Document, FileError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Stateless entry point for loading and writing configuration files.
///
/// Every call opens its own file handle and closes it before returning.
pub struct FileUtils;

impl FileUtils {
    /// Loads a JSON or YAML file into a generic document.
    ///
    /// Checks run in this order: the path must name an existing file, the
    /// file must not be empty, and the extension must be supported.
    ///
    /// # Errors
    ///
    /// Invalid-argument errors for a missing file or an absent or
    /// unsupported extension. I/O errors for an empty file, a read
    /// failure, malformed content, or a root value that is not a mapping.
    pub fn load_file_to_map(path: impl AsRef<Path>) -> Result<Document> {
        let path = path.as_ref();
        let (format, content) = read_checked(path)?;
        let document = parse_document(&content, format)?;

        debug!(
            path = %path.display(),
            %format,
            keys = document.len(),
            "Loaded document"
        );
        Ok(document)
    }

    /// Loads a JSON or YAML file straight into `T`.
    ///
    /// Same checks as [`FileUtils::load_file_to_map`], plus an empty path
    /// string is rejected up front.
    ///
    /// # Errors
    ///
    /// See [`FileUtils::load_file_to_map`]. Decoding failures for `T`
    /// surface as I/O errors.
    pub fn load_file_to_object<T: DeserializeOwned>(path: impl AsRef<str>) -> Result<T> {
        let path = path.as_ref();
        if path.is_empty() {
            return Err(FileError::EmptyPath);
        }

        let path = Path::new(path);
        let (format, content) = read_checked(path)?;
        let value = parse_object(&content, format)?;

        debug!(
            path = %path.display(),
            %format,
            target = std::any::type_name::<T>(),
            "Loaded typed document"
        );
        Ok(value)
    }
}

/// Validates `path` and reads its content.
fn read_checked(path: &Path) -> Result<(FileFormat, String)> {
    if !path.is_file() {
        return Err(FileError::nonexistent(path));
    }

    let metadata = fs::metadata(path).map_err(|e| FileError::io(path, e))?;
    if metadata.len() == 0 {
        return Err(FileError::empty_file(path));
    }

    let format = FileFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| FileError::io(path, e))?;
    Ok((format, content))
}
