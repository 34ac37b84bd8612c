//! Error types and utilities for document file operations

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for document file operations
pub type Result<T> = std::result::Result<T, FileError>;

/// Broad classification of a [`FileError`].
///
/// Callers that only care whether the input was rejected up front or the
/// file itself could not be processed can match on this instead of the
/// individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileErrorKind {
    /// The caller supplied a path that cannot be used: empty, missing,
    /// without an extension, or in an unsupported format.
    InvalidArgument,
    /// The file was accepted but reading, writing, or decoding it failed.
    Io,
}

/// Main error type for loading and writing document files
#[derive(Error, Debug)]
pub enum FileError {
    /// The path string was empty
    #[error("Empty file path provided")]
    EmptyPath,

    /// The path does not point at an existing file
    #[error("Nonexisting file path provided: {}", .path.display())]
    NonexistentPath {
        /// Path as given by the caller
        path: PathBuf,
    },

    /// The file name has no extension or ends with a bare `.`
    #[error("File does not have a valid extension: {}", .path.display())]
    InvalidExtension {
        /// Path as given by the caller
        path: PathBuf,
    },

    /// The extension is not one of the supported formats
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat {
        /// Extension as found in the file name
        extension: String,
    },

    /// The file exists but has no content
    #[error("File is empty: {}", .path.display())]
    EmptyFile {
        /// Path of the empty file
        path: PathBuf,
    },

    /// The decoded root value is not a mapping
    #[error("Document root is not a mapping, found {found}")]
    NotAMapping {
        /// Kind of value found at the root
        found: &'static str,
    },

    /// Reading or writing the file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding or decoding failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl FileError {
    /// Create a nonexistent path error
    pub fn nonexistent(path: impl AsRef<Path>) -> Self {
        Self::NonexistentPath {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create an invalid extension error
    pub fn invalid_extension(path: impl AsRef<Path>) -> Self {
        Self::InvalidExtension {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create an unsupported format error
    pub fn unsupported(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Create an empty file error
    pub fn empty_file(path: impl AsRef<Path>) -> Self {
        Self::EmptyFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create an I/O error bound to the path being accessed
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Classify this error
    pub const fn kind(&self) -> FileErrorKind {
        match self {
            Self::EmptyPath
            | Self::NonexistentPath { .. }
            | Self::InvalidExtension { .. }
            | Self::UnsupportedFormat { .. } => FileErrorKind::InvalidArgument,
            Self::EmptyFile { .. }
            | Self::NotAMapping { .. }
            | Self::Io { .. }
            | Self::Json(_)
            | Self::Yaml(_) => FileErrorKind::Io,
        }
    }

    /// Whether the caller supplied an unusable path
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self.kind(), FileErrorKind::InvalidArgument)
    }

    /// Whether the file could not be read, written, or decoded
    pub const fn is_io(&self) -> bool {
        matches!(self.kind(), FileErrorKind::Io)
    }
}
