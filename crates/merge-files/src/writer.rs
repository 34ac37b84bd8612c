//! Writing documents back to configuration files.

use crate::codec::render_document;
use crate::format::FileFormat;
use crate::loader::FileUtils;
use merge_common::{Document, FileError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

impl FileUtils {
    /// Writes `data` to `path`, creating or truncating the file.
    ///
    /// The codec is chosen from the extension of `path`. The document is
    /// fully encoded before the file is opened, so an encoding failure
    /// leaves any existing file untouched.
    ///
    /// # Errors
    ///
    /// Invalid-argument errors for an absent or unsupported extension.
    /// I/O errors when encoding or writing fails.
    pub fn write_map_to_file(path: impl AsRef<Path>, data: &Document) -> Result<()> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)?;
        let rendered = render_document(data, format)?;

        fs::write(path, rendered.as_bytes()).map_err(|e| FileError::io(path, e))?;

        debug!(
            path = %path.display(),
            %format,
            keys = data.len(),
            bytes = rendered.len(),
            "Wrote document"
        );
        Ok(())
    }
}
