//! # Merge Files
//!
//! Loads JSON and YAML configuration files into generic documents or typed
//! values, and writes documents back to disk.
//!
//! The codec is chosen from the file extension: `json` selects JSON,
//! `yaml` and `yml` select YAML. Matching ignores ASCII case.
//!
//! ```no_run
//! use merge_files::FileUtils;
//!
//! let document = FileUtils::load_file_to_map("settings.yaml")?;
//! FileUtils::write_map_to_file("settings.json", &document)?;
//! # Ok::<(), merge_common::FileError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod codec;
pub mod format;
pub mod loader;
pub mod writer;

pub use codec::*;
pub use format::*;
pub use loader::*;

pub use merge_common::{Document, FileError, FileErrorKind, Result, Value};
