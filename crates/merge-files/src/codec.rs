//! In-memory encoding and decoding for each supported format.

use crate::format::FileFormat;
use merge_common::{value_kind, Document, FileError, Result, Value};
use serde::de::DeserializeOwned;

const YAML_DOCUMENT_START: &str = "---\n";

/// Decodes `content` into a document.
///
/// The root value must be a mapping.
pub fn parse_document(content: &str, format: FileFormat) -> Result<Document> {
    match parse_object::<Value>(content, format)? {
        Value::Object(document) => Ok(document),
        other => Err(FileError::NotAMapping {
            found: value_kind(&other),
        }),
    }
}

/// Decodes `content` directly into `T`.
///
/// Fields are matched by name; fields `T` does not declare are ignored
/// unless `T` opts into `#[serde(deny_unknown_fields)]`.
pub fn parse_object<T: DeserializeOwned>(content: &str, format: FileFormat) -> Result<T> {
    let value = match format {
        FileFormat::Json => serde_json::from_str(content)?,
        FileFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(value)
}

/// Encodes a document as text.
///
/// JSON is pretty-printed with a trailing newline. YAML never starts
/// with a `---` document marker.
pub fn render_document(document: &Document, format: FileFormat) -> Result<String> {
    match format {
        FileFormat::Json => {
            let mut rendered = serde_json::to_string_pretty(document)?;
            rendered.push('\n');
            Ok(rendered)
        }
        FileFormat::Yaml => {
            let rendered = serde_yaml::to_string(document)?;
            Ok(match rendered.strip_prefix(YAML_DOCUMENT_START) {
                Some(body) => body.to_string(),
                None => rendered,
            })
        }
    }
}
