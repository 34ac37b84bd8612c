//! Generic document representation shared by every codec.

pub use serde_json::Value;

/// A configuration document: string keys mapped to dynamically typed values.
///
/// Nested documents are [`Value::Object`], sequences are [`Value::Array`].
/// Key order carries no meaning.
pub type Document = serde_json::Map<String, Value>;

/// Short name of a value's kind, for error messages.
pub const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_kind() {
        assert_eq!(value_kind(&Value::Null), "null");
        assert_eq!(value_kind(&json!(true)), "boolean");
        assert_eq!(value_kind(&json!(1)), "number");
        assert_eq!(value_kind(&json!("x")), "string");
        assert_eq!(value_kind(&json!([1, 2])), "sequence");
        assert_eq!(value_kind(&json!({"a": 1})), "mapping");
    }
}
