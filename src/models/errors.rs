//! Mapper error types.

use thiserror::Error;

/// Errors raised while mapping decoded JSON into objects.
///
/// Mapping errors are always raised; there is no silent mode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapperError {
    /// Only JSON objects and arrays can be mapped at the top level.
    #[error("Cannot construct object from data of type {found}.")]
    UnsupportedDataType {
        /// The JSON type that was supplied.
        found: &'static str,
    },

    /// A required error field is absent.
    #[error("Cannot construct error object from data. Missing key: '{missing_key}'")]
    MalformedErrorPayload {
        /// The first required key that was not found.
        missing_key: &'static str,
    },
}

/// Returns the JSON type name of a value.
pub(crate) const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_malformed_error_payload_names_key() {
        let error = MapperError::MalformedErrorPayload {
            missing_key: "moreInfoUrl",
        };
        assert!(error.to_string().contains("Missing key: 'moreInfoUrl'"));
    }

    #[test]
    fn test_unsupported_data_type_names_type() {
        let error = MapperError::UnsupportedDataType { found: "number" };
        assert_eq!(
            error.to_string(),
            "Cannot construct object from data of type number."
        );
    }

    #[test]
    fn test_json_type_names() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!(1.5)), "number");
        assert_eq!(json_type_name(&json!("s")), "string");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }
}
