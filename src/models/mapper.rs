//! Conversion of decoded JSON into mapped objects.

use serde_json::{Map, Value};

use crate::models::errors::json_type_name;
use crate::models::{ErrorInfo, FieldValue, GenericObject, MapperError, ObjectSequence};

/// The result of mapping a top-level JSON document.
#[derive(Clone, Debug, PartialEq)]
pub enum MappedResponse {
    /// The document was a JSON object.
    Object(GenericObject),
    /// The document was a JSON array.
    Sequence(ObjectSequence),
}

impl MappedResponse {
    /// Returns `true` if the mapped value represents an error response.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        match self {
            Self::Object(object) => object.has_error(),
            Self::Sequence(sequence) => sequence.has_error(),
        }
    }

    /// Returns the attached error details.
    #[must_use]
    pub const fn error(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Object(object) => object.error(),
            Self::Sequence(sequence) => sequence.error(),
        }
    }

    /// Returns the object, if the document was a JSON object.
    #[must_use]
    pub const fn as_object(&self) -> Option<&GenericObject> {
        match self {
            Self::Object(object) => Some(object),
            Self::Sequence(_) => None,
        }
    }

    /// Returns the sequence, if the document was a JSON array.
    #[must_use]
    pub const fn as_sequence(&self) -> Option<&ObjectSequence> {
        match self {
            Self::Sequence(sequence) => Some(sequence),
            Self::Object(_) => None,
        }
    }

    /// Consumes the response, returning the object if there is one.
    #[must_use]
    pub fn into_object(self) -> Option<GenericObject> {
        match self {
            Self::Object(object) => Some(object),
            Self::Sequence(_) => None,
        }
    }

    /// Consumes the response, returning the sequence if there is one.
    #[must_use]
    pub fn into_sequence(self) -> Option<ObjectSequence> {
        match self {
            Self::Sequence(sequence) => Some(sequence),
            Self::Object(_) => None,
        }
    }
}

impl From<MappedResponse> for FieldValue {
    fn from(mapped: MappedResponse) -> Self {
        match mapped {
            MappedResponse::Object(object) => Self::Object(object),
            MappedResponse::Sequence(sequence) => Self::Sequence(sequence),
        }
    }
}

/// Maps a decoded JSON document into an object graph.
///
/// Objects become [`GenericObject`]s and arrays become [`ObjectSequence`]s,
/// recursively; scalars inside them are kept verbatim.
///
/// # Errors
///
/// Returns [`MapperError::UnsupportedDataType`] if `data` is a bare scalar.
///
/// # Example
///
/// ```rust
/// use brickscout_api::models::construct_object_from_data;
/// use serde_json::json;
///
/// let mapped = construct_object_from_data(&json!({"a": 1, "b": {"c": 2}})).unwrap();
/// let object = mapped.as_object().unwrap();
///
/// assert_eq!(object.get_i64("a"), Some(1));
/// assert_eq!(object.get_object("b").unwrap().get_i64("c"), Some(2));
/// assert!(object.get("d").is_none());
/// ```
pub fn construct_object_from_data(data: &Value) -> Result<MappedResponse, MapperError> {
    match data {
        Value::Object(map) => Ok(MappedResponse::Object(map_object(map))),
        Value::Array(items) => Ok(MappedResponse::Sequence(map_sequence(items))),
        other => Err(MapperError::UnsupportedDataType {
            found: json_type_name(other),
        }),
    }
}

/// Builds an error object from an error-shaped JSON object.
///
/// The payload must carry `type`, `exceptionCode`, `developerMessage`,
/// `moreInfoUrl` and `timeStamp`. The returned object has no fields; its
/// error flag is set and the details are available through
/// [`GenericObject::error`].
///
/// # Errors
///
/// - [`MapperError::UnsupportedDataType`] if `data` is not a JSON object
/// - [`MapperError::MalformedErrorPayload`] naming the first missing key
///
/// Any value under a present key is accepted; see [`ErrorInfo`] for how
/// non-string values are rendered.
///
/// # Example
///
/// ```rust
/// use brickscout_api::models::construct_error_from_data;
/// use serde_json::json;
///
/// let object = construct_error_from_data(&json!({
///     "type": "T",
///     "exceptionCode": "E",
///     "developerMessage": "D",
///     "moreInfoUrl": "U",
///     "timeStamp": "TS"
/// })).unwrap();
///
/// assert!(object.has_error());
/// assert_eq!(object.error().unwrap().error_type(), "T");
/// ```
pub fn construct_error_from_data(data: &Value) -> Result<GenericObject, MapperError> {
    let error = error_info_from_data(data)?;
    let mut object = GenericObject::new();
    object.set_error(error);
    Ok(object)
}

/// Reads the required error fields, renaming them to [`ErrorInfo`] fields.
pub(crate) fn error_info_from_data(data: &Value) -> Result<ErrorInfo, MapperError> {
    let map = data
        .as_object()
        .ok_or_else(|| MapperError::UnsupportedDataType {
            found: json_type_name(data),
        })?;

    let field = |key: &'static str| -> Result<String, MapperError> {
        map.get(key)
            .map(error_field_text)
            .ok_or(MapperError::MalformedErrorPayload { missing_key: key })
    };

    Ok(ErrorInfo::new(
        field("type")?,
        field("exceptionCode")?,
        field("developerMessage")?,
        field("moreInfoUrl")?,
        field("timeStamp")?,
    ))
}

/// Reads an error field as text. `null` reads as empty; other non-strings
/// are rendered as JSON.
fn error_field_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Maps any JSON value into a field value.
pub(crate) fn map_value(value: &Value) -> FieldValue {
    match value {
        Value::Object(map) => FieldValue::Object(map_object(map)),
        Value::Array(items) => FieldValue::Sequence(map_sequence(items)),
        scalar => FieldValue::Scalar(scalar.clone()),
    }
}

fn map_object(map: &Map<String, Value>) -> GenericObject {
    let mut object = GenericObject::new();
    for (key, value) in map {
        object.set(key.clone(), map_value(value));
    }
    object
}

fn map_sequence(items: &[Value]) -> ObjectSequence {
    items.iter().map(map_value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn error_payload() -> Value {
        json!({
            "type": "T",
            "exceptionCode": "E",
            "developerMessage": "D",
            "moreInfoUrl": "U",
            "timeStamp": "TS"
        })
    }

    #[test]
    fn test_maps_nested_objects() {
        let mapped = construct_object_from_data(&json!({"a": 1, "b": {"c": 2}})).unwrap();
        let object = mapped.as_object().unwrap();

        assert_eq!(object.get_i64("a"), Some(1));
        assert_eq!(object.get_object("b").unwrap().get_i64("c"), Some(2));
        assert!(object.get("d").is_none());
        assert!(!mapped.has_error());
    }

    #[test]
    fn test_maps_top_level_array_in_order() {
        let mapped = construct_object_from_data(&json!([{"x": 1}, {"x": 2}])).unwrap();
        let sequence = mapped.as_sequence().unwrap();

        assert_eq!(sequence.len(), 2);
        let xs: Vec<i64> = sequence.objects().filter_map(|o| o.get_i64("x")).collect();
        assert_eq!(xs, vec![1, 2]);
    }

    #[test]
    fn test_scalars_inside_arrays_are_kept_verbatim() {
        let mapped = construct_object_from_data(&json!(["a", 1, null, true, [2]])).unwrap();
        let sequence = mapped.into_sequence().unwrap();

        assert_eq!(sequence.get(0).unwrap().as_str(), Some("a"));
        assert_eq!(sequence.get(1).unwrap().as_i64(), Some(1));
        assert!(sequence.get(2).unwrap().is_null());
        assert_eq!(sequence.get(3).unwrap().as_bool(), Some(true));
        assert_eq!(sequence.get(4).unwrap().as_sequence().unwrap().len(), 1);
    }

    #[test]
    fn test_arrays_inside_objects_become_sequences() {
        let data = json!({
            "order": {
                "id": 17,
                "items": [
                    {"part": "3001", "qty": 4},
                    {"part": "3020", "qty": 2}
                ]
            }
        });
        let mapped = construct_object_from_data(&data).unwrap();
        let order = mapped.as_object().unwrap().get_object("order").unwrap();
        let items = order.get_sequence("items").unwrap();

        let parts: Vec<&str> = items.objects().filter_map(|o| o.get_str("part")).collect();
        assert_eq!(parts, vec!["3001", "3020"]);
    }

    #[test]
    fn test_explicit_null_field_is_set_but_null() {
        let mapped = construct_object_from_data(&json!({"note": null})).unwrap();
        let object = mapped.as_object().unwrap();

        assert!(object.contains("note"));
        assert!(object.get("note").unwrap().is_null());
    }

    #[test]
    fn test_field_order_follows_source() {
        let mapped = construct_object_from_data(&json!({"b": 1, "a": 2})).unwrap();
        let object = mapped.as_object().unwrap();

        let names: Vec<&str> = object.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_bare_scalars_are_unsupported() {
        for (data, found) in [
            (json!(1), "number"),
            (json!("s"), "string"),
            (json!(true), "boolean"),
            (json!(null), "null"),
        ] {
            assert_eq!(
                construct_object_from_data(&data),
                Err(MapperError::UnsupportedDataType { found })
            );
        }
    }

    #[test]
    fn test_construct_error_renames_fields() {
        let object = construct_error_from_data(&error_payload()).unwrap();
        let error = object.error().unwrap();

        assert!(object.has_error());
        assert!(object.is_empty());
        assert_eq!(error.error_type(), "T");
        assert_eq!(error.exception_code(), "E");
        assert_eq!(error.developer_message(), "D");
        assert_eq!(error.more_info_url(), "U");
        assert_eq!(error.timestamp(), "TS");
    }

    #[test]
    fn test_construct_error_names_missing_key() {
        let mut payload = error_payload();
        payload.as_object_mut().unwrap().remove("moreInfoUrl");

        assert_eq!(
            construct_error_from_data(&payload),
            Err(MapperError::MalformedErrorPayload {
                missing_key: "moreInfoUrl"
            })
        );
    }

    #[test]
    fn test_construct_error_reports_first_missing_key() {
        assert_eq!(
            construct_error_from_data(&json!({"timeStamp": "TS"})),
            Err(MapperError::MalformedErrorPayload { missing_key: "type" })
        );
    }

    #[test]
    fn test_construct_error_renders_numeric_codes() {
        let mut payload = error_payload();
        payload["exceptionCode"] = json!(404);

        let object = construct_error_from_data(&payload).unwrap();
        assert_eq!(object.error().unwrap().exception_code(), "404");
    }

    #[test]
    fn test_construct_error_accepts_null_more_info_url() {
        let mut payload = error_payload();
        payload["moreInfoUrl"] = Value::Null;

        let object = construct_error_from_data(&payload).unwrap();

        assert!(object.has_error());
        assert_eq!(object.error().unwrap().more_info_url(), "");
        assert_eq!(object.error().unwrap().exception_code(), "E");
    }

    #[test]
    fn test_construct_error_renders_structured_fields_as_json() {
        let mut payload = error_payload();
        payload["developerMessage"] = json!({"text": "D"});
        payload["type"] = json!(["A", "B"]);

        let object = construct_error_from_data(&payload).unwrap();
        let error = object.error().unwrap();

        assert_eq!(error.developer_message(), r#"{"text":"D"}"#);
        assert_eq!(error.error_type(), r#"["A","B"]"#);
    }

    #[test]
    fn test_construct_error_requires_object() {
        assert_eq!(
            construct_error_from_data(&json!([error_payload()])),
            Err(MapperError::UnsupportedDataType { found: "array" })
        );
    }
}
