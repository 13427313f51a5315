//! Schema-less object built from a JSON object.

use std::ops::Index;

use indexmap::IndexMap;
use serde_json::Value;

use crate::models::mapper::error_info_from_data;
use crate::models::{ErrorInfo, FieldValue, MapperError, ObjectSequence};

static NULL: FieldValue = FieldValue::Scalar(Value::Null);

/// An object mapped from a JSON object of unknown shape.
///
/// Fields keep the order they had in the source document. Reading a field
/// that was never set yields `None` (or a JSON null through indexing) rather
/// than an error, so every field access is optional for callers.
///
/// Every object also carries an error flag and optional [`ErrorInfo`], set
/// when the object was built from an error response.
///
/// # Example
///
/// ```rust
/// use brickscout_api::models::construct_object_from_data;
/// use serde_json::json;
///
/// let mapped = construct_object_from_data(&json!({"id": 42, "set": {"number": "10294-1"}})).unwrap();
/// let order = mapped.as_object().unwrap();
///
/// assert_eq!(order.get_i64("id"), Some(42));
/// assert_eq!(order["set"]["number"].as_str(), Some("10294-1"));
/// assert!(order.get("missing").is_none());
/// assert!(order["missing"].is_null());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenericObject {
    fields: IndexMap<String, FieldValue>,
    has_error: bool,
    error: Option<ErrorInfo>,
}

impl GenericObject {
    /// Creates an empty object without an error.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the field named `name`, or `None` if it was never set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Returns a string field.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_str)
    }

    /// Returns an integer field.
    #[must_use]
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_i64)
    }

    /// Returns a numeric field as `f64`.
    #[must_use]
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(FieldValue::as_f64)
    }

    /// Returns a boolean field.
    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(FieldValue::as_bool)
    }

    /// Returns a nested object field.
    #[must_use]
    pub fn get_object(&self, name: &str) -> Option<&Self> {
        self.get(name).and_then(FieldValue::as_object)
    }

    /// Returns a nested sequence field.
    #[must_use]
    pub fn get_sequence(&self, name: &str) -> Option<&ObjectSequence> {
        self.get(name).and_then(FieldValue::as_sequence)
    }

    /// Sets a field, returning the previous value if there was one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.fields.insert(name.into(), value.into())
    }

    /// Returns `true` if the field was set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterates over fields in source order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` if this object represents an error response.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.has_error
    }

    /// Returns the attached error details.
    #[must_use]
    pub const fn error(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }

    /// Marks this object as an error and attaches `error`.
    pub fn set_error(&mut self, error: ErrorInfo) -> &mut Self {
        self.has_error = true;
        self.error = Some(error);
        self
    }

    /// Marks this object as an error using an error-shaped JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`MapperError`] if `data` is not a complete error payload. The
    /// object is left unchanged in that case.
    pub fn set_error_from_response(&mut self, data: &Value) -> Result<&mut Self, MapperError> {
        let error = error_info_from_data(data)?;
        Ok(self.set_error(error))
    }
}

impl Index<&str> for GenericObject {
    type Output = FieldValue;

    /// Returns the field, or a JSON null if it was never set.
    fn index(&self, name: &str) -> &FieldValue {
        self.get(name).unwrap_or(&NULL)
    }
}

impl Index<&str> for FieldValue {
    type Output = Self;

    /// Indexes into a nested object; any other value yields a JSON null.
    fn index(&self, name: &str) -> &Self {
        self.as_object().map_or(&NULL, |object| &object[name])
    }
}
