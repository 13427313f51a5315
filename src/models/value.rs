//! Tagged field values of mapped objects.

use serde_json::Value;

use crate::models::{GenericObject, ObjectSequence};

/// A value held by a [`GenericObject`] field or an [`ObjectSequence`] item.
///
/// JSON objects and arrays become nested [`GenericObject`]s and
/// [`ObjectSequence`]s; everything else (null, booleans, numbers, strings)
/// is kept verbatim as a scalar.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// A JSON scalar: null, boolean, number or string.
    Scalar(Value),
    /// A nested object.
    Object(GenericObject),
    /// A nested sequence.
    Sequence(ObjectSequence),
}

impl FieldValue {
    /// Returns the scalar, if this is one.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Value> {
        match self {
            Self::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the string, if this is a string scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Value::as_str)
    }

    /// Returns the integer, if this is a scalar representable as `i64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar().and_then(Value::as_i64)
    }

    /// Returns the number as `f64`, if this is a numeric scalar.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(Value::as_f64)
    }

    /// Returns the boolean, if this is a boolean scalar.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Value::as_bool)
    }

    /// Returns `true` for a JSON null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Value::Null))
    }

    /// Returns the nested object, if this is one.
    #[must_use]
    pub const fn as_object(&self) -> Option<&GenericObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the nested sequence, if this is one.
    #[must_use]
    pub const fn as_sequence(&self) -> Option<&ObjectSequence> {
        match self {
            Self::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }
}

impl From<Value> for FieldValue {
    /// Wraps a value as a scalar without mapping it.
    fn from(value: Value) -> Self {
        Self::Scalar(value)
    }
}

impl From<GenericObject> for FieldValue {
    fn from(object: GenericObject) -> Self {
        Self::Object(object)
    }
}

impl From<ObjectSequence> for FieldValue {
    fn from(sequence: ObjectSequence) -> Self {
        Self::Sequence(sequence)
    }
}
