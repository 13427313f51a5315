//! Ordered sequence built from a JSON array.

use std::slice;

use serde_json::Value;

use crate::models::errors::json_type_name;
use crate::models::mapper::map_value;
use crate::models::{ErrorInfo, FieldValue, GenericObject, MapperError};

/// An ordered sequence of mapped items.
///
/// Items are [`FieldValue`]s: nested objects, nested sequences, or scalars
/// kept verbatim. Like [`GenericObject`], a sequence carries an error flag
/// and optional [`ErrorInfo`].
///
/// # Example
///
/// ```rust
/// use brickscout_api::models::construct_object_from_data;
/// use serde_json::json;
///
/// let mapped = construct_object_from_data(&json!([{"x": 1}, {"x": 2}])).unwrap();
/// let sequence = mapped.as_sequence().unwrap();
///
/// let xs: Vec<i64> = sequence
///     .iter()
///     .filter_map(|item| item["x"].as_i64())
///     .collect();
/// assert_eq!(xs, vec![1, 2]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectSequence {
    items: Vec<FieldValue>,
    has_error: bool,
    error: Option<ErrorInfo>,
}

impl ObjectSequence {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sequence holding `items`.
    #[must_use]
    pub fn with_items(items: Vec<FieldValue>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Builds a sequence from a response that is either one object or an array.
    ///
    /// A single object becomes a one-item sequence; an array is mapped item
    /// by item.
    ///
    /// # Errors
    ///
    /// Returns [`MapperError::UnsupportedDataType`] for any other JSON type.
    pub fn from_response(data: &Value) -> Result<Self, MapperError> {
        match data {
            Value::Object(_) => Ok(Self::with_items(vec![map_value(data)])),
            Value::Array(items) => Ok(Self::with_items(items.iter().map(map_value).collect())),
            other => Err(MapperError::UnsupportedDataType {
                found: json_type_name(other),
            }),
        }
    }

    /// Appends an item.
    pub fn push(&mut self, item: impl Into<FieldValue>) -> &mut Self {
        self.items.push(item.into());
        self
    }

    /// Removes the first item equal to `item`. Returns `true` if one was removed.
    ///
    /// Items are matched by value (`==`), not by identity: any item with the
    /// same fields and values matches, even if it is a separate instance.
    pub fn remove(&mut self, item: &FieldValue) -> bool {
        match self.items.iter().position(|candidate| candidate == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns the item at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FieldValue> {
        self.items.get(index)
    }

    /// Iterates over items in order.
    pub fn iter(&self) -> slice::Iter<'_, FieldValue> {
        self.items.iter()
    }

    /// Iterates over the items that are objects.
    pub fn objects(&self) -> impl Iterator<Item = &GenericObject> {
        self.items.iter().filter_map(FieldValue::as_object)
    }

    /// Returns the items as a slice.
    #[must_use]
    pub fn items(&self) -> &[FieldValue] {
        &self.items
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if this sequence represents an error response.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.has_error
    }

    /// Returns the attached error details.
    #[must_use]
    pub const fn error(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }

    /// Marks this sequence as an error and attaches `error`.
    pub fn set_error(&mut self, error: ErrorInfo) -> &mut Self {
        self.has_error = true;
        self.error = Some(error);
        self
    }
}

impl IntoIterator for ObjectSequence {
    type Item = FieldValue;
    type IntoIter = std::vec::IntoIter<FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ObjectSequence {
    type Item = &'a FieldValue;
    type IntoIter = slice::Iter<'a, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<FieldValue> for ObjectSequence {
    fn from_iter<I: IntoIterator<Item = FieldValue>>(iter: I) -> Self {
        Self::with_items(iter.into_iter().collect())
    }
}
