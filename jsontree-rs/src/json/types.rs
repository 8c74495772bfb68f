//! JSON value tree types.
//!
//! A [`JsonValue`] is a closed set of six variants. Composites own their
//! children exclusively, so a tree is always finite and acyclic: a value
//! moved into a container cannot be reached from anywhere else.
//!
//! # Ordering
//!
//! - Arrays keep insertion order.
//! - Objects are backed by a `HashMap`; entry order is unspecified.
//!
//! # Duplicate keys
//!
//! [`JsonObject::add`] keeps the first value stored under a key. Later
//! insertions under the same key are dropped without failing.

use std::collections::hash_map::{self, Entry};
use std::collections::HashMap;
use std::slice;

/// A JSON value.
///
/// Leaf variants are stored inline; only [`JsonArray`] and [`JsonObject`]
/// allocate for their children.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    /// JSON null literal
    #[default]
    Null,
    /// JSON boolean (true/false)
    Bool(bool),
    /// JSON number as a 64-bit binary float
    Number(f64),
    /// JSON string, stored as given (no validation, no escaping)
    String(String),
    /// JSON array of owned values
    Array(JsonArray),
    /// JSON object of owned values keyed by string
    Object(JsonObject),
}

impl JsonValue {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Returns true for the two variants that own children.
    pub fn is_composite(&self) -> bool {
        matches!(self, JsonValue::Array(_) | JsonValue::Object(_))
    }

    /// Returns the boolean value if this is a Bool, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number value if this is a Number, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the array if this is an Array, None otherwise.
    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            JsonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a mutable reference to the array if this is an Array.
    pub fn as_array_mut(&mut self) -> Option<&mut JsonArray> {
        match self {
            JsonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a reference to the object if this is an Object, None otherwise.
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns a mutable reference to the object if this is an Object.
    pub fn as_object_mut(&mut self) -> Option<&mut JsonObject> {
        match self {
            JsonValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get a value from an object by key.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object().and_then(|o| o.get(key))
    }

    /// Get a value from an array by index.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        self.as_array().and_then(|a| a.get(index))
    }

    /// Returns the type name as a string for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }
}

/// An ordered sequence of owned JSON values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonArray {
    values: Vec<JsonValue>,
}

impl JsonArray {
    /// Create an empty array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to the end of the array.
    pub fn add(&mut self, value: impl Into<JsonValue>) {
        self.values.push(value.into());
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&JsonValue> {
        self.values.get(index)
    }

    /// Iterate elements in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, JsonValue> {
        self.values.iter()
    }
}

impl<'a> IntoIterator for &'a JsonArray {
    type Item = &'a JsonValue;
    type IntoIter = slice::Iter<'a, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Into<JsonValue>> FromIterator<V> for JsonArray {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<V: Into<JsonValue>> Extend<V> for JsonArray {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.values.extend(iter.into_iter().map(Into::into));
    }
}

/// An unordered mapping from string keys to owned JSON values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonObject {
    properties: HashMap<String, JsonValue>,
}

impl JsonObject {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`.
    ///
    /// If `key` is already present the existing value is kept and `value`
    /// is dropped.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
        match self.properties.entry(key.into()) {
            Entry::Vacant(slot) => {
                slot.insert(value.into());
            }
            Entry::Occupied(slot) => {
                tracing::debug!(
                    key = slot.key().as_str(),
                    "duplicate object key, keeping first value"
                );
            }
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if the object has no entries.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.properties.get(key)
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Iterate entries in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, JsonValue> {
        self.properties.iter()
    }
}

impl<'a> IntoIterator for &'a JsonObject {
    type Item = (&'a String, &'a JsonValue);
    type IntoIter = hash_map::Iter<'a, String, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<JsonValue>> FromIterator<(K, V)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Self::new();
        object.extend(iter);
        object
    }
}

// Goes through `add` so collected entries follow the same first-wins rule.
impl<K: Into<String>, V: Into<JsonValue>> Extend<(K, V)> for JsonObject {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Number(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_owned())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<JsonArray> for JsonValue {
    fn from(value: JsonArray) -> Self {
        JsonValue::Array(value)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(value: JsonObject) -> Self {
        JsonValue::Object(value)
    }
}
