//! Dynamic attribute storage for REST resources.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Schemaless attribute bag backing every REST resource.
///
/// Zoop resources are open-schema: the API may add fields at any time, and
/// a populated resource only carries the fields the server actually sent.
/// A missing field is unset, not null, and accessors return `None` for it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataBag(Map<String, Value>);

impl DataBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no fields are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sets a field, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Removes a field, returning its previous value.
    pub fn unset(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Returns a field's value, or `None` if unset.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a field as a string slice.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Returns a field as a signed integer.
    #[must_use]
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(Value::as_i64)
    }

    /// Returns a field as a float.
    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    /// Returns a field as a boolean.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// Walks a path of nested object keys.
    #[must_use]
    pub fn get_in(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.0.get(*first)?, |value, key| value.get(key))
    }

    /// Parses a `YYYY-MM-DD` field as a date.
    #[must_use]
    pub fn get_date(&self, key: &str) -> Option<NaiveDate> {
        self.get_str(key)
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
    }

    /// Parses an RFC 3339 field as a timestamp.
    #[must_use]
    pub fn get_datetime(&self, key: &str) -> Option<DateTime<FixedOffset>> {
        self.get_str(key)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    }

    /// Copies `key` from a raw JSON object into the bag, if present.
    ///
    /// This is the populate primitive: absent fields stay unset rather
    /// than becoming null.
    pub fn adopt(&mut self, raw: &Value, key: &str) {
        if let Some(value) = raw.get(key) {
            self.0.insert(key.to_string(), value.clone());
        }
    }

    /// Returns the bag as a JSON value, for request bodies.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    /// Iterates over the set fields.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for DataBag {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
