//! Structured key-value fields attached to a log entry

use super::classify::{Classify, ErrorValue};
use std::borrow::Cow;
use std::collections::hash_map::{self, HashMap};
use std::error::Error;
use std::fmt;

/// Key under which an entry's error value is stored
pub const ERROR_KEY: &str = "error";

/// Value type for structured logging fields
#[derive(Debug, Clone)]
pub enum FieldValue {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
    Error(ErrorValue),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => f.write_str(s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => f.write_str("<nil>"),
            FieldValue::Error(e) => write!(f, "{}", e),
        }
    }
}

/// Non-error values are classified by kind so that something stored under
/// [`ERROR_KEY`] that is not an error still yields a readable class.
impl Classify for FieldValue {
    fn classify(&self) -> Cow<'_, str> {
        match self {
            FieldValue::String(_) => Cow::Borrowed("string"),
            FieldValue::Int(_) => Cow::Borrowed("int64"),
            FieldValue::UInt(_) => Cow::Borrowed("uint64"),
            FieldValue::Float(_) => Cow::Borrowed("float64"),
            FieldValue::Bool(_) => Cow::Borrowed("bool"),
            FieldValue::Null => Cow::Borrowed("<nil>"),
            FieldValue::Error(e) => e.classify(),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        FieldValue::UInt(u)
    }
}

impl From<u32> for FieldValue {
    fn from(u: u32) -> Self {
        FieldValue::UInt(u64::from(u))
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<ErrorValue> for FieldValue {
    fn from(e: ErrorValue) -> Self {
        FieldValue::Error(e)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// Unordered set of structured fields
#[derive(Debug, Clone, Default)]
pub struct LogContext {
    fields: HashMap<String, FieldValue>,
}

impl LogContext {
    /// Create a new empty log context
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Add a field to the context
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Attach an unclassified error under [`ERROR_KEY`]
    pub fn with_error<E>(self, err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.with_field(ERROR_KEY, ErrorValue::new(err))
    }

    /// Attach a classified error under [`ERROR_KEY`]
    pub fn with_classified_error<E>(self, err: E) -> Self
    where
        E: Error + Classify + Send + Sync + 'static,
    {
        self.with_field(ERROR_KEY, ErrorValue::classified(err))
    }

    /// Add a field, replacing and returning any previous value
    pub fn add_field<K, V>(&mut self, key: K, value: V) -> Option<FieldValue>
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.fields.remove(key)
    }

    /// Iterate fields in unspecified order
    pub fn iter(&self) -> hash_map::Iter<'_, String, FieldValue> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if context has any fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Copy every field of `other` into this context, `other` wins on conflicts
    pub fn extend(&mut self, other: LogContext) {
        self.fields.extend(other.fields);
    }
}

impl<'a> IntoIterator for &'a LogContext {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = hash_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for LogContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
