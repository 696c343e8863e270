//! Log entry structure

use super::classify::{Classify, ErrorValue};
use super::log_context::{FieldValue, LogContext, ERROR_KEY};
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::error::Error;

/// A single record travelling through the pipeline
///
/// Hooks receive it by `&mut` before formatting; the message is stored as
/// given, no sanitizing happens here.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub fields: LogContext,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
            fields: LogContext::new(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_context(mut self, context: LogContext) -> Self {
        self.fields.extend(context);
        self
    }

    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.add_field(key, value);
        self
    }

    pub fn with_error<E>(self, err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.with_field(ERROR_KEY, ErrorValue::new(err))
    }

    pub fn with_classified_error<E>(self, err: E) -> Self
    where
        E: Error + Classify + Send + Sync + 'static,
    {
        self.with_field(ERROR_KEY, ErrorValue::classified(err))
    }

    /// The value stored under [`ERROR_KEY`], if any
    pub fn error(&self) -> Option<&FieldValue> {
        self.fields.get(ERROR_KEY)
    }
}
