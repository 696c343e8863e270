//! Timestamp formatting utilities
//!
//! The default layout is the one logfmt lines use: seconds precision plus up
//! to three fractional digits with trailing zeros trimmed, then a literal `Z`.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

/// Timestamp layout options
///
/// # Examples
///
/// ```
/// use logfmt_logger::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let ts = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(TimestampFormat::Logfmt.format(&ts), "2021-01-01T00:00:00Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// Up to millisecond precision, no trailing padding: `2025-01-08T10:30:45.12Z`
    #[default]
    Logfmt,

    /// ISO 8601 with fixed milliseconds: `2025-01-08T10:30:45.120Z`
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// RFC 3339 format: `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Check that a `Custom` pattern only uses known strftime specifiers
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(pattern) = self {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "timestamp_format",
                    format!("invalid strftime pattern '{}'", pattern),
                ));
            }
        }
        Ok(())
    }

    /// Format a `DateTime<Utc>`, failing instead of panicking on a bad
    /// `Custom` pattern
    pub fn try_format(&self, datetime: &DateTime<Utc>) -> std::result::Result<String, fmt::Error> {
        match self {
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                write!(out, "{}", datetime.format(format_str))?;
                Ok(out)
            }
            other => Ok(other.format(datetime)),
        }
    }

    /// Format a `DateTime<Utc>` according to this format
    ///
    /// # Panics
    ///
    /// Panics if a `Custom` pattern is invalid; check it with
    /// [`validate`](Self::validate) or use [`try_format`](Self::try_format).
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Logfmt => format_trimmed_millis(datetime),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

fn format_trimmed_millis(datetime: &DateTime<Utc>) -> String {
    let mut out = datetime.format("%Y-%m-%dT%H:%M:%S").to_string();
    // leap seconds report >= 1000ms
    let millis = datetime.timestamp_subsec_millis() % 1000;
    if millis != 0 {
        let digits = format!("{:03}", millis);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out.push('Z');
    out
}
