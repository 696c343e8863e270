//! Logfmt formatter
//!
//! Lines look like
//!
//! ```text
//! time=2021-01-01T00:00:00Z level=error msg="dial failed" logger=svc err=*net.OpError port=5432 \n
//! ```
//!
//! `time`, `level`, `msg` and `logger` always come first in that order,
//! `err` follows for error-level entries, then the remaining fields in map
//! order. Every pair is followed by a space, including the last one.

use super::classify::{Classify, GENERIC_ERROR};
use super::error::{LoggerError, Result};
use super::formatter::Formatter;
use super::log_context::ERROR_KEY;
use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;
use std::borrow::Cow;
use std::fmt::Display;
use std::io::Write;

pub const FIELD_KEY_TIME: &str = "time";
pub const FIELD_KEY_LEVEL: &str = "level";
pub const FIELD_KEY_MSG: &str = "msg";
pub const FIELD_KEY_ERROR: &str = "err";
/// Reserved name; not filtered out of the trailing fields.
pub const FIELD_KEY_TRACE: &str = "stacktrace";
pub const FIELD_KEY_LOGGER: &str = "logger";

/// Logger name used when an entry was never tagged
pub const DEFAULT_LOGGER: &str = "default";

const ESCAPE_CHARS: [char; 2] = [' ', '='];

/// Stringify `value`, quoting it when it contains a space or `=`
///
/// Embedded quotes and newlines are left untouched.
pub fn escape_value<T: Display + ?Sized>(value: &T) -> String {
    let s = value.to_string();
    if s.contains(&ESCAPE_CHARS[..]) {
        format!("\"{}\"", s)
    } else {
        s
    }
}

fn is_skipped_key(key: &str) -> bool {
    matches!(
        key,
        FIELD_KEY_TIME | FIELD_KEY_LEVEL | FIELD_KEY_MSG | ERROR_KEY | FIELD_KEY_LOGGER
    )
}

/// Stateless logfmt encoder
#[derive(Debug, Clone, Default)]
pub struct LogfmtFormatter {
    timestamp_format: TimestampFormat,
}

impl LogfmtFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use another timestamp layout for the `time` field
    ///
    /// A `Custom` pattern is not checked here; entries fail to format if it
    /// is invalid. See [`try_with_timestamp_format`](Self::try_with_timestamp_format).
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Like [`with_timestamp_format`](Self::with_timestamp_format), but rejects
    /// an invalid `Custom` pattern up front
    pub fn try_with_timestamp_format(self, format: TimestampFormat) -> Result<Self> {
        format.validate()?;
        Ok(self.with_timestamp_format(format))
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    fn write_field(out: &mut dyn Write, key: &str, value: &str) -> Result<()> {
        write!(out, "{}={} ", key, value)
            .map_err(|e| LoggerError::io_operation("writing logfmt field", key, e))
    }
}

impl Formatter for LogfmtFormatter {
    fn write_entry(&self, entry: &LogEntry, out: &mut dyn Write) -> Result<()> {
        let time = self.timestamp_format.try_format(&entry.timestamp).map_err(|_| {
            LoggerError::formatter(
                "logfmt",
                format!("cannot render timestamp with {:?}", self.timestamp_format),
            )
        })?;
        Self::write_field(out, FIELD_KEY_TIME, &time)?;
        Self::write_field(out, FIELD_KEY_LEVEL, entry.level.to_str())?;
        Self::write_field(out, FIELD_KEY_MSG, &escape_value(&entry.message))?;

        let logger = match entry.fields.get(FIELD_KEY_LOGGER) {
            Some(value) => escape_value(value),
            None => escape_value(DEFAULT_LOGGER),
        };
        Self::write_field(out, FIELD_KEY_LOGGER, &logger)?;

        if entry.level.is_error_or_worse() {
            let class = entry
                .error()
                .map_or(Cow::Borrowed(GENERIC_ERROR), |value| value.classify());
            Self::write_field(out, FIELD_KEY_ERROR, &class)?;
        }

        for (key, value) in &entry.fields {
            if is_skipped_key(key) {
                continue;
            }
            Self::write_field(out, key, &escape_value(value))?;
        }

        out.write_all(b"\n")
            .map_err(|e| LoggerError::io_operation("writing logfmt line", "terminator", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldValue, LogContext, LogLevel};
    use chrono::{TimeZone, Utc};
    use std::fmt;

    #[derive(Debug)]
    struct CustomError;

    impl fmt::Display for CustomError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("custom failure")
        }
    }

    impl std::error::Error for CustomError {}

    impl Classify for CustomError {
        fn classify(&self) -> Cow<'_, str> {
            Cow::Borrowed("*CustomError")
        }
    }

    /// Accepts `budget` bytes, then fails every write
    struct FailingWriter {
        budget: usize,
        written: Vec<u8>,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.budget == 0 {
                return Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink closed"));
            }
            let n = buf.len().min(self.budget);
            self.budget -= n;
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn entry(level: LogLevel, msg: &str) -> LogEntry {
        LogEntry::new(level, msg)
            .with_timestamp(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap())
    }

    fn render(entry: &LogEntry) -> String {
        let bytes = LogfmtFormatter::new().format(entry).expect("format");
        String::from_utf8(bytes).expect("utf8")
    }

    #[test]
    fn test_tagged_info_line() {
        let e = entry(LogLevel::Info, "hello world").with_field(FIELD_KEY_LOGGER, "svc");
        assert_eq!(
            render(&e),
            "time=2021-01-01T00:00:00Z level=info msg=\"hello world\" logger=svc \n"
        );
    }

    #[test]
    fn test_untagged_entry_uses_default_logger() {
        let e = entry(LogLevel::Warn, "careful");
        assert_eq!(
            render(&e),
            "time=2021-01-01T00:00:00Z level=warning msg=careful logger=default \n"
        );
    }

    #[test]
    fn test_error_class_from_classified_error() {
        let e = entry(LogLevel::Error, "boom").with_classified_error(CustomError);
        assert_eq!(
            render(&e),
            "time=2021-01-01T00:00:00Z level=error msg=boom logger=default err=*CustomError \n"
        );
    }

    #[test]
    fn test_error_class_generic_without_error_field() {
        let e = entry(LogLevel::Fatal, "boom");
        assert!(render(&e).ends_with("logger=default err=Generic \n"));
    }

    #[test]
    fn test_error_class_for_unclassified_error() {
        let e = entry(LogLevel::Panic, "boom").with_error(std::io::Error::other("x"));
        assert!(render(&e).contains(" err=Generic \n"));
    }

    #[test]
    fn test_error_class_for_non_error_value() {
        let e = entry(LogLevel::Error, "boom").with_field(ERROR_KEY, "timeout");
        assert!(render(&e).contains(" err=string \n"));
    }

    #[test]
    fn test_no_err_field_below_error() {
        let e = entry(LogLevel::Warn, "boom").with_classified_error(CustomError);
        let line = render(&e);
        assert!(!line.contains("err="));
        assert!(!line.contains("custom failure"));
    }

    #[test]
    fn test_reserved_keys_not_repeated() {
        let ctx = LogContext::new()
            .with_field("msg", "shadow")
            .with_field("time", "later")
            .with_field("level", "loud")
            .with_field("user", "alice");
        let e = entry(LogLevel::Info, "real").with_context(ctx);
        assert_eq!(
            render(&e),
            "time=2021-01-01T00:00:00Z level=info msg=real logger=default user=alice \n"
        );
    }

    #[test]
    fn test_err_and_stacktrace_keys_pass_through() {
        let e = entry(LogLevel::Info, "m")
            .with_field("err", "raw")
            .with_field(FIELD_KEY_TRACE, "main.go:12");
        let line = render(&e);
        assert!(line.contains(" err=raw "));
        assert!(line.contains(" stacktrace=main.go:12 "));
    }

    #[test]
    fn test_trailing_values_escaped() {
        let e = entry(LogLevel::Debug, "q")
            .with_field("query", "SELECT * FROM users WHERE id=1")
            .with_field("count", 5);
        let line = render(&e);
        assert!(line.contains(" query=\"SELECT * FROM users WHERE id=1\" "));
        assert!(line.contains(" count=5 "));
    }

    #[test]
    fn test_logger_name_is_escaped() {
        let e = entry(LogLevel::Info, "m").with_field(FIELD_KEY_LOGGER, FieldValue::from("my svc"));
        assert!(render(&e).contains(" logger=\"my svc\" \n"));
    }

    #[test]
    fn test_escape_value() {
        assert_eq!(escape_value("plain"), "plain");
        assert_eq!(escape_value("two words"), "\"two words\"");
        assert_eq!(escape_value("a=b"), "\"a=b\"");
        assert_eq!(escape_value(&42), "42");
        assert_eq!(escape_value(""), "");
    }

    #[test]
    fn test_quotes_and_newlines_not_escaped() {
        // known limitation: the quoting scheme is not a full logfmt escaper
        assert_eq!(escape_value("say \"hi\""), "\"say \"hi\"\"");
        assert_eq!(escape_value("a\"b"), "a\"b");
        assert_eq!(escape_value("line1\nline2"), "line1\nline2");
    }

    #[test]
    fn test_custom_timestamp_format() {
        let formatter = LogfmtFormatter::new().with_timestamp_format(TimestampFormat::Iso8601);
        let bytes = formatter.format(&entry(LogLevel::Info, "m")).unwrap();
        assert!(String::from_utf8(bytes)
            .unwrap()
            .starts_with("time=2021-01-01T00:00:00.000Z "));
    }

    #[test]
    fn test_write_failure_aborts() {
        let e = entry(LogLevel::Info, "hello");
        let mut sink = FailingWriter {
            budget: 10,
            written: Vec::new(),
        };
        let err = LogfmtFormatter::new()
            .write_entry(&e, &mut sink)
            .expect_err("write should fail");

        assert!(err.is_io());
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert_eq!(sink.written.len(), 10);
    }

    #[test]
    fn test_null_value_renders_as_nil() {
        let line = render(&entry(LogLevel::Info, "m").with_field("parent", None::<i64>));
        assert!(line.ends_with(" parent=<nil> \n"), "{:?}", line);

        let line = render(&entry(LogLevel::Error, "m").with_field(ERROR_KEY, FieldValue::Null));
        assert!(line.contains(" err=<nil> "), "{:?}", line);
    }

    #[test]
    fn test_invalid_custom_timestamp_is_an_error() {
        let e = entry(LogLevel::Info, "hello");
        let formatter = LogfmtFormatter::new()
            .with_timestamp_format(TimestampFormat::Custom("%Q".to_string()));

        let mut out = Vec::new();
        let err = formatter
            .write_entry(&e, &mut out)
            .expect_err("bad pattern should fail");
        assert!(matches!(err, LoggerError::FormatterError { .. }));
        assert!(out.is_empty());
        assert!(formatter.format(&e).is_err());
    }

    #[test]
    fn test_try_with_timestamp_format_rejects_bad_pattern() {
        let err = LogfmtFormatter::new()
            .try_with_timestamp_format(TimestampFormat::Custom("%Q".to_string()))
            .unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let formatter = LogfmtFormatter::new()
            .try_with_timestamp_format(TimestampFormat::Custom("%Y".to_string()))
            .unwrap();
        let bytes = formatter.format(&entry(LogLevel::Info, "m")).unwrap();
        assert!(String::from_utf8(bytes).unwrap().starts_with("time=2021 "));
    }
}
