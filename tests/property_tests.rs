//! Property-based tests for logfmt_logger using proptest

use chrono::{TimeZone, Utc};
use logfmt_logger::prelude::*;
use logfmt_logger::{escape_value, FIELD_KEY_LOGGER};
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Panic),
        Just(LogLevel::Fatal),
        Just(LogLevel::Error),
        Just(LogLevel::Warn),
        Just(LogLevel::Info),
        Just(LogLevel::Debug),
        Just(LogLevel::Trace),
    ]
}

fn render(entry: &LogEntry) -> String {
    String::from_utf8(LogfmtFormatter::new().format(entry).unwrap()).unwrap()
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// More severe levels compare lower
    #[test]
    fn test_log_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, (a as u8) <= (b as u8));
        prop_assert_eq!(a.is_error_or_worse(), a <= LogLevel::Error);
    }
}

// ============================================================================
// Escaping Tests
// ============================================================================

proptest! {
    /// Values with a space or `=` are quoted, everything else is verbatim
    #[test]
    fn test_escape_value_quoting(value in "[ -~]{0,40}") {
        let escaped = escape_value(value.as_str());
        if value.contains(' ') || value.contains('=') {
            prop_assert_eq!(escaped, format!("\"{}\"", value));
        } else {
            prop_assert_eq!(escaped, value);
        }
    }
}

// ============================================================================
// Line Layout Tests
// ============================================================================

proptest! {
    /// Every line ends in a single `" \n"` and starts with the four fixed fields
    #[test]
    fn test_line_layout(
        level in any_level(),
        message in "[a-zA-Z0-9_.-]{1,20}",
        name in proptest::option::of("[a-z]{1,10}"),
        millis in 0u32..1000,
    ) {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
            + chrono::Duration::milliseconds(i64::from(millis));
        let mut entry = LogEntry::new(level, message.clone()).with_timestamp(ts);
        if let Some(ref n) = name {
            entry = entry.with_field(FIELD_KEY_LOGGER, n.as_str());
        }

        let line = render(&entry);
        prop_assert!(line.ends_with(" \n"));
        prop_assert_eq!(line.matches('\n').count(), 1);

        let fields: Vec<&str> = line.trim_end_matches(" \n").split(' ').collect();
        prop_assert!(fields[0].starts_with("time=2024-06-01T12:00:00"));
        prop_assert!(fields[0].ends_with('Z'));
        prop_assert_eq!(fields[1], format!("level={}", level));
        prop_assert_eq!(fields[2], format!("msg={}", message));
        prop_assert_eq!(
            fields[3],
            format!("logger={}", name.as_deref().unwrap_or("default"))
        );

        if level.is_error_or_worse() {
            prop_assert_eq!(fields[4], "err=Generic");
            prop_assert_eq!(fields.len(), 5);
        } else {
            prop_assert_eq!(fields.len(), 4);
            prop_assert!(!line.contains("err="));
        }
    }

    /// Free-form fields each appear exactly once, reserved keys never repeat
    #[test]
    fn test_trailing_fields(
        extra in proptest::collection::hash_map("[a-z]{3,8}", "[a-z0-9]{1,8}", 0..6),
    ) {
        let mut entry = LogEntry::new(LogLevel::Info, "m")
            .with_field("msg", "shadow")
            .with_field("time", "shadow");
        for (k, v) in &extra {
            entry = entry.with_field(k.as_str(), v.as_str());
        }

        let line = render(&entry);
        let fields: Vec<&str> = line.trim_end_matches(" \n").split(' ').collect();
        prop_assert_eq!(fields.iter().filter(|f| f.starts_with("msg=")).count(), 1);
        prop_assert_eq!(fields.iter().filter(|f| f.starts_with("time=")).count(), 1);
        for (k, v) in &extra {
            if k == "msg" || k == "time" || k == "level" || k == "logger" || k == "error" {
                continue;
            }
            let needle = format!(" {}={} ", k, v);
            prop_assert!(line.contains(&needle), "missing {:?} in {:?}", needle, line);
        }
    }
}

// ============================================================================
// Timestamp Tests
// ============================================================================

proptest! {
    /// The fractional part never carries trailing zeros
    #[test]
    fn test_timestamp_trimmed(millis in 0u32..1000) {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
            + chrono::Duration::milliseconds(i64::from(millis));
        let out = TimestampFormat::Logfmt.format(&ts);

        prop_assert!(out.ends_with('Z'));
        match out.split_once('.') {
            Some((_, frac)) => {
                let digits = frac.trim_end_matches('Z');
                prop_assert!(!digits.is_empty() && digits.len() <= 3);
                prop_assert!(!digits.ends_with('0'));
                prop_assert_ne!(millis, 0);
            }
            None => prop_assert_eq!(millis, 0),
        }
    }
}
