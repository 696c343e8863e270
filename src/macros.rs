//! Logging macros for ergonomic log message formatting.
//!
//! These macros wrap `format!` and optionally take structured fields as
//! `"key" => value` pairs, separated from the message by `;`.
//!
//! # Examples
//!
//! ```
//! use logfmt_logger::prelude::*;
//! use logfmt_logger::info;
//!
//! let logger = new_logger("api");
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // With fields: `... msg="request done" logger=api status=200 path=/users `
//! info!(logger, "status" => 200, "path" => "/users"; "request done");
//! ```

/// Log a message at the given level, with optional fields.
///
/// # Examples
///
/// ```
/// # use logfmt_logger::prelude::*;
/// # let logger = Logger::new();
/// use logfmt_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// log!(logger, LogLevel::Warn, "attempt" => 3; "retrying {}", "upload");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($key:literal => $value:expr),+ ; $($arg:tt)+) => {
        $logger.log_with_context(
            $level,
            format!($($arg)+),
            $crate::LogContext::new()$(.with_field($key, $value))+,
        )
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use logfmt_logger::prelude::*;
/// # let logger = Logger::new();
/// use logfmt_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// Attach the error itself under `"error"` to get its class in the `err`
/// field:
///
/// ```
/// # use logfmt_logger::prelude::*;
/// # let logger = Logger::new();
/// use logfmt_logger::error;
/// let err = std::io::Error::other("connection reset");
/// error!(logger, "error" => ErrorValue::new(err); "upload failed");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message, then run the logger's exit function.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format!($($arg)+))
    };
}
