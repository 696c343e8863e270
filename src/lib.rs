//! # logfmt_logger
//!
//! A small logger that renders structured records as logfmt lines.
//!
//! Every line starts with `time`, `level`, `msg` and `logger`, in that order.
//! Error-level entries add an `err` field naming the class of the attached
//! error, then the remaining fields follow in no particular order:
//!
//! ```text
//! time=2021-01-01T00:00:00Z level=info msg="hello world" logger=svc \n
//! ```
//!
//! ## Features
//!
//! - **Logfmt formatting**: `key=value ` pairs, values quoted when they hold a space or `=`
//! - **Logger tagging**: a hook stamps the logger name on every entry
//! - **Error classes**: errors opt in through [`Classify`], others report `Generic`
//! - **Appenders**: console, file, or any `io::Write`
//!
//! ```
//! use logfmt_logger::prelude::*;
//!
//! let logger = new_logger("svc");
//! logger.info("hello world");
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, WriterAppender};
    pub use crate::core::{
        new_logger, Appender, Classify, ErrorValue, FieldValue, Formatter, Hook, LogContext,
        LogEntry, LogLevel, LogfmtFormatter, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerHook, LoggerMetrics, OutputTarget, Result, TimestampFormat,
    };
}

pub use crate::appenders::{ConsoleAppender, ConsoleTarget, FileAppender, WriterAppender};
pub use crate::core::{
    escape_value, new_logger, Appender, Classify, ErrorValue, ExitFn, FieldValue, Formatter,
    Hook, LevelHooks, LogContext, LogEntry, LogLevel, LogfmtFormatter, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerHook, LoggerMetrics, OutputTarget, Result, TimestampFormat,
    DEFAULT_LOGGER, ERROR_KEY, FIELD_KEY_ERROR, FIELD_KEY_LEVEL, FIELD_KEY_LOGGER, FIELD_KEY_MSG,
    FIELD_KEY_TIME, FIELD_KEY_TRACE, GENERIC_ERROR,
};
