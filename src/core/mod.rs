//! Core logger types and traits

pub mod appender;
pub mod classify;
pub mod config;
pub mod error;
pub mod formatter;
pub mod hook;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logfmt;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use appender::Appender;
pub use classify::{Classify, ErrorValue, GENERIC_ERROR};
pub use config::{LoggerConfig, OutputTarget, LOGGER_LEVEL_ENV, LOGGER_NAME_ENV};
pub use error::{LoggerError, Result};
pub use formatter::Formatter;
pub use hook::{Hook, LevelHooks, LoggerHook};
pub use log_context::{FieldValue, LogContext, ERROR_KEY};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logfmt::{
    escape_value, LogfmtFormatter, DEFAULT_LOGGER, FIELD_KEY_ERROR, FIELD_KEY_LEVEL,
    FIELD_KEY_LOGGER, FIELD_KEY_MSG, FIELD_KEY_TIME, FIELD_KEY_TRACE,
};
pub use logger::{new_logger, ExitFn, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use timestamp::TimestampFormat;
