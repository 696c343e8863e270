//! Logger configuration
//!
//! A [`LoggerConfig`] can come from JSON, from environment variables, or be
//! built in code; [`LoggerConfig::build`] turns it into a ready [`Logger`]
//! equivalent to [`new_logger`](super::logger::new_logger) with the chosen
//! level, output and timestamp layout.

use super::error::{LoggerError, Result};
use super::hook::LoggerHook;
use super::log_level::LogLevel;
use super::logfmt::LogfmtFormatter;
use super::logger::Logger;
use super::timestamp::TimestampFormat;
use crate::appenders::{ConsoleAppender, FileAppender};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logger name read by [`LoggerConfig::from_env`]
pub const LOGGER_NAME_ENV: &str = "LOGFMT_LOGGER_NAME";

/// Minimum level read by [`LoggerConfig::from_env`]
pub const LOGGER_LEVEL_ENV: &str = "LOGFMT_LEVEL";

/// Where encoded lines go
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputTarget {
    Stdout,
    #[default]
    Stderr,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub name: String,
    pub level: LogLevel,
    pub output: OutputTarget,
    pub timestamp_format: TimestampFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: super::logfmt::DEFAULT_LOGGER.to_string(),
            level: LogLevel::Info,
            output: OutputTarget::Stderr,
            timestamp_format: TimestampFormat::Logfmt,
        }
    }
}

impl LoggerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Parse a JSON document; missing keys take their defaults
    ///
    /// ```
    /// use logfmt_logger::{LogLevel, LoggerConfig};
    ///
    /// let cfg = LoggerConfig::from_json(r#"{"name":"api","level":"debug"}"#).unwrap();
    /// assert_eq!(cfg.name, "api");
    /// assert_eq!(cfg.level, LogLevel::Debug);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read [`LOGGER_NAME_ENV`] and [`LOGGER_LEVEL_ENV`], falling back to
    /// defaults for unset variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(name) = lookup(LOGGER_NAME_ENV) {
            config.name = name;
        }
        if let Some(level) = lookup(LOGGER_LEVEL_ENV) {
            config.level = level
                .parse()
                .map_err(|e: String| LoggerError::config(LOGGER_LEVEL_ENV, e))?;
        }
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(LoggerError::config("name", "logger name must not be empty"));
        }
        self.timestamp_format.validate()
    }

    /// Build the configured logger
    ///
    /// Fails when the configuration is invalid or the output file cannot be
    /// opened.
    pub fn build(&self) -> Result<Logger> {
        self.validate()?;
        let formatter =
            LogfmtFormatter::new().try_with_timestamp_format(self.timestamp_format.clone())?;
        let builder = Logger::builder()
            .min_level(self.level)
            .formatter(formatter)
            .hook(LoggerHook::new(self.name.clone()));

        let builder = match &self.output {
            OutputTarget::Stdout => builder.appender(ConsoleAppender::stdout()),
            OutputTarget::Stderr => builder.appender(ConsoleAppender::stderr()),
            OutputTarget::File(path) => builder.appender(FileAppender::new(path.clone())?),
        };

        Ok(builder.build())
    }
}
