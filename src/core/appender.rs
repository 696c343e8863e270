//! Appender trait for log output destinations

use super::{error::Result, log_level::LogLevel};

/// Receives fully encoded lines
///
/// `line` is one complete record including its trailing newline; `level`
/// lets an appender route by severity.
pub trait Appender: Send + Sync {
    fn append(&mut self, level: LogLevel, line: &[u8]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
