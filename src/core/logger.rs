//! Main logger implementation
//!
//! An entry goes through four steps: level check, hooks registered for its
//! level, the formatter, then every appender. Failures in any step are
//! reported on stderr and counted; they never reach the caller.

use super::{
    appender::Appender,
    error::Result,
    formatter::Formatter,
    hook::{Hook, LevelHooks, LoggerHook},
    log_context::LogContext,
    log_entry::LogEntry,
    log_level::LogLevel,
    logfmt::LogfmtFormatter,
    metrics::LoggerMetrics,
};
use crate::appenders::ConsoleAppender;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

/// Called with the process exit code after a `fatal` entry
pub type ExitFn = Arc<dyn Fn(i32) + Send + Sync>;

/// Build a logfmt logger tagged with `name`
///
/// The returned logger writes to stderr at `info` level, and every entry,
/// whatever its level, carries `logger=<name>`.
///
/// # Example
///
/// ```
/// use logfmt_logger::new_logger;
///
/// let logger = new_logger("billing");
/// logger.info("invoice sent");
/// ```
pub fn new_logger(name: impl Into<String>) -> Logger {
    Logger::builder()
        .formatter(LogfmtFormatter::new())
        .hook(LoggerHook::new(name))
        .appender(ConsoleAppender::stderr())
        .build()
}

fn default_exit() -> ExitFn {
    Arc::new(|code| std::process::exit(code))
}

pub struct Logger {
    min_level: RwLock<LogLevel>,
    hooks: RwLock<LevelHooks>,
    formatter: Box<dyn Formatter>,
    appenders: Mutex<Vec<Box<dyn Appender>>>,
    metrics: Arc<LoggerMetrics>,
    exit_fn: ExitFn,
}

impl Logger {
    /// A logfmt logger at `info` level with no hooks and no appenders
    #[must_use]
    pub fn new() -> Self {
        Self::with_formatter(LogfmtFormatter::new())
    }

    #[must_use]
    pub fn with_formatter<F: Formatter + 'static>(formatter: F) -> Self {
        Self {
            min_level: RwLock::new(LogLevel::Info),
            hooks: RwLock::new(LevelHooks::new()),
            formatter: Box::new(formatter),
            appenders: Mutex::new(Vec::new()),
            metrics: Arc::new(LoggerMetrics::new()),
            exit_fn: default_exit(),
        }
    }

    pub fn add_appender(&mut self, appender: Box<dyn Appender>) {
        self.appenders.lock().push(appender);
    }

    pub fn add_hook(&mut self, hook: Arc<dyn Hook>) {
        self.hooks.write().add(hook);
    }

    pub fn set_min_level(&mut self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    /// True when entries at `level` would be processed
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level <= *self.min_level.read()
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }
        self.process(LogEntry::new(level, message));
    }

    /// Log with structured context fields
    pub fn log_with_context(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        context: LogContext,
    ) {
        if !self.is_enabled(level) {
            return;
        }
        self.process(LogEntry::new(level, message).with_context(context));
    }

    /// Log a prebuilt entry, keeping its timestamp and fields
    pub fn log_entry(&self, entry: LogEntry) {
        if !self.is_enabled(entry.level) {
            return;
        }
        self.process(entry);
    }

    fn process(&self, mut entry: LogEntry) {
        if let Err(e) = self.hooks.read().fire(&mut entry) {
            eprintln!("[LOGGER ERROR] Failed to fire hook: {}", e);
            self.metrics.record_hook_failure();
        }

        let line = match self.formatter.format(&entry) {
            Ok(line) => line,
            Err(e) => {
                eprintln!("[LOGGER ERROR] Failed to format entry: {}", e);
                self.metrics.record_format_failure();
                return;
            }
        };

        let mut appenders = self.appenders.lock();
        if Self::write_line(&mut appenders, entry.level, &line) {
            self.metrics.record_write_failure();
        } else {
            self.metrics.record_logged();
        }
    }

    /// Hand `line` to every appender; returns true if any of them failed
    fn write_line(appenders: &mut [Box<dyn Appender>], level: LogLevel, line: &[u8]) -> bool {
        let mut has_error = false;
        for appender in appenders.iter_mut() {
            if let Err(e) = appender.append(level, line) {
                eprintln!(
                    "[LOGGER ERROR] Appender '{}' failed to write: {}",
                    appender.name(),
                    e
                );
                has_error = true;
            }
        }
        has_error
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.lock();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Helper for structured error logging
    pub fn error_with_context(&self, message: impl Into<String>, context: LogContext) {
        self.log_with_context(LogLevel::Error, message, context);
    }

    /// Log at fatal level, flush, then call the exit function with code 1
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
        self.exit(1);
    }

    /// Log at panic level, flush, then panic with the message
    pub fn panic(&self, message: impl Into<String>) -> ! {
        let message = message.into();
        self.log(LogLevel::Panic, message.as_str());
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Flush before panic failed: {}", e);
        }
        panic!("{}", message);
    }

    fn exit(&self, code: i32) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Flush before exit failed: {}", e);
        }
        (self.exit_fn)(code);
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use logfmt_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Debug)
    ///     .hook(LoggerHook::new("worker"))
    ///     .appender(ConsoleAppender::stdout())
    ///     .build();
    /// assert!(logger.is_enabled(LogLevel::Debug));
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Entries are written synchronously; only buffered appenders need this
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Flush on drop failed: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
pub struct LoggerBuilder {
    min_level: LogLevel,
    formatter: Option<Box<dyn Formatter>>,
    hooks: LevelHooks,
    appenders: Vec<Box<dyn Appender>>,
    exit_fn: Option<ExitFn>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            formatter: None,
            hooks: LevelHooks::new(),
            appenders: Vec::new(),
            exit_fn: None,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Replace the default logfmt formatter
    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Register a hook for the levels it reports
    #[must_use = "builder methods return a new value"]
    pub fn hook<H: Hook + 'static>(mut self, hook: H) -> Self {
        self.hooks.add(Arc::new(hook));
        self
    }

    /// Add an appender
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Replace `std::process::exit` as the action taken after a fatal entry
    #[must_use = "builder methods return a new value"]
    pub fn exit_fn<F>(mut self, exit_fn: F) -> Self
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        self.exit_fn = Some(Arc::new(exit_fn));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            min_level: RwLock::new(self.min_level),
            hooks: RwLock::new(self.hooks),
            formatter: self
                .formatter
                .unwrap_or_else(|| Box::new(LogfmtFormatter::new())),
            appenders: Mutex::new(self.appenders),
            metrics: Arc::new(LoggerMetrics::new()),
            exit_fn: self.exit_fn.unwrap_or_else(default_exit),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
