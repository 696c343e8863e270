//! Console appender implementation

use crate::core::{Appender, LogLevel, Result};
use std::io::Write;

/// Which standard stream(s) a [`ConsoleAppender`] writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
    /// Error-level entries and worse to stderr, the rest to stdout
    Split,
}

pub struct ConsoleAppender {
    target: ConsoleTarget,
}

impl ConsoleAppender {
    pub fn new(target: ConsoleTarget) -> Self {
        Self { target }
    }

    pub fn stdout() -> Self {
        Self::new(ConsoleTarget::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(ConsoleTarget::Stderr)
    }

    pub fn split() -> Self {
        Self::new(ConsoleTarget::Split)
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    fn uses_stderr(&self, level: LogLevel) -> bool {
        match self.target {
            ConsoleTarget::Stdout => false,
            ConsoleTarget::Stderr => true,
            ConsoleTarget::Split => level.is_error_or_worse(),
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::stderr()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, level: LogLevel, line: &[u8]) -> Result<()> {
        if self.uses_stderr(level) {
            std::io::stderr().lock().write_all(line)?;
        } else {
            std::io::stdout().lock().write_all(line)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
