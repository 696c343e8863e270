//! Appender over any `io::Write`

use crate::core::{Appender, LogLevel, Result};
use std::io::Write;

/// Forwards encoded lines to an arbitrary writer
///
/// Useful for sockets, pipes, or in-memory buffers in tests.
pub struct WriterAppender<W: Write + Send + Sync> {
    writer: W,
}

impl<W: Write + Send + Sync> WriterAppender<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> Appender for WriterAppender<W> {
    fn append(&mut self, _level: LogLevel, line: &[u8]) -> Result<()> {
        self.writer.write_all(line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "writer"
    }
}
