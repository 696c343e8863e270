//! Formatter trait turning entries into output bytes

use super::{error::Result, log_entry::LogEntry};
use std::io::Write;

pub trait Formatter: Send + Sync {
    /// Write exactly one encoded record to `out`
    fn write_entry(&self, entry: &LogEntry, out: &mut dyn Write) -> Result<()>;

    /// Encode one record into a fresh buffer
    ///
    /// Nothing is returned when writing fails part way.
    fn format(&self, entry: &LogEntry) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(256);
        self.write_entry(entry, &mut buf)?;
        Ok(buf)
    }
}
