//! Pipeline counters
//!
//! Tracks how many entries made it to the appenders and where the others
//! were lost: a failing hook, a failing formatter, or a failing appender.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for logger observability
///
/// # Example
///
/// ```
/// use logfmt_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_logged();
/// metrics.record_format_failure();
///
/// assert_eq!(metrics.total_logged(), 1);
/// assert_eq!(metrics.format_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Entries written to every appender
    total_logged: AtomicU64,

    /// Hook invocations that returned an error
    hook_failures: AtomicU64,

    /// Entries the formatter could not encode; nothing was written for them
    format_failures: AtomicU64,

    /// Entries at least one appender failed to accept
    write_failures: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            total_logged: AtomicU64::new(0),
            hook_failures: AtomicU64::new(0),
            format_failures: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn hook_failures(&self) -> u64 {
        self.hook_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn format_failures(&self) -> u64 {
        self.format_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Record a successfully logged entry, returns the previous count
    #[inline]
    pub fn record_logged(&self) -> u64 {
        self.total_logged.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_hook_failure(&self) -> u64 {
        self.hook_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_format_failure(&self) -> u64 {
        self.format_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Entries that produced no complete output
    pub fn lost_count(&self) -> u64 {
        self.format_failures() + self.write_failures()
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.total_logged.store(0, Ordering::Relaxed);
        self.hook_failures.store(0, Ordering::Relaxed);
        self.format_failures.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            total_logged: AtomicU64::new(self.total_logged()),
            hook_failures: AtomicU64::new(self.hook_failures()),
            format_failures: AtomicU64::new(self.format_failures()),
            write_failures: AtomicU64::new(self.write_failures()),
        }
    }
}
