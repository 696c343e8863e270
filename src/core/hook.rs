//! Hooks run on every entry before it is formatted
//!
//! A hook gets exclusive access to the entry and may rewrite its fields.
//! [`LoggerHook`] is the one this crate ships: it stamps the logger name.

use super::error::Result;
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::logfmt::FIELD_KEY_LOGGER;
use std::collections::HashMap;
use std::sync::Arc;

pub trait Hook: Send + Sync {
    /// Levels this hook fires for
    fn levels(&self) -> &[LogLevel] {
        &LogLevel::ALL
    }

    fn fire(&self, entry: &mut LogEntry) -> Result<()>;

    fn name(&self) -> &str;
}

/// Hooks grouped by the level they fire for, in registration order
#[derive(Default, Clone)]
pub struct LevelHooks {
    hooks: HashMap<LogLevel, Vec<Arc<dyn Hook>>>,
}

impl LevelHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `hook` for each level it reports
    pub fn add(&mut self, hook: Arc<dyn Hook>) {
        for level in hook.levels() {
            self.hooks.entry(*level).or_default().push(Arc::clone(&hook));
        }
    }

    /// Number of hooks registered for `level`
    pub fn count(&self, level: LogLevel) -> usize {
        self.hooks.get(&level).map_or(0, Vec::len)
    }

    /// Fire every hook registered for the entry's level
    ///
    /// Stops at the first failure and returns it.
    pub fn fire(&self, entry: &mut LogEntry) -> Result<()> {
        if let Some(hooks) = self.hooks.get(&entry.level) {
            for hook in hooks {
                hook.fire(entry)?;
            }
        }
        Ok(())
    }
}

/// Stamps a fixed logger name on every entry
///
/// Any `logger` field already present is overwritten.
#[derive(Debug, Clone)]
pub struct LoggerHook {
    name: String,
}

impl LoggerHook {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn logger_name(&self) -> &str {
        &self.name
    }
}

impl Hook for LoggerHook {
    fn fire(&self, entry: &mut LogEntry) -> Result<()> {
        entry.fields.add_field(FIELD_KEY_LOGGER, self.name.as_str());
        Ok(())
    }

    fn name(&self) -> &str {
        "logger"
    }
}
