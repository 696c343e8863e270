//! Appender implementations

pub mod console;
pub mod file;
pub mod writer;

pub use console::{ConsoleAppender, ConsoleTarget};
pub use file::FileAppender;
pub use writer::WriterAppender;

pub use crate::core::Appender;
