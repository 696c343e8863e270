//! Error classification
//!
//! Error-level lines carry an `err=<class>` field naming the kind of error
//! attached to the entry. Rust has no runtime type names worth printing, so
//! values opt in by implementing [`Classify`]; anything else reports
//! [`GENERIC_ERROR`].

use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Class reported when no classified error is attached
pub const GENERIC_ERROR: &str = "Generic";

/// A stable, human-meaningful label for the dynamic kind of a value
///
/// # Example
///
/// ```
/// use logfmt_logger::Classify;
/// use std::borrow::Cow;
///
/// #[derive(Debug)]
/// struct Timeout;
///
/// impl Classify for Timeout {
///     fn classify(&self) -> Cow<'_, str> {
///         Cow::Borrowed("*net.Timeout")
///     }
/// }
///
/// assert_eq!(Timeout.classify(), "*net.Timeout");
/// ```
pub trait Classify {
    fn classify(&self) -> Cow<'_, str>;
}

/// An error value stored on a log entry
///
/// Cheap to clone; the error itself is shared. The class label is captured
/// once at construction.
#[derive(Clone)]
pub struct ErrorValue {
    inner: Arc<dyn Error + Send + Sync>,
    class: Option<String>,
}

impl ErrorValue {
    /// Wrap an error that has no class of its own; it reports `Generic`
    pub fn new<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(err),
            class: None,
        }
    }

    /// Wrap an error and remember its [`Classify`] label
    pub fn classified<E>(err: E) -> Self
    where
        E: Error + Classify + Send + Sync + 'static,
    {
        let class = err.classify().into_owned();
        Self {
            inner: Arc::new(err),
            class: Some(class),
        }
    }

    /// Wrap an already boxed error; it reports `Generic`
    pub fn from_boxed(err: Box<dyn Error + Send + Sync>) -> Self {
        Self {
            inner: Arc::from(err),
            class: None,
        }
    }

    /// The class label, `Generic` when none was captured
    pub fn class(&self) -> &str {
        self.class.as_deref().unwrap_or(GENERIC_ERROR)
    }

    pub fn error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.inner.as_ref()
    }
}

impl Classify for ErrorValue {
    fn classify(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.class())
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorValue")
            .field("class", &self.class())
            .field("error", &self.inner)
            .finish()
    }
}
