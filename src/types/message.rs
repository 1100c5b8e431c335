//! Ready-made error values for building wrap-chains without defining new types.
//!
//! # Examples
//!
//! ```
//! use std::error::Error;
//!
//! let root = errs::new("connection refused");
//! let err = errs::wrap("fetching profile", root.clone());
//!
//! assert_eq!(err.to_string(), "fetching profile");
//! assert_eq!(err.source().map(|s| s.to_string()), Some(root.to_string()));
//! ```

use crate::inspect_ref;
use crate::traits::{short_type_name, CollectedError, Inspect};
use crate::types::Value;
use std::error::Error;
use std::fmt::{self, Display};
use std::sync::Arc;

/// A plain error carrying only a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message {
    s: String,
}

impl Message {
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self { s: message.into() }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.s
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.s)
    }
}

impl Error for Message {}

inspect_ref!(Message { s });

/// An error that adds a message on top of another error.
///
/// Equality compares the message and the identity of the wrapped error.
#[derive(Debug, Clone)]
pub struct Wrapped {
    msg: String,
    err: Arc<dyn CollectedError>,
}

impl Wrapped {
    pub fn new<E>(message: impl Into<String>, source: E) -> Self
    where
        E: CollectedError,
    {
        Self { msg: message.into(), err: Arc::new(source) }
    }

    /// Wraps `source` without adding text; the message is the source's own.
    pub fn transparent<E>(source: E) -> Self
    where
        E: CollectedError,
    {
        Self { msg: source.to_string(), err: Arc::new(source) }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.msg
    }

    #[inline]
    pub fn inner(&self) -> &dyn CollectedError {
        &*self.err
    }
}

impl PartialEq for Wrapped {
    fn eq(&self, other: &Self) -> bool {
        self.msg == other.msg && Arc::ptr_eq(&self.err, &other.err)
    }
}

impl Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.msg)
    }
}

impl Error for Wrapped {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some((*self.err).as_error())
    }
}

impl Inspect for Wrapped {
    fn inspect(&self) -> Value {
        let record = Value::record(
            short_type_name::<Self>(),
            vec![
                ("msg".into(), self.msg.inspect()),
                ("err".into(), Value::any("error", Some(Inspect::inspect(&*self.err)))),
            ],
        );
        Value::reference(short_type_name::<Self>(), Some(record))
    }
}

/// Creates a [`Message`] error.
#[inline]
pub fn new(message: impl Into<String>) -> Message {
    Message::new(message)
}

/// Wraps `source` under `message`.
#[inline]
pub fn wrap<E>(message: impl Into<String>, source: E) -> Wrapped
where
    E: CollectedError,
{
    Wrapped::new(message, source)
}

/// Wraps `source`, reusing its message.
#[inline]
pub fn wrap_with<E>(source: E) -> Wrapped
where
    E: CollectedError,
{
    Wrapped::transparent(source)
}
