//! The error collection and the value model it renders through.
//!
//! # Examples
//!
//! ```
//! use errs::types::{Errors, Value};
//! use errs::traits::Inspect;
//!
//! let errors = Errors::new();
//! errors.append(errs::new("timeout"));
//!
//! let snapshot = errors.snapshot();
//! assert!(matches!(snapshot[0].as_deref().map(|e| e.inspect()), Some(Value::Ref { .. })));
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod errors;
pub mod message;
pub mod value;

pub use accumulator::Accumulator;
pub use errors::{Entry, Errors};
pub use message::{Message, Wrapped};
pub use value::{AnySlot, TypeName, Value};

/// SmallVec-backed storage used for accumulating errors.
///
/// Keeps up to 2 entries inline, which covers the common case of a unit of
/// work that fails once or twice.
pub(crate) type ErrorVec<E> = SmallVec<[E; 2]>;
