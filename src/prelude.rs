//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use errs::prelude::*;
//!
//! let errors = Errors::new();
//! errors.append(new("first"));
//! errors.append(wrap("second", new("cause")));
//! assert_eq!(errors.len(), 2);
//! ```

// Macros
pub use crate::{inspect_record, inspect_ref};

// Core types
pub use crate::types::{Errors, Message, Value, Wrapped};

// Traits
pub use crate::traits::{CollectedError, Inspect};

// Constructors
pub use crate::types::message::{new, wrap, wrap_with};
