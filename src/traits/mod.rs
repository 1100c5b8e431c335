//! Traits that connect arbitrary error types to the collection and the printer.
//!
//! - [`Inspect`]: lowers a value into the [`Value`](crate::types::Value) tree
//! - [`CollectedError`]: anything that can be appended to [`Errors`](crate::Errors)
//!
//! # Examples
//!
//! ```
//! use errs::traits::{chain, CollectedError};
//!
//! let err = errs::wrap("loading config", errs::new("file missing"));
//! let messages: Vec<String> = chain(err.as_error()).map(|e| e.to_string()).collect();
//! assert_eq!(messages, ["loading config", "file missing"]);
//! ```

pub mod collected_error;
pub mod inspect;

pub use collected_error::{chain, CollectedError};
pub use inspect::{short_type_name, Inspect};
