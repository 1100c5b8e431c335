//! Collect many errors, query them as one, and print them as a tree.
//!
//! [`Errors`] is a thread-safe, append-only collection of error values. It
//! answers chain queries over every entry ([`Errors::is`], [`Errors::find`])
//! and renders itself as a deep, type-annotated tree for debugging.
//!
//! # Examples
//!
//! ## Collecting and rendering
//!
//! ```
//! use errs::{Errors, PrettyConfig};
//!
//! let errors = Errors::new();
//! errors.append(errs::wrap("wrap error", errs::new("wrap error")));
//! errors.append_nil();
//!
//! let expected = "Errors[
//!   &Wrapped{
//!     msg: \"wrap error\",
//!     err: &Message{
//!       s: \"wrap error\",
//!     },
//!   },
//!   nil,
//! ]";
//! assert_eq!(errors.pretty_format_with(&PrettyConfig::default()), expected);
//! ```
//!
//! ## Chain queries
//!
//! ```
//! use errs::{Errors, Message};
//!
//! let root = errs::new("permission denied");
//! let errors = Errors::new();
//! errors.append(errs::wrap("opening log", root.clone()));
//!
//! assert!(errors.is(&root));
//!
//! let mut slot: Option<Message> = None;
//! assert!(errors.as_target(&mut slot));
//! assert_eq!(slot, Some(root));
//! ```
//!
//! ## Describing your own errors
//!
//! Types render through [`Inspect`](traits::Inspect). The
//! [`inspect_record!`] and [`inspect_ref!`] macros cover plain structs.

#[macro_use]
pub mod macros;

/// Process-wide render settings and output sink
pub mod config;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Recursive pretty printer and column alignment
pub mod render;
/// Introspection and collection traits
pub mod traits;
/// The error collection, ready-made errors and the value model
pub mod types;

pub use config::{
    delimiter, new_line, output, reset_delimiter, reset_new_line, reset_output, set_delimiter,
    set_new_line, set_output, NewLine, Output, PrettyConfig,
};
pub use traits::{CollectedError, Inspect};
pub use types::message::{new, wrap, wrap_with};
pub use types::{Errors, Message, Value, Wrapped};
