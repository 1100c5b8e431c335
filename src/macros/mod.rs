//! Macros for describing error types to the pretty printer.
//!
//! - [`macro@crate::inspect_record`] - Implements [`Inspect`](crate::traits::Inspect) for a
//!   struct, rendering it as `TypeName{ field: value, ... }`.
//! - [`macro@crate::inspect_ref`] - Same, but behind a reference (`&TypeName{ ... }`), for
//!   errors that are usually handled through a pointer.
//!
//! # Examples
//!
//! ```
//! use errs::{inspect_record, Errors, PrettyConfig};
//! use std::fmt;
//!
//! #[derive(Debug)]
//! struct QuotaError {
//!     used: i64,
//!     limit: i64,
//! }
//!
//! impl fmt::Display for QuotaError {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "quota exceeded: {}/{}", self.used, self.limit)
//!     }
//! }
//!
//! impl std::error::Error for QuotaError {}
//!
//! inspect_record!(QuotaError { used, limit });
//!
//! let errors = Errors::new();
//! errors.append(QuotaError { used: 12, limit: 10 });
//! assert_eq!(
//!     errors.pretty_format_with(&PrettyConfig::default()),
//!     "Errors[\n  QuotaError{\n    used:  12,\n    limit: 10,\n  },\n]"
//! );
//! ```

/// Implements [`Inspect`](crate::traits::Inspect) for a struct by listing the
/// fields to render, in order.
///
/// Every listed field must itself implement `Inspect`. Omitted fields are
/// not rendered. An empty list renders the type as `TypeName{}`.
///
/// # Examples
///
/// ```
/// use errs::inspect_record;
/// use errs::traits::Inspect;
/// use errs::types::Value;
///
/// struct Timeout {
///     millis: u32,
/// }
///
/// inspect_record!(Timeout { millis });
///
/// let value = Timeout { millis: 250 }.inspect();
/// assert_eq!(value, Value::record("Timeout", vec![("millis".into(), Value::Uint(250))]));
/// ```
#[macro_export]
macro_rules! inspect_record {
    ($type:ty { $($field:ident),* $(,)? }) => {
        impl $crate::traits::Inspect for $type {
            fn inspect(&self) -> $crate::types::Value {
                $crate::__inspect_fields!(self, $($field),*)
            }
        }
    };
}

/// Like [`inspect_record!`](crate::inspect_record), but the record is rendered
/// behind a reference.
///
/// # Examples
///
/// ```
/// use errs::inspect_ref;
/// use errs::render::render_value;
/// use errs::traits::Inspect;
/// use errs::PrettyConfig;
///
/// struct Denied {
///     user: String,
/// }
///
/// inspect_ref!(Denied { user });
///
/// let text = render_value(&Denied { user: "ana".into() }.inspect(), &PrettyConfig::default());
/// assert_eq!(text, "&Denied{\n  user: \"ana\",\n}");
/// ```
#[macro_export]
macro_rules! inspect_ref {
    ($type:ty { $($field:ident),* $(,)? }) => {
        impl $crate::traits::Inspect for $type {
            fn inspect(&self) -> $crate::types::Value {
                $crate::types::Value::reference(
                    $crate::traits::short_type_name::<Self>(),
                    ::core::option::Option::Some($crate::__inspect_fields!(self, $($field),*)),
                )
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __inspect_fields {
    ($this:ident, $($field:ident),*) => {
        $crate::types::Value::record(
            $crate::traits::short_type_name::<Self>(),
            ::std::vec![$(
                (
                    ::std::borrow::Cow::Borrowed(::core::stringify!($field)),
                    $crate::traits::Inspect::inspect(&$this.$field),
                )
            ),*],
        )
    };
}

/// Emits a `tracing` event when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {};
}
