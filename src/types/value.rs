//! The closed set of shapes the pretty printer knows how to render.
//!
//! Anything that should appear in an [`Errors`](crate::Errors) tree is first
//! lowered into a [`Value`] through [`Inspect`](crate::traits::Inspect). The
//! printer then dispatches on the variant alone, so adding a new
//! `Inspect` implementation never requires touching the renderer.

use std::borrow::Cow;

/// Display name of a type as it appears in the rendered tree.
pub type TypeName = Cow<'static, str>;

/// A runtime description of a value of arbitrary shape.
///
/// # Examples
///
/// ```
/// use errs::types::Value;
///
/// let point = Value::record("Point", vec![("x".into(), Value::Int(1)), ("y".into(), Value::Int(2))]);
/// assert!(matches!(point, Value::Record { .. }));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent or invalid value, rendered as `nil`.
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    /// Rendered in Rust debug form, so whole numbers keep a fraction (`2.0`).
    Float(f64),
    Complex {
        re: f64,
        im: f64,
    },
    Str(String),
    /// Fixed-size sequence. Never nil.
    Array {
        type_name: TypeName,
        items: Vec<Value>,
    },
    /// Growable sequence. `None` is the nil state, distinct from empty.
    Slice {
        type_name: TypeName,
        items: Option<Vec<Value>>,
    },
    /// Key/value mapping. `None` is the nil state.
    Map {
        type_name: TypeName,
        entries: Option<Vec<(Value, Value)>>,
    },
    /// Named fields in declaration order.
    Record {
        type_name: TypeName,
        fields: Vec<(TypeName, Value)>,
    },
    /// Pointer-like reference. `type_name` names the referent type.
    Ref {
        type_name: TypeName,
        target: Option<Box<Value>>,
    },
    /// Polymorphic slot holding at most one other value.
    Any {
        type_name: TypeName,
        slot: AnySlot,
    },
    /// Opaque channel-like handle, rendered by address. For std channels the
    /// address is that of the handle itself, not of the shared channel.
    Chan {
        type_name: TypeName,
        address: usize,
    },
    /// Opaque callable, rendered by signature.
    Func {
        signature: TypeName,
    },
}

/// Contents of a [`Value::Any`] slot.
#[derive(Debug, Clone, PartialEq)]
pub enum AnySlot {
    Empty,
    Held(Box<Value>),
    /// The slot exists but could not be read.
    Malformed,
}

impl Value {
    #[inline]
    pub fn str(text: impl Into<String>) -> Self {
        Value::Str(text.into())
    }

    #[inline]
    pub fn record(type_name: impl Into<TypeName>, fields: Vec<(TypeName, Value)>) -> Self {
        Value::Record { type_name: type_name.into(), fields }
    }

    #[inline]
    pub fn slice(type_name: impl Into<TypeName>, items: Vec<Value>) -> Self {
        Value::Slice { type_name: type_name.into(), items: Some(items) }
    }

    #[inline]
    pub fn nil_slice(type_name: impl Into<TypeName>) -> Self {
        Value::Slice { type_name: type_name.into(), items: None }
    }

    #[inline]
    pub fn array(type_name: impl Into<TypeName>, items: Vec<Value>) -> Self {
        Value::Array { type_name: type_name.into(), items }
    }

    #[inline]
    pub fn map(type_name: impl Into<TypeName>, entries: Vec<(Value, Value)>) -> Self {
        Value::Map { type_name: type_name.into(), entries: Some(entries) }
    }

    #[inline]
    pub fn nil_map(type_name: impl Into<TypeName>) -> Self {
        Value::Map { type_name: type_name.into(), entries: None }
    }

    /// Pointer to `target`, or a null pointer to `type_name` when `target` is `None`.
    #[inline]
    pub fn reference(type_name: impl Into<TypeName>, target: Option<Value>) -> Self {
        Value::Ref { type_name: type_name.into(), target: target.map(Box::new) }
    }

    /// Polymorphic slot that is empty when `held` is `None`.
    #[inline]
    pub fn any(type_name: impl Into<TypeName>, held: Option<Value>) -> Self {
        let slot = match held {
            Some(value) => AnySlot::Held(Box::new(value)),
            None => AnySlot::Empty,
        };
        Value::Any { type_name: type_name.into(), slot }
    }

    #[inline]
    pub fn chan(type_name: impl Into<TypeName>, address: usize) -> Self {
        Value::Chan { type_name: type_name.into(), address }
    }

    #[inline]
    pub fn func(signature: impl Into<TypeName>) -> Self {
        Value::Func { signature: signature.into() }
    }
}
