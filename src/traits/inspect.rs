use crate::types::{AnySlot, TypeName, Value};
use smallvec::{Array, SmallVec};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};
use std::sync::{Arc, Mutex, TryLockError};

/// Lowers a value into the [`Value`] tree the pretty printer renders.
///
/// Implement it by hand, or with [`inspect_record!`](crate::inspect_record) /
/// [`inspect_ref!`](crate::inspect_ref) for plain structs.
///
/// # Examples
///
/// ```
/// use errs::traits::Inspect;
/// use errs::types::Value;
///
/// assert_eq!(7u8.inspect(), Value::Uint(7));
/// assert_eq!("x".inspect(), Value::Str("x".to_string()));
/// ```
pub trait Inspect {
    fn inspect(&self) -> Value;
}

/// [`core::any::type_name`] with every module path stripped.
///
/// `alloc::vec::Vec<my_app::Item>` becomes `Vec<Item>`.
pub fn short_type_name<T: ?Sized>() -> TypeName {
    Cow::Owned(strip_paths(core::any::type_name::<T>()))
}

fn strip_paths(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut word_start = 0;
    for (index, ch) in full.char_indices() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            continue;
        }
        push_last_segment(&mut out, &full[word_start..index]);
        out.push(ch);
        word_start = index + ch.len_utf8();
    }
    push_last_segment(&mut out, &full[word_start..]);
    out
}

#[inline]
fn push_last_segment(out: &mut String, path: &str) {
    out.push_str(path.rsplit("::").next().unwrap_or(path));
}

impl Inspect for Value {
    fn inspect(&self) -> Value {
        self.clone()
    }
}

impl Inspect for bool {
    fn inspect(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! inspect_as {
    ($variant:ident: $target:ty => $($source:ty),+) => {
        $(
            impl Inspect for $source {
                #[inline]
                fn inspect(&self) -> Value {
                    Value::$variant(*self as $target)
                }
            }
        )+
    };
}

inspect_as!(Int: i64 => i8, i16, i32, i64, isize);
inspect_as!(Uint: u64 => u8, u16, u32, u64, usize);
inspect_as!(Float: f64 => f32, f64);

impl Inspect for char {
    fn inspect(&self) -> Value {
        Value::Int(i64::from(u32::from(*self)))
    }
}

impl Inspect for str {
    fn inspect(&self) -> Value {
        Value::Str(self.to_string())
    }
}

impl Inspect for String {
    fn inspect(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl Inspect for Cow<'_, str> {
    fn inspect(&self) -> Value {
        Value::Str(self.to_string())
    }
}

impl Inspect for () {
    fn inspect(&self) -> Value {
        Value::record("()", Vec::new())
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn inspect(&self) -> Value {
        (**self).inspect()
    }
}

/// `None` is a null reference, `Some` points at the value.
impl<T: Inspect> Inspect for Option<T> {
    fn inspect(&self) -> Value {
        Value::reference(short_type_name::<T>(), self.as_ref().map(Inspect::inspect))
    }
}

macro_rules! inspect_pointer {
    ($($pointer:ident),+) => {
        $(
            impl<T: Inspect + ?Sized> Inspect for $pointer<T> {
                fn inspect(&self) -> Value {
                    Value::reference(short_type_name::<T>(), Some((**self).inspect()))
                }
            }
        )+
    };
}

inspect_pointer!(Box, Rc, Arc);

impl<T: Inspect> Inspect for [T] {
    fn inspect(&self) -> Value {
        Value::slice(short_type_name::<Self>(), self.iter().map(Inspect::inspect).collect())
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn inspect(&self) -> Value {
        Value::array(short_type_name::<Self>(), self.iter().map(Inspect::inspect).collect())
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn inspect(&self) -> Value {
        Value::slice(short_type_name::<Self>(), self.iter().map(Inspect::inspect).collect())
    }
}

impl<A> Inspect for SmallVec<A>
where
    A: Array,
    A::Item: Inspect,
{
    fn inspect(&self) -> Value {
        Value::slice(short_type_name::<Self>(), self.iter().map(Inspect::inspect).collect())
    }
}

impl<K: Inspect, V: Inspect, S> Inspect for HashMap<K, V, S> {
    fn inspect(&self) -> Value {
        Value::map(short_type_name::<HashMap<K, V>>(), inspect_entries(self.iter()))
    }
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn inspect(&self) -> Value {
        Value::map(short_type_name::<Self>(), inspect_entries(self.iter()))
    }
}

fn inspect_entries<'a, K, V>(entries: impl Iterator<Item = (&'a K, &'a V)>) -> Vec<(Value, Value)>
where
    K: Inspect + 'a,
    V: Inspect + 'a,
{
    entries.map(|(key, value)| (key.inspect(), value.inspect())).collect()
}

/// A lock held elsewhere cannot be read, so its data shows as a malformed slot.
impl<T: Inspect + ?Sized> Inspect for Mutex<T> {
    fn inspect(&self) -> Value {
        let (data, poisoned) = match self.try_lock() {
            Ok(guard) => ((*guard).inspect(), false),
            Err(TryLockError::Poisoned(poisoned)) => ((*poisoned.into_inner()).inspect(), true),
            Err(TryLockError::WouldBlock) => {
                (Value::Any { type_name: short_type_name::<T>(), slot: AnySlot::Malformed }, false)
            },
        };
        Value::record(
            short_type_name::<Self>(),
            vec![("data".into(), data), ("poisoned".into(), Value::Bool(poisoned))],
        )
    }
}

// std channel handles expose no shared identity, so the address rendered is
// where this handle lives. Clones of one `Sender` show different addresses.
macro_rules! inspect_chan {
    ($($handle:ident),+) => {
        $(
            impl<T> Inspect for $handle<T> {
                fn inspect(&self) -> Value {
                    Value::chan(short_type_name::<Self>(), self as *const Self as usize)
                }
            }
        )+
    };
}

inspect_chan!(Sender, SyncSender, Receiver);

macro_rules! inspect_fn {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> Inspect for fn($($arg),*) -> R {
            fn inspect(&self) -> Value {
                Value::func(short_type_name::<Self>())
            }
        }
    };
}

inspect_fn!();
inspect_fn!(A);
inspect_fn!(A, B);
inspect_fn!(A, B, C);

/// Opaque errors render as their message plus the wrapped source, if any.
impl Inspect for dyn Error + 'static {
    fn inspect(&self) -> Value {
        let source = self.source().map(Inspect::inspect);
        Value::record(
            "dyn Error",
            vec![
                ("msg".into(), Value::Str(self.to_string())),
                ("err".into(), Value::any("error", source)),
            ],
        )
    }
}

impl Inspect for dyn Error + Send + Sync + 'static {
    fn inspect(&self) -> Value {
        (self as &(dyn Error + 'static)).inspect()
    }
}

impl Inspect for std::io::Error {
    fn inspect(&self) -> Value {
        let record = Value::record(
            "io::Error",
            vec![
                ("kind".into(), Value::Str(format!("{:?}", self.kind()))),
                ("msg".into(), Value::Str(self.to_string())),
            ],
        );
        Value::reference("io::Error", Some(record))
    }
}
