use crate::traits::Inspect;
use std::error::Error;

/// An error value that can be stored in an [`Errors`](crate::Errors) collection.
///
/// Implemented for every `Error + Inspect` type that can cross threads.
pub trait CollectedError: Error + Inspect + Send + Sync + 'static {
    /// Upcasts to a plain error trait object for chain walking.
    fn as_error(&self) -> &(dyn Error + 'static);
}

impl<T> CollectedError for T
where
    T: Error + Inspect + Send + Sync + 'static,
{
    #[inline]
    fn as_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

/// Iterates over `err` followed by every error reachable through `source()`.
pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    core::iter::successors(Some(err), |&current| current.source())
}
