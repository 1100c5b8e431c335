//! Thread-safe, append-only collection of errors.

use crate::config::{self, PrettyConfig};
use crate::render::render_values;
use crate::traits::{chain, short_type_name, CollectedError, Inspect};
use crate::types::accumulator::Accumulator;
use crate::types::Value;
use std::error::Error;
use std::fmt::{self, Debug, Display};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One slot of an [`Errors`] collection. `None` is the nil entry.
pub type Entry = Option<Arc<dyn CollectedError>>;

/// Text written in place of a nil entry by the aggregate `Display`.
pub const NIL_MESSAGE: &str = "<nil>";

/// Collects errors produced during a unit of work.
///
/// Appending takes `&self` and is safe from any number of threads. Entries
/// keep their insertion order, which is also the order in which they are
/// displayed, rendered and searched.
///
/// # Examples
///
/// ```
/// use errs::{Errors, PrettyConfig};
///
/// let errors = Errors::new();
/// errors.append(errs::new("disk full"));
/// errors.append_nil();
///
/// assert_eq!(errors.len(), 2);
/// assert!(errors.is(&errs::new("disk full")));
/// assert_eq!(
///     errors.pretty_format_with(&PrettyConfig::default()),
///     "Errors[\n  &Message{\n    s: \"disk full\",\n  },\n  nil,\n]"
/// );
/// ```
#[derive(Default)]
pub struct Errors {
    entries: Mutex<Accumulator<Entry>>,
}

impl Errors {
    #[inline]
    pub fn new() -> Self {
        Self { entries: Mutex::new(Accumulator::new()) }
    }

    fn lock(&self) -> MutexGuard<'_, Accumulator<Entry>> {
        // Pushes cannot leave the accumulator half-updated, so a poisoned
        // lock still guards a consistent sequence.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push_entry(&self, entry: Entry) {
        let mut entries = self.lock();
        entries.push(entry);
        trace_event!(trace, len = entries.len(), "error appended");
    }

    /// Adds `err` to the end of the collection.
    pub fn append<E>(&self, err: E)
    where
        E: CollectedError,
    {
        self.push_entry(Some(Arc::new(err)));
    }

    /// Adds an error that is already shared elsewhere.
    pub fn append_shared(&self, err: Arc<dyn CollectedError>) {
        self.push_entry(Some(err));
    }

    /// Adds a boxed error trait object, keeping it reachable by [`Errors::is`]
    /// and [`Errors::find`].
    pub fn append_boxed(&self, err: Box<dyn Error + Send + Sync>) {
        self.push_entry(Some(Arc::new(Opaque(err))));
    }

    /// Adds the nil entry. It renders as `nil`.
    pub fn append_nil(&self) {
        self.push_entry(None);
    }

    /// Number of entries, nil entries included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Point-in-time copy of the entries. Appends made afterwards are not
    /// reflected in the returned vector.
    pub fn snapshot(&self) -> Vec<Entry> {
        self.lock().iter().cloned().collect()
    }

    /// Returns true if any entry, or any error in its `source()` chain,
    /// equals `target`. Nested collections are searched too.
    pub fn is<E>(&self, target: &E) -> bool
    where
        E: Error + PartialEq + 'static,
    {
        self.snapshot().iter().flatten().any(|entry| chain_contains((**entry).as_error(), target))
    }

    /// Returns a clone of the first `E` found in any entry's `source()` chain.
    pub fn find<E>(&self) -> Option<E>
    where
        E: Error + Clone + 'static,
    {
        self.snapshot().iter().flatten().find_map(|entry| chain_find((**entry).as_error()))
    }

    /// Stores the first `E` found in any entry's chain into `slot`.
    ///
    /// Returns false and leaves `slot` untouched when nothing matches.
    pub fn as_target<E>(&self, slot: &mut Option<E>) -> bool
    where
        E: Error + Clone + 'static,
    {
        match self.find() {
            Some(found) => {
                *slot = Some(found);
                true
            },
            None => false,
        }
    }

    /// Renders the collection with the process-wide settings.
    pub fn pretty_format(&self) -> String {
        self.pretty_format_with(&PrettyConfig::current())
    }

    /// Renders the collection with explicit settings.
    pub fn pretty_format_with(&self, config: &PrettyConfig) -> String {
        let values: Vec<Value> = self.snapshot().iter().map(inspect_entry).collect();
        render_values(&values, config)
    }

    /// Writes [`Errors::pretty_format`] to the configured output sink.
    pub fn pretty_print(&self) -> io::Result<()> {
        let text = self.pretty_format();
        let mut out = config::output();
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    /// Joins every entry's message with the configured line ending.
    ///
    /// The delimiter only applies to the rendered tree.
    pub fn join_messages(&self, config: &PrettyConfig) -> String {
        let messages: Vec<String> = self
            .snapshot()
            .iter()
            .map(|entry| match entry {
                Some(err) => err.to_string(),
                None => NIL_MESSAGE.to_string(),
            })
            .collect();
        messages.join(config.new_line.as_str())
    }
}

fn inspect_entry(entry: &Entry) -> Value {
    match entry {
        Some(err) => Inspect::inspect(&**err),
        None => Value::Nil,
    }
}

fn chain_contains<E>(err: &(dyn Error + 'static), target: &E) -> bool
where
    E: Error + PartialEq + 'static,
{
    chain(err).any(|link| {
        link.downcast_ref::<E>().is_some_and(|found| found == target)
            || link.downcast_ref::<Errors>().is_some_and(|nested| nested.is(target))
    })
}

fn chain_find<E>(err: &(dyn Error + 'static)) -> Option<E>
where
    E: Error + Clone + 'static,
{
    chain(err).find_map(|link| match link.downcast_ref::<E>() {
        Some(found) => Some(found.clone()),
        None => link.downcast_ref::<Errors>().and_then(Errors::find::<E>),
    })
}

impl Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join_messages(&PrettyConfig::current()))
    }
}

impl Debug for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Errors").field("entries", &self.snapshot()).finish()
    }
}

impl Error for Errors {}

impl Inspect for Errors {
    fn inspect(&self) -> Value {
        let entries = self
            .snapshot()
            .iter()
            .map(|entry| Value::any("error", entry.as_ref().map(|err| Inspect::inspect(&**err))))
            .collect();
        let record = Value::record(
            short_type_name::<Self>(),
            vec![("errors".into(), Value::slice("Vec<error>", entries))],
        );
        Value::reference(short_type_name::<Self>(), Some(record))
    }
}

impl<E: CollectedError> Extend<E> for Errors {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        let mut entries = self.lock();
        entries.extend(iter.into_iter().map(|err| Some(Arc::new(err) as Arc<dyn CollectedError>)));
        trace_event!(trace, len = entries.len(), "errors extended");
    }
}

impl<E: CollectedError> FromIterator<E> for Errors {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let entries =
            iter.into_iter().map(|err| Some(Arc::new(err) as Arc<dyn CollectedError>)).collect();
        Self { entries: Mutex::new(entries) }
    }
}

/// Adapter that lets a boxed trait object live in the collection.
///
/// `source()` yields the boxed error itself so chain queries see it.
struct Opaque(Box<dyn Error + Send + Sync>);

impl Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Error for Opaque {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.0)
    }
}

impl Inspect for Opaque {
    fn inspect(&self) -> Value {
        Value::reference(short_type_name::<dyn Error>(), Some((*self.0).inspect()))
    }
}
