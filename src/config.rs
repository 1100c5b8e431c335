//! Process-wide render settings and the output sink used by
//! [`Errors::pretty_print`](crate::Errors::pretty_print).
//!
//! The settings are global and shared by every thread. A render reads them
//! once, through [`PrettyConfig::current`], so a concurrent change only
//! affects renders that start afterwards. Callers that want per-call settings
//! pass a [`PrettyConfig`] to
//! [`Errors::pretty_format_with`](crate::Errors::pretty_format_with) instead.
//!
//! # Examples
//!
//! ```
//! use errs::{new_line, set_new_line, reset_new_line, NewLine};
//!
//! set_new_line("\r\n");
//! assert_eq!(new_line(), NewLine::CrLf);
//!
//! // Anything that is not a line ending falls back to "\n".
//! set_new_line("<br>");
//! assert_eq!(new_line(), NewLine::Lf);
//! reset_new_line();
//! ```

use std::borrow::Cow;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError, RwLock};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Line ending written between rendered lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NewLine {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl NewLine {
    /// Parses a line-ending token, falling back to [`NewLine::Lf`].
    pub fn from_token(token: &str) -> Self {
        match token {
            "\n" => NewLine::Lf,
            "\r\n" => NewLine::CrLf,
            "\r" => NewLine::Cr,
            _ => NewLine::Lf,
        }
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            NewLine::Lf => "\n",
            NewLine::CrLf => "\r\n",
            NewLine::Cr => "\r",
        }
    }
}

/// Settings for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrettyConfig {
    /// Token written after every entry, field and element.
    pub delimiter: Cow<'static, str>,
    pub new_line: NewLine,
}

impl PrettyConfig {
    pub const DEFAULT: PrettyConfig =
        PrettyConfig { delimiter: Cow::Borrowed(","), new_line: NewLine::Lf };

    /// Snapshot of the process-wide settings.
    pub fn current() -> Self {
        SETTINGS.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<Cow<'static, str>>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_new_line(mut self, new_line: NewLine) -> Self {
        self.new_line = new_line;
        self
    }
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

static SETTINGS: RwLock<PrettyConfig> = RwLock::new(PrettyConfig::DEFAULT);

static OUTPUT: Mutex<Option<Box<dyn Write + Send>>> = Mutex::new(None);

fn update(f: impl FnOnce(&mut PrettyConfig)) {
    let mut settings = SETTINGS.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut settings);
}

/// Selects the line ending. Only `"\n"`, `"\r\n"` and `"\r"` are accepted;
/// any other token silently selects `"\n"`.
pub fn set_new_line(token: &str) {
    let new_line = NewLine::from_token(token);
    if new_line.as_str() != token {
        trace_event!(warn, requested = ?token, "unsupported line ending, using \\n");
    }
    update(|settings| settings.new_line = new_line);
    trace_event!(trace, ?new_line, "line ending changed");
}

pub fn new_line() -> NewLine {
    PrettyConfig::current().new_line
}

pub fn reset_new_line() {
    update(|settings| settings.new_line = NewLine::default());
}

/// Selects the token written after every rendered entry.
pub fn set_delimiter(delimiter: impl Into<Cow<'static, str>>) {
    let delimiter = delimiter.into();
    trace_event!(trace, delimiter = %delimiter, "delimiter changed");
    update(|settings| settings.delimiter = delimiter);
}

pub fn delimiter() -> Cow<'static, str> {
    PrettyConfig::current().delimiter
}

pub fn reset_delimiter() {
    update(|settings| settings.delimiter = PrettyConfig::DEFAULT.delimiter);
}

/// Redirects [`Errors::pretty_print`](crate::Errors::pretty_print) to `sink`.
pub fn set_output<W>(sink: W)
where
    W: Write + Send + 'static,
{
    *OUTPUT.lock().unwrap_or_else(PoisonError::into_inner) = Some(Box::new(sink));
    trace_event!(trace, "output sink replaced");
}

/// Restores standard output as the sink.
pub fn reset_output() {
    *OUTPUT.lock().unwrap_or_else(PoisonError::into_inner) = None;
    trace_event!(trace, "output sink reset to stdout");
}

/// Handle to whatever sink is configured at the time of each write.
pub fn output() -> Output {
    Output { _private: () }
}

/// Writer that forwards to the process-wide output sink.
///
/// Each call locks the sink for its whole duration, so one `write_all`
/// is never interleaved with another.
#[derive(Debug)]
pub struct Output {
    _private: (),
}

impl Output {
    fn with_sink<T>(&self, f: impl FnOnce(&mut dyn Write) -> io::Result<T>) -> io::Result<T> {
        let mut sink = OUTPUT.lock().unwrap_or_else(PoisonError::into_inner);
        match sink.as_mut() {
            Some(sink) => f(&mut **sink),
            None => f(&mut io::stdout().lock()),
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.with_sink(|sink| sink.write(buf))
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.with_sink(|sink| sink.write_all(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.with_sink(|sink| sink.flush())
    }
}
