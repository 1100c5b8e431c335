//! Recursive pretty printer for [`Value`] trees.
//!
//! A printer accumulates its output as lines of cells, one cell per
//! indentation level plus one after each `name:` label, then runs them
//! through the [`TabWriter`] so labels of one structural level line up.
//! Text written into a cell is never reinterpreted, so a delimiter may
//! contain tabs.
//! Map values and record fields are rendered by a child printer and spliced
//! into the parent after the child has aligned itself.
//!
//! # Examples
//!
//! ```
//! use errs::render::render_values;
//! use errs::types::Value;
//! use errs::PrettyConfig;
//!
//! let config = PrettyConfig::default();
//! assert_eq!(render_values(&[], &config), "Errors[]");
//! assert_eq!(render_values(&[Value::Nil], &config), "Errors[\n  nil,\n]");
//! ```

pub mod tabwriter;

use crate::config::PrettyConfig;
use crate::types::{AnySlot, Value};

pub use tabwriter::TabWriter;

/// Opening token of the root frame.
pub const ROOT_OPEN: &str = "Errors[";
/// Closing token of the root frame.
pub const ROOT_CLOSE: &str = "]";

/// Renders `values` as the root `Errors[...]` frame.
pub fn render_values(values: &[Value], config: &PrettyConfig) -> String {
    let mut printer = Printer::new(0, config);
    printer.push(ROOT_OPEN);
    if values.is_empty() {
        printer.push(ROOT_CLOSE);
        return printer.finish();
    }

    printer.depth += 1;
    for value in values {
        printer.new_line();
        printer.write_value(value, true);
        printer.delimiter();
    }
    printer.depth -= 1;
    printer.new_line();
    printer.push(ROOT_CLOSE);

    let text = printer.finish();
    trace_event!(debug, entries = values.len(), bytes = text.len(), "rendered error tree");
    text
}

/// Renders a single value with no root frame, starting at depth 0.
pub fn render_value(value: &Value, config: &PrettyConfig) -> String {
    let mut printer = Printer::new(0, config);
    printer.write_value(value, false);
    printer.finish()
}

/// Render state for one frame of output.
pub(crate) struct Printer<'c> {
    lines: Vec<Vec<String>>,
    cells: Vec<String>,
    cell: String,
    depth: usize,
    config: &'c PrettyConfig,
}

impl<'c> Printer<'c> {
    pub(crate) fn new(depth: usize, config: &'c PrettyConfig) -> Self {
        Self { lines: Vec::new(), cells: Vec::new(), cell: String::new(), depth, config }
    }

    /// Aligns the buffered lines and returns the text.
    pub(crate) fn finish(mut self) -> String {
        self.break_line();
        TabWriter::new(self.config.new_line.as_str()).align_cells(&self.lines)
    }

    /// Appends to the open cell. Line endings inside `text` start new lines.
    fn push(&mut self, text: &str) {
        let mut parts = text.split(self.config.new_line.as_str());
        if let Some(first) = parts.next() {
            self.cell.push_str(first);
        }
        for part in parts {
            self.break_line();
            self.cell.push_str(part);
        }
    }

    /// Terminates the open cell, making it part of a column.
    #[inline]
    fn end_cell(&mut self) {
        self.cells.push(std::mem::take(&mut self.cell));
    }

    fn break_line(&mut self) {
        self.end_cell();
        self.lines.push(std::mem::take(&mut self.cells));
    }

    #[inline]
    fn new_line(&mut self) {
        self.break_line();
    }

    #[inline]
    fn delimiter(&mut self) {
        let config = self.config;
        self.push(&config.delimiter);
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.end_cell();
        }
    }

    /// Renders `value` in a fresh printer at the current depth.
    fn nested(&self, value: &Value) -> String {
        let mut child = Printer::new(self.depth, self.config);
        child.write_value(value, false);
        child.finish()
    }

    fn close_frame(&mut self) {
        self.depth -= 1;
        self.indent();
        self.push("}");
    }

    pub(crate) fn write_value(&mut self, value: &Value, enable_indent: bool) {
        if enable_indent {
            self.indent();
        }

        match value {
            Value::Nil => self.push("nil"),
            Value::Bool(b) => self.push(if *b { "true" } else { "false" }),
            Value::Int(i) => self.push(&i.to_string()),
            Value::Uint(u) => self.push(&format!("{u:#x}")),
            Value::Float(f) => self.push(&format!("{f:?}")),
            Value::Complex { re, im } => {
                let sign = if im.is_sign_negative() || im.is_nan() { "" } else { "+" };
                self.push(&format!("({re:?}{sign}{im:?}i)"));
            },
            Value::Str(s) => self.push(&format!("{s:?}")),
            Value::Map { type_name, entries } => {
                self.push(type_name);
                self.push("{");
                let Some(entries) = entries else {
                    self.push("}");
                    return;
                };
                self.new_line();
                self.depth += 1;
                for (key, value) in sorted_entries(entries, self.config) {
                    self.write_value(key, true);
                    self.push(":");
                    let rendered = self.nested(value);
                    self.push(&rendered);
                    self.delimiter();
                    self.new_line();
                }
                self.close_frame();
            },
            Value::Record { type_name, fields } => {
                self.push(type_name);
                if fields.is_empty() {
                    self.push("{}");
                    return;
                }
                self.push("{");
                self.new_line();
                self.depth += 1;
                for (name, value) in fields {
                    self.indent();
                    self.push(name);
                    self.push(":");
                    self.end_cell();
                    let rendered = self.nested(value);
                    self.push(&rendered);
                    self.delimiter();
                    self.new_line();
                }
                self.close_frame();
            },
            Value::Any { type_name, slot } => match slot {
                AnySlot::Empty => self.push("nil"),
                AnySlot::Held(inner) => self.write_value(inner, false),
                AnySlot::Malformed => {
                    self.push(type_name);
                    self.push("nil");
                },
            },
            Value::Array { type_name, items } => self.write_sequence(type_name, Some(items)),
            Value::Slice { type_name, items } => self.write_sequence(type_name, items.as_ref()),
            Value::Ref { type_name, target } => match target {
                Some(target) => {
                    self.push("&");
                    self.write_value(target, false);
                },
                None => self.push(&format!("(&{type_name})(nil)")),
            },
            Value::Chan { type_name, address } => self.push(&format!("{type_name}({address:#x})")),
            Value::Func { signature } => {
                self.push(signature);
                self.push(" {...}");
            },
        }
    }

    fn write_sequence(&mut self, type_name: &str, items: Option<&Vec<Value>>) {
        self.push(type_name);
        let Some(items) = items else {
            self.push("(nil)");
            return;
        };
        if items.is_empty() {
            self.push("{}");
            return;
        }
        self.push("{");
        self.new_line();
        self.depth += 1;
        for item in items {
            self.indent();
            self.write_value(item, false);
            self.delimiter();
            self.new_line();
        }
        self.close_frame();
    }
}

/// Orders map entries by the rendered text of their keys.
fn sorted_entries<'v>(
    entries: &'v [(Value, Value)],
    config: &PrettyConfig,
) -> Vec<&'v (Value, Value)> {
    let mut keyed: Vec<(String, &(Value, Value))> =
        entries.iter().map(|entry| (render_value(&entry.0, config), entry)).collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, entry)| entry).collect()
}
