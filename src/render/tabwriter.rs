//! Elastic tab-stop alignment.
//!
//! Text is cut into lines on the configured line ending and each line into
//! cells terminated by `\t`, or handed over already cut through
//! [`TabWriter::align_cells`]. The last cell of a line is never padded. A run
//! of consecutive lines that all own a terminated cell at column `c` forms a
//! column block, and every cell of that block is padded to the widest one.

/// Smallest width a column can shrink to, padding included.
pub const MIN_WIDTH: usize = 2;
/// Spaces appended after the widest cell of a column.
pub const PADDING: usize = 1;
/// Character used for padding.
pub const PAD_CHAR: char = ' ';

/// Aligner over terminated cells.
#[derive(Debug, Clone, Copy)]
pub struct TabWriter<'a> {
    new_line: &'a str,
    min_width: usize,
    padding: usize,
    pad_char: char,
}

impl<'a> TabWriter<'a> {
    pub fn new(new_line: &'a str) -> Self {
        Self { new_line, min_width: MIN_WIDTH, padding: PADDING, pad_char: PAD_CHAR }
    }

    /// Replaces every cell terminator in `text` with column padding.
    pub fn align(&self, text: &str) -> String {
        if !text.contains('\t') {
            return text.to_string();
        }

        let lines: Vec<Vec<&str>> =
            text.split(self.new_line).map(|line| line.split('\t').collect()).collect();
        self.align_cells(&lines)
    }

    /// Aligns lines that are already cut into cells. Every cell but the last
    /// of a line counts as terminated; cell text is copied verbatim.
    pub fn align_cells<S: AsRef<str>>(&self, lines: &[Vec<S>]) -> String {
        let capacity = lines.iter().flatten().map(|cell| cell.as_ref().len() + 1).sum();
        let mut pass =
            Pass { writer: self, lines, widths: Vec::new(), out: String::with_capacity(capacity) };
        pass.format(0, lines.len());
        pass.out
    }
}

struct Pass<'w, 'a, 'l, S> {
    writer: &'w TabWriter<'a>,
    lines: &'l [Vec<S>],
    widths: Vec<usize>,
    out: String,
}

impl<S: AsRef<str>> Pass<'_, '_, '_, S> {
    fn format(&mut self, mut line0: usize, line1: usize) {
        let column = self.widths.len();
        let mut this = line0;

        while this < line1 {
            if column >= terminated(&self.lines[this]) {
                this += 1;
                continue;
            }

            self.write_lines(line0, this);
            line0 = this;

            let mut width = self.writer.min_width;
            while this < line1 && column < terminated(&self.lines[this]) {
                let cell = cell_width(self.lines[this][column].as_ref());
                width = width.max(cell + self.writer.padding);
                this += 1;
            }

            self.widths.push(width);
            self.format(line0, this);
            self.widths.pop();
            line0 = this;
        }

        self.write_lines(line0, line1);
    }

    fn write_lines(&mut self, line0: usize, line1: usize) {
        for index in line0..line1 {
            let line = &self.lines[index];
            for (column, cell) in line.iter().enumerate() {
                let cell = cell.as_ref();
                self.out.push_str(cell);
                if let Some(&width) = self.widths.get(column) {
                    if column + 1 < line.len() {
                        let fill = width.saturating_sub(cell_width(cell));
                        self.out.extend(core::iter::repeat(self.writer.pad_char).take(fill));
                    }
                }
            }
            if index + 1 < self.lines.len() {
                self.out.push_str(self.writer.new_line);
            }
        }
    }
}

/// Number of terminated cells on a line.
#[inline]
fn terminated<S>(line: &[S]) -> usize {
    line.len().saturating_sub(1)
}

#[inline]
fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}
