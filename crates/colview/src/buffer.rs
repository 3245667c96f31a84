//! A fixed-width line of display cells that composes column output.
//!
//! [`LineBuffer`] is the reference [`LineSink`]: it behaves like one row of
//! a terminal screen. Text written at an offset overwrites whatever was there,
//! so an overflowing column is cut off by the column placed after it.
//! Overwriting half of a wide glyph blanks the other half, and glyphs that
//! would cross the right edge are dropped.

use std::fmt;

use super::traits::LineSink;
use super::types::{Align, ColumnId};
use super::width::char_width;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Cell {
    Blank,
    /// A glyph plus any zero-width codepoints attached to it.
    Glyph { text: String, width: usize },
    /// Right half of a wide glyph.
    Tail,
}

/// One line of `width` display cells, initially blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineBuffer {
    cells: Vec<Cell>,
}

impl LineBuffer {
    /// Creates a blank line `width` cells wide.
    pub fn new(width: usize) -> Self {
        LineBuffer {
            cells: vec![Cell::Blank; width],
        }
    }

    /// Width of the line in cells.
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Blanks every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Blank);
    }

    /// Blanks the cell at `at` and whichever half of a wide glyph it belongs to.
    fn blank(&mut self, at: usize) {
        match self.cells[at] {
            Cell::Blank => {}
            Cell::Tail => {
                let mut head = at;
                while head > 0 && self.cells[head] == Cell::Tail {
                    head -= 1;
                }
                for cell in &mut self.cells[head..=at] {
                    *cell = Cell::Blank;
                }
            }
            Cell::Glyph { width, .. } => {
                let end = (at + width).min(self.cells.len());
                for cell in &mut self.cells[at..end] {
                    *cell = Cell::Blank;
                }
            }
        }
    }

    /// Blanks `len` cells starting at `offset`, clipped to the line.
    pub fn blank_range(&mut self, offset: usize, len: usize) {
        let end = offset.saturating_add(len).min(self.cells.len());
        for at in offset..end {
            self.blank(at);
        }
    }

    /// Writes `text` starting at cell `offset`.
    ///
    /// Returns the offset just past the last glyph written.
    pub fn write_at(&mut self, offset: usize, text: &str) -> usize {
        let mut pos = offset;
        let mut last: Option<usize> = None;

        for c in text.chars() {
            let w = char_width(c);
            if w == 0 {
                if let Some(Cell::Glyph { text: glyph, .. }) = last.map(|i| &mut self.cells[i]) {
                    glyph.push(c);
                }
                continue;
            }
            if pos + w > self.cells.len() {
                break;
            }
            for at in pos..pos + w {
                self.blank(at);
            }
            self.cells[pos] = Cell::Glyph {
                text: c.to_string(),
                width: w,
            };
            for cell in &mut self.cells[pos + 1..pos + w] {
                *cell = Cell::Tail;
            }
            last = Some(pos);
            pos += w;
        }
        pos
    }

    /// Renders the line, blanks as spaces, exactly `width` cells wide.
    pub fn as_string(&self) -> String {
        let mut out = String::with_capacity(self.cells.len());
        for cell in &self.cells {
            match cell {
                Cell::Blank => out.push(' '),
                Cell::Glyph { text, .. } => out.push_str(text),
                Cell::Tail => {}
            }
        }
        out
    }

    /// Renders the line without trailing blanks.
    pub fn trimmed(&self) -> String {
        let mut out = self.as_string();
        out.truncate(out.trim_end_matches(' ').len());
        out
    }
}

impl fmt::Display for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl<C: ?Sized> LineSink<C> for LineBuffer {
    fn put_column(&mut self, _ctx: &C, _id: ColumnId, text: &str, offset: usize, _align: Align) {
        self.write_at(offset, text);
    }

    fn put_gap(&mut self, _ctx: &C, offset: usize, width: usize) {
        self.blank_range(offset, width);
    }
}
