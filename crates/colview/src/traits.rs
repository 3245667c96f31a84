//! Seams between the layout engine and its caller.
//!
//! The engine owns no text and no output surface. A [`ColumnSource`] hands
//! it the raw content of each column and a [`LineSink`] receives the fitted
//! result. Both are called synchronously from
//! [`Columns::format_line`](crate::Columns::format_line) and must not call
//! back into the same engine.
//!
//! Closures with matching signatures implement both traits:
//!
//! ```rust
//! use colview::{Align, ColumnId, ColumnInfo, Columns, LineBuffer};
//!
//! let mut cols = Columns::new();
//! cols.add_column(ColumnInfo::absolute(0, 6).truncate());
//!
//! let fields = vec!["columnar".to_string()];
//! let mut source = |id: ColumnId, fields: &Vec<String>, _max: usize| -> Vec<u8> {
//!     fields[id].clone().into_bytes()
//! };
//! let mut line = LineBuffer::new(6);
//! cols.format_line(&fields, 6, &mut source, &mut line);
//! assert_eq!(line.as_string(), "column");
//! ```

use super::types::{Align, ColumnId};

/// Produces the raw text of a column.
pub trait ColumnSource<C: ?Sized> {
    /// Returns the content of column `id` for `ctx`.
    ///
    /// `max_bytes` is the size the engine is prepared to handle; sources are
    /// expected to stay within it but the engine does not enforce it. The
    /// returned bytes should be UTF-8; invalid sequences are rendered as
    /// replacement glyphs.
    fn column_text(&mut self, id: ColumnId, ctx: &C, max_bytes: usize) -> Vec<u8>;
}

impl<C: ?Sized, F> ColumnSource<C> for F
where
    F: FnMut(ColumnId, &C, usize) -> Vec<u8>,
{
    fn column_text(&mut self, id: ColumnId, ctx: &C, max_bytes: usize) -> Vec<u8> {
        self(id, ctx, max_bytes)
    }
}

/// Receives fitted column text.
pub trait LineSink<C: ?Sized> {
    /// Places `text` for column `id` starting `offset` cells from the start
    /// of the line.
    ///
    /// Called exactly once per column, in sequence order. `text` is already
    /// cropped and padded to the column's allocation unless the column's
    /// cropping policy allows overflow.
    fn put_column(&mut self, ctx: &C, id: ColumnId, text: &str, offset: usize, align: Align);

    /// Marks the `width` separator cells starting at `offset` as blank.
    ///
    /// Called between two columns, after the first has been placed, whenever
    /// the engine has a non-zero gap. Sinks that compose overlapping output
    /// clear the cells here so an overflowing column does not fill the
    /// separator. The default does nothing.
    fn put_gap(&mut self, ctx: &C, offset: usize, width: usize) {
        let _ = (ctx, offset, width);
    }
}

impl<C: ?Sized, F> LineSink<C> for F
where
    F: FnMut(&C, ColumnId, &str, usize, Align),
{
    fn put_column(&mut self, ctx: &C, id: ColumnId, text: &str, offset: usize, align: Align) {
        self(ctx, id, text, offset, align)
    }
}
