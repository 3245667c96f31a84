//! The line layout engine.
//!
//! [`Columns`] holds an ordered list of [`ColumnInfo`] and renders one line at
//! a time. Each call to [`Columns::format_line`] is independent: widths are
//! recomputed from the line width passed in, so the same engine can serve a
//! resizing view.

use super::crop::crop_column;
use super::error::Result;
use super::resolve::{resolve_widths, ResolvedLayout};
use super::traits::{ColumnSource, LineSink};
use super::types::ColumnInfo;
use super::width::display_width;

/// Largest column content, in bytes, the engine asks sources for.
pub const MAX_COLUMN_BYTES: usize = 1024;

/// Marker drawn on the cut side of [`Cropping::Ellipsis`](crate::Cropping::Ellipsis) columns.
pub const DEFAULT_ELLIPSIS: &str = "...";

/// An ordered set of columns that can be rendered into lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Columns {
    columns: Vec<ColumnInfo>,
    gap: usize,
    ellipsis: String,
}

impl Default for Columns {
    fn default() -> Self {
        Columns {
            columns: Vec::new(),
            gap: 0,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }
}

impl Columns {
    /// Creates an engine with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of blank cells reserved between adjacent columns.
    pub fn with_gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    /// Sets the ellipsis marker.
    pub fn with_ellipsis(mut self, marker: impl Into<String>) -> Self {
        self.ellipsis = marker.into();
        self
    }

    /// Separator width between adjacent columns.
    pub fn gap(&self) -> usize {
        self.gap
    }

    /// The ellipsis marker.
    pub fn ellipsis(&self) -> &str {
        &self.ellipsis
    }

    /// Appends a column. Duplicate ids are allowed.
    pub fn add_column(&mut self, info: ColumnInfo) {
        self.columns.push(info);
    }

    /// Appends a column after checking its widths are consistent.
    pub fn try_add_column(&mut self, info: ColumnInfo) -> Result<()> {
        info.validate()?;
        self.add_column(info);
        Ok(())
    }

    /// Removes all columns.
    pub fn clear(&mut self) {
        self.columns.clear();
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The columns in render order.
    pub fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    /// Iterates over the columns in render order.
    pub fn iter(&self) -> std::slice::Iter<'_, ColumnInfo> {
        self.columns.iter()
    }

    /// Resolves widths given each column's natural content width.
    pub fn resolve(&self, natural: &[usize], total_width: usize) -> ResolvedLayout {
        resolve_widths(&self.columns, natural, total_width, self.gap)
    }

    /// Renders one line of `total_width` cells.
    ///
    /// Every column's text is requested from `source` once, the widths are
    /// resolved, and each column is cropped and handed to `sink` in order.
    /// With a non-zero gap, the separator after each column but the last is
    /// passed to [`LineSink::put_gap`] before the next column is placed.
    /// Returns the layout that was used.
    pub fn format_line<C, S, K>(
        &self,
        ctx: &C,
        total_width: usize,
        source: &mut S,
        sink: &mut K,
    ) -> ResolvedLayout
    where
        C: ?Sized,
        S: ColumnSource<C> + ?Sized,
        K: LineSink<C> + ?Sized,
    {
        let texts: Vec<String> = self
            .columns
            .iter()
            .map(|col| {
                let raw = source.column_text(col.id, ctx, MAX_COLUMN_BYTES);
                String::from_utf8(raw)
                    .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
            })
            .collect();
        let natural: Vec<usize> = texts.iter().map(display_width).collect();

        let layout = self.resolve(&natural, total_width);
        tracing::debug!(
            total_width,
            widths = ?layout.widths(),
            starts = ?layout.starts(),
            "resolved column layout"
        );

        for ((col, text), resolved) in self.columns.iter().zip(&texts).zip(&layout.columns) {
            let fitted = crop_column(text, resolved.width, col.align, col.cropping, &self.ellipsis);
            tracing::trace!(
                id = col.id,
                width = resolved.width,
                start = resolved.start,
                natural = natural[resolved.index],
                "column"
            );
            sink.put_column(ctx, col.id, &fitted, resolved.start, col.align);
            if self.gap > 0 && resolved.index + 1 < layout.len() {
                sink.put_gap(ctx, resolved.start + resolved.width, self.gap);
            }
        }

        layout
    }
}

impl Extend<ColumnInfo> for Columns {
    fn extend<T: IntoIterator<Item = ColumnInfo>>(&mut self, iter: T) {
        self.columns.extend(iter);
    }
}

impl FromIterator<ColumnInfo> for Columns {
    fn from_iter<T: IntoIterator<Item = ColumnInfo>>(iter: T) -> Self {
        let mut columns = Columns::new();
        columns.extend(iter);
        columns
    }
}

impl<'a> IntoIterator for &'a Columns {
    type Item = &'a ColumnInfo;
    type IntoIter = std::slice::Iter<'a, ColumnInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
