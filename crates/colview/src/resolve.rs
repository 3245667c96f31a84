//! Width resolution for a line of columns.
//!
//! Trailing columns claim their width first so detail fields at the end of a
//! line stay intact, while the left-most auto column (usually the name or
//! label) absorbs whatever space is left. Resolution runs in two phases:
//!
//! 1. Walk the columns from last to first. Absolute columns claim their
//!    `text_width`, auto columns claim their natural (content) width. Each
//!    claim is capped by what remains. The left-most auto column is skipped.
//! 2. Give the left-most auto column everything still unclaimed.
//!
//! Separator cells between columns are reserved before either phase. All
//! arithmetic saturates, so resolution never fails.

use super::types::{ColumnInfo, Sizing};

/// Width and position of one column for a single render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedColumn {
    /// Index of the column in its sequence.
    pub index: usize,
    /// Allocated width in display cells.
    pub width: usize,
    /// Offset of the column's first cell from the start of the line.
    pub start: usize,
}

/// Resolved widths for all columns of a line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedLayout {
    /// One entry per column, in sequence order.
    pub columns: Vec<ResolvedColumn>,
    /// Separator width used between consecutive columns.
    pub gap: usize,
}

impl ResolvedLayout {
    /// Get a column by index.
    pub fn get(&self, index: usize) -> Option<&ResolvedColumn> {
        self.columns.get(index)
    }

    /// Allocated widths in sequence order.
    pub fn widths(&self) -> Vec<usize> {
        self.columns.iter().map(|c| c.width).collect()
    }

    /// Start offsets in sequence order.
    pub fn starts(&self) -> Vec<usize> {
        self.columns.iter().map(|c| c.start).collect()
    }

    /// Total cells used, separators included.
    pub fn total(&self) -> usize {
        let widths: usize = self.columns.iter().map(|c| c.width).sum();
        widths + self.gap * self.columns.len().saturating_sub(1)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Index of the column that receives the leftover space, if any.
pub fn fill_column(columns: &[ColumnInfo]) -> Option<usize> {
    columns.iter().position(|c| c.sizing == Sizing::Auto)
}

/// Resolve widths and start offsets for `columns`.
///
/// `natural` holds the display width of each column's content; only auto
/// columns read it. Missing entries count as zero.
///
/// `gap` cells are reserved between each pair of adjacent columns. Engines
/// default to a gap of 0, so two absolute columns of 10 fill a 20-cell line
/// exactly; pass 1 for a one-cell separator.
pub fn resolve_widths(
    columns: &[ColumnInfo],
    natural: &[usize],
    total_width: usize,
    gap: usize,
) -> ResolvedLayout {
    if columns.is_empty() {
        return ResolvedLayout {
            columns: Vec::new(),
            gap,
        };
    }

    let separators = gap.saturating_mul(columns.len() - 1);
    let mut remaining = total_width.saturating_sub(separators);
    let fill = fill_column(columns);
    let mut widths = vec![0; columns.len()];

    // Phase 1: trailing columns claim what they need.
    for (i, col) in columns.iter().enumerate().rev() {
        if fill == Some(i) {
            continue;
        }
        let wanted = match col.sizing {
            Sizing::Absolute => col.text_width,
            Sizing::Auto => natural.get(i).copied().unwrap_or(0),
        };
        let width = wanted.min(remaining);
        remaining -= width;
        widths[i] = width;
    }

    // Phase 2: the leading auto column takes the rest.
    if let Some(i) = fill {
        widths[i] = remaining;
    }

    let mut start = 0;
    let columns = widths
        .into_iter()
        .enumerate()
        .map(|(index, width)| {
            let resolved = ResolvedColumn {
                index,
                width,
                start,
            };
            start += width + gap;
            resolved
        })
        .collect();

    ResolvedLayout { columns, gap }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::types::{Align, ColumnInfo, Cropping};

    #[test]
    fn resolve_empty() {
        let resolved = resolve_widths(&[], &[], 80, 1);
        assert!(resolved.is_empty());
        assert_eq!(resolved.total(), 0);
    }

    #[test]
    fn resolve_absolute_columns() {
        let cols = [ColumnInfo::absolute(0, 10), ColumnInfo::absolute(1, 10)];
        let resolved = resolve_widths(&cols, &[], 20, 0);
        assert_eq!(resolved.widths(), vec![10, 10]);
        assert_eq!(resolved.starts(), vec![0, 10]);
    }

    #[test]
    fn resolve_absolute_uses_text_width() {
        let cols = [ColumnInfo::absolute(0, 10).widths(12, 6)];
        let resolved = resolve_widths(&cols, &[], 80, 0);
        assert_eq!(resolved.widths(), vec![6]);
    }

    #[test]
    fn resolve_trailing_columns_win_when_tight() {
        let cols = [ColumnInfo::absolute(0, 10), ColumnInfo::absolute(1, 10)];
        let resolved = resolve_widths(&cols, &[], 15, 0);
        assert_eq!(resolved.widths(), vec![5, 10]);
        assert_eq!(resolved.starts(), vec![0, 5]);
    }

    #[test]
    fn resolve_reserves_separators() {
        let cols = [ColumnInfo::absolute(0, 10), ColumnInfo::absolute(1, 10)];
        let resolved = resolve_widths(&cols, &[], 20, 1);
        assert_eq!(resolved.widths(), vec![9, 10]);
        assert_eq!(resolved.starts(), vec![0, 10]);
        assert_eq!(resolved.total(), 20);
    }

    #[test]
    fn resolve_single_auto_fills_line() {
        let cols = [ColumnInfo::auto(0)];
        let resolved = resolve_widths(&cols, &[33], 40, 0);
        assert_eq!(resolved.widths(), vec![40]);
    }

    #[test]
    fn resolve_leading_auto_gets_leftover() {
        let cols = [
            ColumnInfo::auto(0).widths(10, 10),
            ColumnInfo::auto(1).widths(4, 4).align(Align::Right),
        ];
        let resolved = resolve_widths(&cols, &[33, 33], 38, 1);
        assert_eq!(resolved.widths(), vec![4, 33]);
        assert_eq!(resolved.starts(), vec![0, 5]);

        let resolved = resolve_widths(&cols, &[33, 33], 38, 0);
        assert_eq!(resolved.widths(), vec![5, 33]);
        assert_eq!(resolved.starts(), vec![0, 5]);
    }

    #[test]
    fn resolve_trailing_auto_capped_by_remaining() {
        let cols = [ColumnInfo::auto(0), ColumnInfo::auto(1)];
        let resolved = resolve_widths(&cols, &[5, 50], 20, 0);
        assert_eq!(resolved.widths(), vec![0, 20]);
    }

    #[test]
    fn resolve_leading_absolute_before_fill_column() {
        let cols = [
            ColumnInfo::absolute(0, 4),
            ColumnInfo::auto(1).cropping(Cropping::Ellipsis),
            ColumnInfo::absolute(2, 6),
        ];
        let resolved = resolve_widths(&cols, &[0, 100, 0], 30, 1);
        assert_eq!(resolved.widths(), vec![4, 18, 6]);
        assert_eq!(resolved.starts(), vec![0, 5, 24]);
        assert_eq!(fill_column(&cols), Some(1));
    }

    #[test]
    fn resolve_zero_width_clamps_everything() {
        let cols = [ColumnInfo::absolute(0, 10), ColumnInfo::auto(1)];
        let resolved = resolve_widths(&cols, &[0, 7], 0, 0);
        assert_eq!(resolved.widths(), vec![0, 0]);
    }

    #[test]
    fn resolve_missing_natural_counts_as_zero() {
        let cols = [ColumnInfo::absolute(0, 3), ColumnInfo::auto(1), ColumnInfo::auto(2)];
        let resolved = resolve_widths(&cols, &[], 10, 0);
        assert_eq!(resolved.widths(), vec![3, 7, 0]);
    }

    fn column_strategy() -> impl Strategy<Value = (ColumnInfo, usize)> {
        (0usize..30, any::<bool>(), 0usize..60).prop_map(|(width, auto, natural)| {
            let col = if auto {
                ColumnInfo::auto(0)
            } else {
                ColumnInfo::absolute(0, width)
            };
            (col, natural)
        })
    }

    proptest! {
        #[test]
        fn allocation_never_exceeds_total(
            cases in prop::collection::vec(column_strategy(), 0..8),
            total in 0usize..120,
            gap in 0usize..3,
        ) {
            let (cols, natural): (Vec<_>, Vec<_>) = cases.into_iter().unzip();
            let resolved = resolve_widths(&cols, &natural, total, gap);
            prop_assert_eq!(resolved.len(), cols.len());
            let separators = gap * cols.len().saturating_sub(1);
            if total >= separators {
                prop_assert!(resolved.total() <= total);
            }
        }

        #[test]
        fn starts_follow_widths(
            cases in prop::collection::vec(column_strategy(), 1..8),
            total in 0usize..120,
            gap in 0usize..3,
        ) {
            let (cols, natural): (Vec<_>, Vec<_>) = cases.into_iter().unzip();
            let resolved = resolve_widths(&cols, &natural, total, gap);
            for pair in resolved.columns.windows(2) {
                prop_assert_eq!(pair[1].start, pair[0].start + pair[0].width + gap);
            }
        }
    }
}
