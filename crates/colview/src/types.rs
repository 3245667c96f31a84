//! Column descriptors and the policies that drive layout.
//!
//! A [`ColumnInfo`] is immutable once handed to [`Columns`](crate::Columns).
//! Its three policy axes are closed enums so every combination is handled by
//! exhaustive matching:
//!
//! - [`Sizing`]: fixed width or sized from the available space
//! - [`Align`]: which side keeps content when cropping and receives padding
//! - [`Cropping`]: what happens when content is wider than its allocation

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Opaque column identifier handed back to content sources and sinks.
///
/// Uniqueness is not enforced.
pub type ColumnId = usize;

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Keep the start of the text, pad on the right.
    #[default]
    Left,
    /// Keep the end of the text, pad on the left.
    Right,
}

/// How a column determines its width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sizing {
    /// Exactly `text_width` cells, if the line has room.
    #[default]
    Absolute,
    /// Sized from content and the space left over by other columns.
    ///
    /// The left-most auto column absorbs whatever space remains; the others
    /// get their content's natural width.
    Auto,
}

/// How a column handles content wider than its allocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cropping {
    /// Never crop; short content is padded, long content overflows.
    #[default]
    None,
    /// Hard cut at the column edge.
    Truncate,
    /// Cut and mark the cut side with an ellipsis.
    Ellipsis,
}

/// Description of a single column in a line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Identifier passed to the content source and the sink.
    pub id: ColumnId,
    /// Width including any decoration the caller draws around the text.
    pub full_width: usize,
    /// Width available to the text itself; the budget of absolute columns.
    pub text_width: usize,
    /// Alignment of the text.
    #[serde(default)]
    pub align: Align,
    /// Width policy.
    #[serde(default)]
    pub sizing: Sizing,
    /// Overflow policy.
    #[serde(default)]
    pub cropping: Cropping,
}

impl ColumnInfo {
    /// Creates a fixed-width, left-aligned, uncropped column.
    pub fn absolute(id: ColumnId, width: usize) -> Self {
        ColumnInfo {
            id,
            full_width: width,
            text_width: width,
            align: Align::Left,
            sizing: Sizing::Absolute,
            cropping: Cropping::None,
        }
    }

    /// Creates an auto-sized, left-aligned, uncropped column.
    pub fn auto(id: ColumnId) -> Self {
        ColumnInfo {
            id,
            full_width: 0,
            text_width: 0,
            align: Align::Left,
            sizing: Sizing::Auto,
            cropping: Cropping::None,
        }
    }

    /// Sets both widths.
    pub fn widths(mut self, full_width: usize, text_width: usize) -> Self {
        self.full_width = full_width;
        self.text_width = text_width;
        self
    }

    /// Sets the text alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Shorthand for `.align(Align::Right)`.
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    /// Sets the overflow policy.
    pub fn cropping(mut self, cropping: Cropping) -> Self {
        self.cropping = cropping;
        self
    }

    /// Shorthand for `.cropping(Cropping::Truncate)`.
    pub fn truncate(self) -> Self {
        self.cropping(Cropping::Truncate)
    }

    /// Shorthand for `.cropping(Cropping::Ellipsis)`.
    pub fn ellipsis(self) -> Self {
        self.cropping(Cropping::Ellipsis)
    }

    /// Checks that the text fits inside the full width.
    pub fn validate(&self) -> Result<()> {
        if self.text_width > self.full_width {
            return Err(LayoutError::InvalidWidths {
                id: self.id,
                text_width: self.text_width,
                full_width: self.full_width,
            });
        }
        Ok(())
    }
}
