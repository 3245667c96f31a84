//! # colview - Unicode-aware column layout for terminal lines
//!
//! `colview` renders one line of a column view at a time: a fixed line width
//! is split between an ordered set of columns, each column's text is fitted
//! into its share, and the pieces are handed to a sink that composes the
//! output. Widths are measured in display cells, so CJK text, combining marks
//! and malformed bytes all line up.
//!
//! ## Core Concepts
//!
//! - [`ColumnInfo`]: one column's id, widths and policies
//! - [`Sizing`]: fixed width, or sized from content and leftover space
//! - [`Align`]: which end of the text survives cropping
//! - [`Cropping`]: overflow, hard cut, or cut with an ellipsis
//! - [`Columns`]: the engine; [`Columns::format_line`] renders a line
//! - [`ColumnSource`] / [`LineSink`]: where text comes from and goes to
//! - [`LineBuffer`]: a ready-made sink holding one line of cells
//!
//! ## Quick Start
//!
//! ```rust
//! use colview::{ColumnId, ColumnInfo, Columns, LineBuffer};
//!
//! let mut cols = Columns::new();
//! cols.add_column(ColumnInfo::auto(0).ellipsis());
//! cols.add_column(ColumnInfo::absolute(1, 6).right());
//!
//! let row = ["a-rather-long-file-name.txt", "4.2K"];
//! let mut source = |id: ColumnId, row: &[&str; 2], _max: usize| -> Vec<u8> {
//!     row[id].as_bytes().to_vec()
//! };
//! let mut line = LineBuffer::new(20);
//! cols.format_line(&row, 20, &mut source, &mut line);
//!
//! assert_eq!(line.as_string(), "a-rather-lo...  4.2K");
//! ```
//!
//! ## Width Resolution
//!
//! Columns are sized from the right: trailing columns claim their width
//! first and the left-most auto column absorbs what is left. See
//! [`resolve_widths`] for the exact rules.
//!
//! ## Layout Files
//!
//! [`LayoutConfig`] loads layouts from YAML, JSON or the compact
//! `-{name}...,7{size}` format and builds a [`Columns`] from them.

pub mod buffer;
pub mod columns;
pub mod config;
pub mod crop;
pub mod error;
pub mod resolve;
pub mod traits;
pub mod types;
pub mod width;

pub use buffer::LineBuffer;
pub use columns::{Columns, DEFAULT_ELLIPSIS, MAX_COLUMN_BYTES};
pub use config::{parse_column_format, ColumnConfig, LayoutConfig};
pub use crop::crop_column;
pub use error::{LayoutError, Result};
pub use resolve::{resolve_widths, ResolvedColumn, ResolvedLayout};
pub use traits::{ColumnSource, LineSink};
pub use types::{Align, ColumnId, ColumnInfo, Cropping, Sizing};
pub use width::{
    byte_offset_for_prefix_width, byte_offset_for_suffix_width, display_width, pad_left,
    pad_right,
};
