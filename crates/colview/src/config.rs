//! Layout definitions loaded from text.
//!
//! Layouts name their columns; the caller maps names to [`ColumnId`]s when
//! building the engine. Two formats are supported.
//!
//! ## YAML / JSON
//!
//! ```yaml
//! gap: 1
//! ellipsis: "…"
//! columns:
//!   - name: name
//!     cropping: ellipsis
//!   - name: size
//!     width: 7
//!     align: right
//! ```
//!
//! A column without `width` is auto-sized.
//!
//! ## Compact format
//!
//! A comma-separated list of `[-][width[.text_width]]{name}[..|...]`:
//!
//! | Part | Meaning |
//! |------|---------|
//! | `-` | left-align (default is right) |
//! | `width` | absolute width; omitted means auto |
//! | `.text_width` | text budget inside `width` |
//! | `..` | truncate |
//! | `...` | ellipsis |
//!
//! ```rust
//! use colview::{Align, Cropping, LayoutConfig, Sizing};
//!
//! let layout = LayoutConfig::parse_format("-{name}...,7{size}").unwrap();
//! let columns = layout.build(|name| match name {
//!     "name" => Some(0),
//!     "size" => Some(1),
//!     _ => None,
//! }).unwrap();
//!
//! let name = &columns.columns()[0];
//! assert_eq!((name.sizing, name.align, name.cropping), (Sizing::Auto, Align::Left, Cropping::Ellipsis));
//! assert_eq!(columns.columns()[1].text_width, 7);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::columns::{Columns, DEFAULT_ELLIPSIS};
use super::error::{LayoutError, Result};
use super::types::{Align, ColumnId, ColumnInfo, Cropping, Sizing};

/// One named column in a layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Name resolved to a [`ColumnId`] when the layout is built.
    pub name: String,
    /// Absolute width; `None` makes the column auto-sized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    /// Text budget inside `width`; defaults to `width`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_width: Option<usize>,
    /// Text alignment.
    #[serde(default)]
    pub align: Align,
    /// Overflow policy.
    #[serde(default)]
    pub cropping: Cropping,
}

impl ColumnConfig {
    /// Creates an auto-sized, left-aligned, uncropped column.
    pub fn new(name: impl Into<String>) -> Self {
        ColumnConfig {
            name: name.into(),
            width: None,
            text_width: None,
            align: Align::Left,
            cropping: Cropping::None,
        }
    }

    /// Converts to a descriptor with the given id.
    pub fn to_info(&self, id: ColumnId) -> ColumnInfo {
        let (sizing, full_width) = match self.width {
            Some(w) => (Sizing::Absolute, w),
            None => (Sizing::Auto, 0),
        };
        ColumnInfo {
            id,
            full_width,
            text_width: self.text_width.unwrap_or(full_width),
            align: self.align,
            sizing,
            cropping: self.cropping,
        }
    }
}

fn default_ellipsis() -> String {
    DEFAULT_ELLIPSIS.to_string()
}

/// A full line layout: columns plus engine settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Blank cells between adjacent columns.
    #[serde(default)]
    pub gap: usize,
    /// Ellipsis marker.
    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,
    /// Columns in render order.
    #[serde(default)]
    pub columns: Vec<ColumnConfig>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            gap: 0,
            ellipsis: default_ellipsis(),
            columns: Vec::new(),
        }
    }
}

impl LayoutConfig {
    /// Parses a YAML layout.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a JSON layout.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a compact column format string.
    pub fn parse_format(format: &str) -> Result<Self> {
        Ok(LayoutConfig {
            columns: parse_column_format(format)?,
            ..Default::default()
        })
    }

    /// Loads a layout file, choosing the parser by extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml,
            Some("json") => Self::from_json,
            _ => return Err(LayoutError::UnsupportedFile(path.to_path_buf())),
        };
        let content = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&content)
    }

    /// Builds an engine, mapping each column name through `resolve`.
    pub fn build<F>(&self, mut resolve: F) -> Result<Columns>
    where
        F: FnMut(&str) -> Option<ColumnId>,
    {
        let mut columns = Columns::new()
            .with_gap(self.gap)
            .with_ellipsis(self.ellipsis.clone());
        for col in &self.columns {
            let id = resolve(col.name.as_str())
                .ok_or_else(|| LayoutError::UnknownColumn(col.name.clone()))?;
            columns.try_add_column(col.to_info(id))?;
        }
        tracing::debug!(columns = columns.len(), gap = self.gap, "built layout");
        Ok(columns)
    }
}

/// Parses a compact column format string into column configs.
///
/// See the [module docs](self) for the syntax. Whitespace around entries is
/// ignored; empty entries are rejected.
pub fn parse_column_format(format: &str) -> Result<Vec<ColumnConfig>> {
    let mut columns = Vec::new();
    let mut offset = 0;
    for entry in format.split(',') {
        let leading = entry.len() - entry.trim_start().len();
        columns.push(parse_entry(entry.trim(), offset + leading)?);
        offset += entry.len() + 1;
    }
    Ok(columns)
}

fn parse_entry(entry: &str, base: usize) -> Result<ColumnConfig> {
    if entry.is_empty() {
        return Err(LayoutError::format(base, "empty column entry"));
    }

    let mut rest = entry;
    let align = match rest.strip_prefix('-') {
        Some(tail) => {
            rest = tail;
            Align::Left
        }
        None => Align::Right,
    };

    let pos = |rest: &str| base + entry.len() - rest.len();
    let (width, tail) = take_number(rest, pos(rest))?;
    rest = tail;
    let text_width = match rest.strip_prefix('.') {
        Some(tail) if width.is_some() => {
            let (tw, after) = take_number(tail, pos(tail))?;
            if tw.is_none() {
                return Err(LayoutError::format(pos(tail), "expected text width after '.'"));
            }
            rest = after;
            tw
        }
        _ => None,
    };

    let Some(inner) = rest.strip_prefix('{') else {
        return Err(LayoutError::format(pos(rest), "expected '{'"));
    };
    let Some(close) = inner.find('}') else {
        return Err(LayoutError::format(pos(inner), "missing '}'"));
    };
    let name = &inner[..close];
    if name.is_empty() {
        return Err(LayoutError::format(pos(inner), "empty column name"));
    }
    let suffix = &inner[close + 1..];

    let cropping = match suffix {
        "" => Cropping::None,
        ".." => Cropping::Truncate,
        "..." => Cropping::Ellipsis,
        other => {
            return Err(LayoutError::format(
                pos(suffix),
                format!("unexpected '{}' after column name", other),
            ))
        }
    };

    Ok(ColumnConfig {
        name: name.to_string(),
        width,
        text_width,
        align,
        cropping,
    })
}

/// Splits a leading decimal number off `s`, which starts at `offset`.
fn take_number(s: &str, offset: usize) -> Result<(Option<usize>, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return Ok((None, s));
    }
    let n = s[..end]
        .parse()
        .map_err(|_| LayoutError::format(offset, "width out of range"))?;
    Ok((Some(n), &s[end..]))
}
