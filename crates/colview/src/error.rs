//! Error types for building column layouts.
//!
//! Rendering a line never fails; these errors only come from validating
//! descriptors and loading layouts from text or files.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::ColumnId;

/// Errors that can occur while building a column layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A descriptor's text width exceeds its full width.
    #[error("column {id}: text width {text_width} exceeds full width {full_width}")]
    InvalidWidths {
        id: ColumnId,
        text_width: usize,
        full_width: usize,
    },

    /// A layout refers to a column name nobody knows about.
    #[error("unknown column name '{0}'")]
    UnknownColumn(String),

    /// A column format string could not be parsed.
    #[error("invalid column format at offset {offset}: {reason}")]
    Format { offset: usize, reason: String },

    /// The layout file has an extension we cannot load.
    #[error("unsupported layout file '{}': expected .yaml, .yml or .json", .0.display())]
    UnsupportedFile(PathBuf),

    /// Reading a layout file failed.
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML layout could not be parsed.
    #[error("invalid YAML layout: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON layout could not be parsed.
    #[error("invalid JSON layout: {0}")]
    Json(#[from] serde_json::Error),
}

impl LayoutError {
    /// Create a format error.
    pub fn format(offset: usize, reason: impl Into<String>) -> Self {
        Self::Format {
            offset,
            reason: reason.into(),
        }
    }
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = LayoutError::UnknownColumn("size".into());
        assert_eq!(err.to_string(), "unknown column name 'size'");

        let err = LayoutError::format(4, "expected '}'");
        assert_eq!(
            err.to_string(),
            "invalid column format at offset 4: expected '}'"
        );
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error as _;

        let err = LayoutError::Io {
            path: PathBuf::from("layout.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("layout.yaml"));
        assert!(err.source().is_some());
    }
}
