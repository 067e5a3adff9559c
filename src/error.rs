//! # Error Types
//!
//! Hard failures raised by the styling layer. Soft, per-row colour fallbacks
//! are not errors; they are reported through
//! [`ColorResolution`](crate::colors::ColorResolution) instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving themes, colouring data or exporting charts.
#[derive(Error, Debug)]
pub enum StyleError {
    /// Requested theme name is not one of the registered themes.
    #[error("Invalid theme name '{name}': expected 'cotd', 'article' or 'newsletter'")]
    InvalidThemeName {
        /// The rejected name.
        name: String,
    },

    /// Colour assignment was asked to work on a table with no rows.
    #[error("Cannot assign colours to an empty table")]
    EmptyInput,

    /// The identifier column is absent from a row.
    #[error("Column '{column}' is missing from row {row}")]
    MissingColumn {
        /// The column that was requested.
        column: String,
        /// Zero-based index of the first offending row.
        row: usize,
    },

    /// Palette mode name is not recognised.
    #[error("Unknown palette mode '{0}'")]
    UnknownPaletteMode(String),

    /// An environment setting could not be parsed.
    #[error("Invalid value '{value}' for setting {key}")]
    InvalidSetting {
        /// The environment variable name.
        key: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// The chart document is not a JSON object.
    #[error("Chart specification must be a JSON object")]
    InvalidChart,

    /// Font source directory does not exist.
    #[error("Font directory not found: {path:?}")]
    FontDirectoryNotFound {
        /// The directory that was searched.
        path: PathBuf,
    },

    /// The rasterizer failed to render a chart.
    #[error("Failed to render chart: {message}")]
    Render {
        /// Message reported by the rasterizer.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A directory could not be walked.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Error serializing or deserializing chart data.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for styling operations.
pub type StyleResult<T> = Result<T, StyleError>;

impl StyleError {
    /// Create an invalid theme name error.
    pub fn invalid_theme(name: impl Into<String>) -> Self {
        Self::InvalidThemeName { name: name.into() }
    }

    /// Create a missing column error.
    pub fn missing_column(column: impl Into<String>, row: usize) -> Self {
        Self::MissingColumn {
            column: column.into(),
            row,
        }
    }

    /// Create an invalid setting error.
    pub fn invalid_setting(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a render error from any displayable message.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }
}
