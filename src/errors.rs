//! Error types for the sizing calculator and its front end.

use crate::config::bounds::InputField;
use crate::models::profile::ShapeKind;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sizing operations.
pub type Result<T> = std::result::Result<T, SizingError>;

/// Errors that can occur while sizing a parachute.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    /// No catalog profile exists for the requested canopy shape.
    #[error("No parachute profile for shape: {0}")]
    UnknownShape(ShapeKind),

    /// An input makes the sizing equations degenerate.
    #[error("Invalid input: {field} = {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl SizingError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        SizingError::InvalidInput {
            field,
            value,
            reason,
        }
    }
}

/// Errors raised while accepting user-facing input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: InputField,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Unknown parachute type: {0:?}")]
    UnknownParachute(String),
}

/// Errors raised while loading the calculator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config value {key} = {value}: must be positive and finite")]
    InvalidValue { key: &'static str, value: f64 },
}

/// Errors raised while rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
