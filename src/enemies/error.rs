//! Error types for enemy definition loading and validation.

use thiserror::Error;

/// Errors that can occur when loading enemy definition files.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// Definitions directory could not be found.
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    /// File or directory could not be read.
    #[error("Failed to read '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },
}

/// A value in an enemy definition that had to be corrected.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Disengage range must not be inside aggro range.
    #[error("disengage_range {disengage} is below aggro_range {aggro}; raised to match")]
    DisengageBelowAggro { aggro: f32, disengage: f32 },

    /// A duration, range or speed was outside its valid range.
    #[error("{field} is out of range ({value}); using {fallback}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        fallback: f32,
    },

    /// Max health must be at least one.
    #[error("max_health must be at least 1; using 1")]
    ZeroHealth,
}
