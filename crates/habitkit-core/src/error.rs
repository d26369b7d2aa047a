//! Core error types for habitkit-core.
//!
//! The analytics engine itself is infallible: it has no I/O and no
//! fallible operations over well-formed data. Errors arise only at the
//! model-construction and caller-input boundary (date strings, titles,
//! month numbers), which is where the variants below are produced.

use thiserror::Error;

/// Core error type for habitkit-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Date string is not a YYYY-MM-DD calendar day
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// Habit title is empty or too long
    #[error("Invalid title: {message}")]
    InvalidTitle { message: String },

    /// Unknown habit frequency
    #[error("Invalid frequency '{value}': expected \"daily\" or \"weekly\"")]
    InvalidFrequency { value: String },

    /// Month outside 1..=12, or a year chrono cannot represent
    #[error("Invalid calendar month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    /// Calendar window length outside the accepted range
    #[error("Invalid window of {days} days: expected 1..={max} days", max = crate::stats::MAX_WINDOW_DAYS)]
    InvalidWindow { days: u32 },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
