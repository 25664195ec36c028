//! Core error types for studyplan-core.
//!
//! Calendar computations are total over well-formed input, so the hierarchy
//! is small: configuration problems, rejected values, and the IO/JSON errors
//! that surface while loading event and milestone data.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Core error type for studyplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Month index outside 0..=11
    #[error("Invalid month index {month}: expected 0-11")]
    InvalidMonth { month: u32 },

    /// A date click landed outside the month currently shown
    #[error("Date {date} is outside the displayed month {displayed}")]
    DateOutsideDisplayedMonth { date: NaiveDate, displayed: String },

    /// Two records in one event store share an id
    #[error("Duplicate event id: {0}")]
    DuplicateId(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl ValidationError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_converts_into_core_error() {
        let err: CoreError = ValidationError::InvalidMonth { month: 12 }.into();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation error: Invalid month index 12: expected 0-11"
        );
    }

    #[test]
    fn outside_month_message_names_both_dates() {
        let err = ValidationError::DateOutsideDisplayedMonth {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            displayed: "2025-05".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Date 2025-06-01 is outside the displayed month 2025-05"
        );
    }
}
