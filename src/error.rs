//! Error types for the Salary Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during salary calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Salary Engine.
///
/// The calculator itself only ever produces [`EngineError::InvalidInput`];
/// the remaining variants come from loading and resolving configuration.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "monthly_salary".to_string(),
///     message: "must be positive".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input 'monthly_salary': must be positive");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Caller supplied data the calculator cannot accept.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was out of range.
    #[error("Invalid configuration '{field}': {message}")]
    InvalidConfig {
        /// The configuration field.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// No work schedule is effective for the requested month.
    #[error("No work schedule effective on {date}")]
    PolicyNotFound {
        /// The first day of the requested month.
        date: NaiveDate,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// An amount derived from the salary left the representable decimal
    /// range. Reported against `monthly_salary`, the only unbounded money input.
    pub fn amount_overflow(quantity: &str) -> Self {
        Self::invalid_input(
            "monthly_salary",
            format!("{} exceeds the representable amount range", quantity),
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
