//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing pay, loading
//! configuration and exporting employee records.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "monthly_salary".to_string(),
///     message: "monthly salary must be positive".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input for 'monthly_salary': monthly salary must be positive"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A stored field violated its invariant when pay was computed.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable reason.
        message: String,
    },

    /// A pay figure fell outside the range a `Decimal` can hold.
    #[error("Arithmetic overflow computing {quantity}")]
    Overflow {
        /// The figure being computed when the overflow occurred.
        quantity: String,
    },

    /// Configuration or roster file was not found at the given path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration or roster file exists but could not be read.
    #[error("Failed to read configuration file '{path}': {message}")]
    ConfigReadError {
        /// The path that could not be read.
        path: String,
        /// The underlying I/O error.
        message: String,
    },

    /// Configuration or roster file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A sink could not write its output.
    #[error("Failed to export records to '{path}': {message}")]
    ExportError {
        /// The destination path.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// Reading from the interactive terminal failed.
    #[error("Prompt failed: {message}")]
    PromptFailed {
        /// A description of the failure.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
