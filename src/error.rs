//! Error types for the Personnel Cost Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building records, loading
//! configuration, or exporting reports.

use thiserror::Error;

/// The main error type for the Personnel Cost Engine.
///
/// Aggregation itself never fails; errors only come from the employee
/// salary invariant and from the configuration and export boundaries.
///
/// # Example
///
/// ```
/// use personnel_cost::error::CostError;
///
/// let error = CostError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum CostError {
    /// An employee record violated a data invariant.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
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

    /// A configuration value is outside what the engine accepts.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration key.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// Writing to an output stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A report could not be written to its destination.
    #[error("Failed to export report to '{path}': {message}")]
    Export {
        /// The destination path.
        path: String,
        /// A description of the underlying writer error.
        message: String,
    },
}

impl CostError {
    pub(crate) fn export(path: &std::path::Path, err: impl std::fmt::Display) -> Self {
        CostError::Export {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for Results that return CostError.
pub type CostResult<T> = Result<T, CostError>;
