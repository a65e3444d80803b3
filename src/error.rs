//! Error types for the HRMS engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the engine can surface to its callers.

use thiserror::Error;

use crate::store::StoreError;

/// The main error type for the HRMS engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to map failures onto API responses in one place.
///
/// # Example
///
/// ```
/// use hrms_engine::error::HrmsError;
///
/// let error = HrmsError::ConfigNotFound {
///     path: "/missing/hrms.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/hrms.yaml");
/// ```
#[derive(Debug, Error)]
pub enum HrmsError {
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

    /// A configuration value was present but unusable.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration key.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// Every serial bump after the generated identifier was already taken.
    #[error(
        "Unable to allocate a unique employee ID from '{base_id}' after {attempts} collisions; contact the system administrator"
    )]
    EmployeeIdExhausted {
        /// The identifier originally produced by the generator.
        base_id: String,
        /// Number of consecutive collisions observed.
        attempts: u32,
    },

    /// No employee exists with the given identifier.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        employee_id: String,
    },

    /// An employee request was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A salary structure input was rejected before calculation.
    #[error("Invalid salary field '{field}': {message}")]
    InvalidSalaryInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A password failed one or more policy checks.
    #[error("Password validation failed: {}", errors.join(" "))]
    PasswordRejected {
        /// Every policy violation, in check order.
        errors: Vec<String>,
    },

    /// The record store refused a write.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Password hashing failed.
    #[error("Credential error: {message}")]
    Credential {
        /// A description of the hashing failure.
        message: String,
    },
}

/// A type alias for Results that return HrmsError.
pub type HrmsResult<T> = Result<T, HrmsError>;
