//! Response types for the HRMS API.
//!
//! This module defines the success bodies returned by the handlers, the
//! error response structure, and the mapping from [`HrmsError`] to HTTP
//! status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::HrmsError;
use crate::models::{EmployeeId, EmployeeRecord, SalaryComponents, SalaryStructure};
use crate::store::StoreError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates an error response with the given status.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<StoreError> for ApiErrorResponse {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::DuplicateEmployeeId { employee_id } => ApiErrorResponse::new(
                StatusCode::CONFLICT,
                ApiError::with_details(
                    "DUPLICATE_EMPLOYEE_ID",
                    format!("Employee ID already exists: {}", employee_id),
                    "Another request allocated the same identifier; retry the request",
                ),
            ),
            StoreError::DuplicateEmail { email } => ApiErrorResponse::new(
                StatusCode::CONFLICT,
                ApiError::new(
                    "DUPLICATE_EMAIL",
                    format!("Email already registered: {}", email),
                ),
            ),
            StoreError::NotFound { employee_id } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::new(
                    "EMPLOYEE_NOT_FOUND",
                    format!("Employee not found: {}", employee_id),
                ),
            ),
        }
    }
}

impl From<HrmsError> for ApiErrorResponse {
    fn from(error: HrmsError) -> Self {
        match error {
            HrmsError::ConfigNotFound { .. }
            | HrmsError::ConfigParseError { .. }
            | HrmsError::InvalidConfig { .. } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", error.to_string()),
            ),
            HrmsError::EmployeeIdExhausted { .. } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("EMPLOYEE_ID_EXHAUSTED", error.to_string()),
            ),
            HrmsError::EmployeeNotFound { employee_id } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::new(
                    "EMPLOYEE_NOT_FOUND",
                    format!("Employee not found: {}", employee_id),
                ),
            ),
            HrmsError::InvalidEmployee { field, message }
            | HrmsError::InvalidSalaryInput { field, message } => ApiErrorResponse::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid field '{}': {}", field, message),
                    field,
                ),
            ),
            HrmsError::PasswordRejected { errors } => ApiErrorResponse::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "PASSWORD_REJECTED",
                    "Password validation failed",
                    errors.join(" "),
                ),
            ),
            HrmsError::Store(store_error) => store_error.into(),
            HrmsError::Credential { message } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CREDENTIAL_ERROR", "Failed to secure credentials", message),
            ),
        }
    }
}

/// Login details returned once, when an administrator creates an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedCredentials {
    /// The allocated identifier, usable as a login.
    pub employee_id: EmployeeId,
    /// The login email.
    pub email: String,
    /// The generated plaintext password. Not stored.
    pub password: String,
}

/// Response body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeResponse {
    /// Confirmation message.
    pub message: String,
    /// The stored record.
    pub user: EmployeeRecord,
    /// Login details to hand to the employee.
    pub credentials: IssuedCredentials,
}

/// Response body for `POST /register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Confirmation message.
    pub message: String,
    /// The stored record.
    pub user: EmployeeRecord,
}

/// Response body for `DELETE /employees/{employee_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteEmployeeResponse {
    /// Confirmation message.
    pub message: String,
    /// The removed identifier. It is not reissued unless it was the highest
    /// serial in its prefix.
    pub employee_id: EmployeeId,
}

/// Response body for `POST /salary/calculate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryCalculationResponse {
    /// The wage rounded to two places.
    pub monthly_wage: Decimal,
    /// Twelve times the monthly wage.
    pub yearly_wage: Decimal,
    /// The nine components, flattened into the body.
    #[serde(flatten)]
    pub components: SalaryComponents,
}

/// One row of `GET /payrolls`, and the body of `GET /payrolls/{employee_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// The employee's identifier.
    pub employee_id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Stored or default structure.
    pub salary_structure: SalaryStructure,
    /// True when no structure is stored and the default wage was used.
    pub is_default: bool,
}
