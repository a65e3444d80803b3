//! HTTP API module for the HRMS engine.
//!
//! This module provides the REST endpoints for onboarding employees,
//! self registration, salary calculation and payroll maintenance.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CreateEmployeeRequest, EmployeeSearchQuery, RegisterRequest, SalaryCalculationRequest,
    UpdateEmployeeRequest, UpdateSalaryRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, CreateEmployeeResponse, DeleteEmployeeResponse, IssuedCredentials,
    PayrollEntry, RegisterResponse, SalaryCalculationResponse,
};
pub use state::AppState;
