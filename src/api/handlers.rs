//! HTTP request handlers for the HRMS API.
//!
//! This module contains the handler functions for all API endpoints, plus the
//! onboarding flows they drive: validate, allocate an identifier, secure the
//! password, insert.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    SalaryInput, build_salary_structure, calculate_components, default_salary_structure,
    round_money, validate_monthly_wage, yearly_wage,
};
use crate::credentials::{generate_password, hash_password_blocking, validate_password};
use crate::error::{HrmsError, HrmsResult};
use crate::identifier::allocate_employee_id;
use crate::models::{EmployeeId, EmployeeRecord, IdentityCandidate, Role};
use crate::store::StoreError;

use super::request::{
    CreateEmployeeRequest, EmployeeSearchQuery, RegisterRequest, SalaryCalculationRequest,
    UpdateEmployeeRequest, UpdateSalaryRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, CreateEmployeeResponse, DeleteEmployeeResponse, IssuedCredentials,
    PayrollEntry, RegisterResponse, SalaryCalculationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", post(create_employee_handler).get(list_employees_handler))
        .route(
            "/employees/:employee_id",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route("/register", post(register_handler))
        .route("/salary/calculate", post(calculate_salary_handler))
        .route("/payrolls", get(list_payrolls_handler))
        .route(
            "/payrolls/:employee_id",
            get(get_payroll_handler).put(update_payroll_handler),
        )
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, error: HrmsError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request rejected"
    );
    ApiErrorResponse::from(error).into_response()
}

/// Unwraps a JSON body, turning a rejection into a 400 response.
fn parse_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    match payload {
        Ok(Json(req)) => Ok(req),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries serde's detailed message
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response())
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Admin onboarding: allocates an identifier and a generated password.
async fn onboard_employee(
    state: &AppState,
    request: CreateEmployeeRequest,
) -> HrmsResult<CreateEmployeeResponse> {
    let join_date = request.validate()?;
    let store = state.store();
    let email = request.email.trim().to_string();

    if store.email_taken(&email) {
        return Err(StoreError::DuplicateEmail { email }.into());
    }

    let company_name = non_blank(request.company_name);
    let candidate = IdentityCandidate::from_full_name(
        &request.name,
        company_name.clone(),
        non_blank(request.joining_date),
    );
    let employee_id = allocate_employee_id(state.generator(), store, &candidate)?;

    let password_length = state.config().config().credentials.generated_password_length;
    let password = generate_password(password_length);
    let password_hash = hash_password_blocking(password.clone()).await?;

    let record = EmployeeRecord {
        employee_id: employee_id.clone(),
        name: request.name.trim().to_string(),
        email: email.clone(),
        role: request.role,
        employer_name: company_name,
        join_date,
        department: non_blank(request.department),
        designation: non_blank(request.designation),
        phone: non_blank(request.phone),
        password_hash,
        created_at: Utc::now(),
    };
    store.insert(record.clone())?;

    Ok(CreateEmployeeResponse {
        message: "Employee created successfully".to_string(),
        user: record,
        credentials: IssuedCredentials {
            employee_id,
            email,
            password,
        },
    })
}

/// Self registration: no company, no join date, caller-chosen password.
async fn register_employee(
    state: &AppState,
    request: RegisterRequest,
) -> HrmsResult<RegisterResponse> {
    request.validate()?;
    let store = state.store();
    let email = request.email.trim().to_string();

    if store.email_taken(&email) {
        return Err(StoreError::DuplicateEmail { email }.into());
    }

    let candidate = IdentityCandidate::from_full_name(&request.name, None, None);
    let employee_id = allocate_employee_id(state.generator(), store, &candidate)?;

    let errors = validate_password(&request.password, Some(&email), Some(employee_id.as_str()));
    if !errors.is_empty() {
        return Err(HrmsError::PasswordRejected { errors });
    }
    let password_hash = hash_password_blocking(request.password).await?;

    let record = EmployeeRecord {
        employee_id,
        name: request.name.trim().to_string(),
        email,
        role: Role::Employee,
        employer_name: None,
        join_date: None,
        department: None,
        designation: None,
        phone: non_blank(request.phone),
        password_hash,
        created_at: Utc::now(),
    };
    store.insert(record.clone())?;

    Ok(RegisterResponse {
        message: "Registration successful".to_string(),
        user: record,
    })
}

fn payroll_entry(state: &AppState, record: EmployeeRecord) -> PayrollEntry {
    let stored = state.store().get_salary_structure(&record.employee_id);
    let is_default = stored.is_none();
    let salary_structure = stored.unwrap_or_else(|| {
        default_salary_structure(record.employee_id.clone(), &state.config().config().payroll)
    });

    PayrollEntry {
        employee_id: record.employee_id,
        name: record.name,
        email: record.email,
        salary_structure,
        is_default,
    }
}

fn find_employee(state: &AppState, employee_id: &str) -> HrmsResult<EmployeeRecord> {
    state
        .store()
        .get(&EmployeeId::new(employee_id))
        .ok_or_else(|| HrmsError::EmployeeNotFound {
            employee_id: employee_id.to_string(),
        })
}

/// Handler for POST /employees.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee creation request");

    let request = match parse_body(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    match onboard_employee(&state, request).await {
        Ok(created) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %created.user.employee_id,
                role = ?created.user.role,
                "Employee created"
            );
            json_response(StatusCode::CREATED, created)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /register.
async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing registration request");

    let request = match parse_body(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    match register_employee(&state, request).await {
        Ok(registered) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %registered.user.employee_id,
                "Employee registered"
            );
            json_response(StatusCode::CREATED, registered)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /employees.
async fn list_employees_handler(
    State(state): State<AppState>,
    Query(query): Query<EmployeeSearchQuery>,
) -> Response {
    let needle = non_blank(query.search);
    let employees: Vec<EmployeeRecord> = state
        .store()
        .list()
        .into_iter()
        .filter(|record| needle.as_deref().is_none_or(|n| record.matches_search(n)))
        .collect();

    json_response(StatusCode::OK, employees)
}

/// Handler for GET /employees/:employee_id.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    match find_employee(&state, &employee_id) {
        Ok(record) => json_response(StatusCode::OK, record),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /employees/:employee_id.
async fn update_employee_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<UpdateEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing employee update request"
    );

    let request = match parse_body(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let result = find_employee(&state, &employee_id)
        .and_then(|record| request.apply_to(record))
        .and_then(|record| Ok(state.store().update(record)?));

    match result {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %record.employee_id,
                role = ?record.role,
                "Employee updated"
            );
            json_response(StatusCode::OK, record)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for DELETE /employees/:employee_id.
///
/// Serials are not compacted; later allocations continue from the highest
/// remaining serial.
async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    match state.store().delete(&EmployeeId::new(&employee_id)) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %record.employee_id,
                "Employee deleted"
            );
            json_response(
                StatusCode::OK,
                DeleteEmployeeResponse {
                    message: "Employee deleted successfully".to_string(),
                    employee_id: record.employee_id,
                },
            )
        }
        Err(err) => error_response(correlation_id, err.into()),
    }
}

/// Handler for POST /salary/calculate.
///
/// Stateless: decomposes the wage without touching the store.
async fn calculate_salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary calculation request");

    let request = match parse_body(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    if let Err(err) = validate_monthly_wage(request.monthly_wage, &state.config().config().payroll)
    {
        return error_response(correlation_id, err);
    }

    let response = SalaryCalculationResponse {
        monthly_wage: round_money(request.monthly_wage),
        yearly_wage: yearly_wage(request.monthly_wage),
        components: calculate_components(request.monthly_wage),
    };

    info!(
        correlation_id = %correlation_id,
        monthly_wage = %response.monthly_wage,
        net_monthly_pay = %response.components.net_monthly_pay(),
        "Salary calculation completed"
    );
    json_response(StatusCode::OK, response)
}

/// Handler for GET /payrolls.
///
/// Administrators have no payroll and are left out.
async fn list_payrolls_handler(
    State(state): State<AppState>,
    Query(query): Query<EmployeeSearchQuery>,
) -> Response {
    let needle = non_blank(query.search);
    let entries: Vec<PayrollEntry> = state
        .store()
        .list()
        .into_iter()
        .filter(|record| !record.is_admin())
        .filter(|record| needle.as_deref().is_none_or(|n| record.matches_search(n)))
        .map(|record| payroll_entry(&state, record))
        .collect();

    json_response(StatusCode::OK, entries)
}

/// Handler for GET /payrolls/:employee_id.
async fn get_payroll_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    match find_employee(&state, &employee_id) {
        Ok(record) => json_response(StatusCode::OK, payroll_entry(&state, record)),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /payrolls/:employee_id.
async fn update_payroll_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<UpdateSalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing payroll update request"
    );

    let request = match parse_body(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let result = find_employee(&state, &employee_id).and_then(|record| {
        let input = SalaryInput::from(request);
        let structure = build_salary_structure(
            record.employee_id,
            &input,
            &state.config().config().payroll,
        )?;
        Ok(state.store().upsert_salary_structure(structure)?)
    });

    match result {
        Ok(structure) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %structure.employee_id,
                monthly_wage = %structure.monthly_wage,
                "Salary structure saved"
            );
            json_response(StatusCode::OK, structure)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::SalaryStructure;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::default())
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn read_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_calculate_50000_returns_reference_components() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request(
                "POST",
                "/salary/calculate",
                r#"{ "monthly_wage": 50000 }"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let result: SalaryCalculationResponse = read_body(response).await;
        assert_eq!(result.yearly_wage, dec("600000.00"));
        assert_eq!(result.components.basic_salary, dec("25000.00"));
        assert_eq!(result.components.fixed_allowance, dec("4167.50"));
    }

    #[tokio::test]
    async fn test_calculate_negative_wage_returns_422() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request(
                "POST",
                "/salary/calculate",
                r#"{ "monthly_wage": -5 }"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request("POST", "/employees", "{invalid json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request(
                "POST",
                "/employees",
                r#"{ "name": "John Doe" }"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("missing field"));
    }

    #[tokio::test]
    async fn test_calculate_wage_above_maximum_returns_422() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request(
                "POST",
                "/salary/calculate",
                r#"{ "monthly_wage": "10000000000000000000000000000" }"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(error.details.as_deref(), Some("monthly_wage"));
    }

    #[tokio::test]
    async fn test_onboarding_issues_identifier_and_hashes_password() {
        let state = create_test_state();
        let request: CreateEmployeeRequest = serde_json::from_str(
            r#"{ "name": "John Doe", "email": "john@example.com", "joining_date": "2024-01-15" }"#,
        )
        .unwrap();

        let created = onboard_employee(&state, request).await.unwrap();

        assert_eq!(created.user.employee_id.as_str(), "OIJODO20240001");
        assert_eq!(created.credentials.password.len(), 12);

        let stored = state.store().get(&created.user.employee_id).unwrap();
        assert_ne!(stored.password_hash, created.credentials.password);
        assert!(
            crate::credentials::verify_password(&created.credentials.password, &stored.password_hash)
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_registration_rejects_weak_password() {
        let state = create_test_state();
        let request = RegisterRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "password".to_string(),
            password_confirmation: "password".to_string(),
            phone: None,
        };

        match register_employee(&state, request).await {
            Err(HrmsError::PasswordRejected { errors }) => assert_eq!(errors.len(), 3),
            other => panic!("Expected PasswordRejected, got {:?}", other.map(|r| r.user)),
        }
        assert!(state.store().list().is_empty());
    }

    #[tokio::test]
    async fn test_payroll_entry_falls_back_to_default_wage() {
        let state = create_test_state();
        let request: CreateEmployeeRequest = serde_json::from_str(
            r#"{ "name": "John Doe", "email": "john@example.com" }"#,
        )
        .unwrap();
        let created = onboard_employee(&state, request).await.unwrap();

        let entry = payroll_entry(&state, created.user);
        assert!(entry.is_default);
        assert_eq!(entry.salary_structure.monthly_wage, dec("50000.00"));
    }

    #[tokio::test]
    async fn test_update_payroll_persists_structure() {
        let state = create_test_state();
        let request: CreateEmployeeRequest = serde_json::from_str(
            r#"{ "name": "John Doe", "email": "john@example.com", "joining_date": "2024-03-01" }"#,
        )
        .unwrap();
        let created = onboard_employee(&state, request).await.unwrap();
        let uri = format!("/payrolls/{}", created.user.employee_id);

        let response = create_router(state.clone())
            .oneshot(json_request(
                "PUT",
                &uri,
                r#"{ "monthly_wage": "30000", "working_days_per_week": 6 }"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let structure: SalaryStructure = read_body(response).await;
        assert_eq!(structure.working_days_per_week, 6);
        assert!(structure.updated_at.is_some());

        let entry = payroll_entry(&state, state.store().get(&structure.employee_id).unwrap());
        assert!(!entry.is_default);
        assert_eq!(entry.salary_structure.monthly_wage, dec("30000.00"));
    }

    #[tokio::test]
    async fn test_update_payroll_unknown_employee_returns_404() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request(
                "PUT",
                "/payrolls/OIXXXX20240001",
                r#"{ "monthly_wage": 1000 }"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "EMPLOYEE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_update_payroll_wage_above_maximum_returns_422() {
        let state = create_test_state();
        let request: CreateEmployeeRequest = serde_json::from_str(
            r#"{ "name": "John Doe", "email": "john@example.com" }"#,
        )
        .unwrap();
        let created = onboard_employee(&state, request).await.unwrap();
        let uri = format!("/payrolls/{}", created.user.employee_id);

        let response = create_router(state.clone())
            .oneshot(json_request(
                "PUT",
                &uri,
                r#"{ "monthly_wage": "10000000000000000000000000000" }"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.details.as_deref(), Some("monthly_wage"));
        assert!(
            state
                .store()
                .get_salary_structure(&created.user.employee_id)
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_delete_unknown_employee_returns_404() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/employees/OIXXXX20240001")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "EMPLOYEE_NOT_FOUND");
    }
}
