//! Request types for the HRMS API.
//!
//! This module defines the JSON request bodies and query strings accepted by
//! the employee, registration and payroll endpoints, along with the field
//! validation applied before any identifier is allocated.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::SalaryInput;
use crate::error::{HrmsError, HrmsResult};
use crate::identifier::parse_join_date;
use crate::models::{EmployeeRecord, Role};

/// Minimum length of a display name, in characters.
pub const MIN_NAME_LENGTH: usize = 3;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
});

fn invalid(field: &str, message: impl Into<String>) -> HrmsError {
    HrmsError::InvalidEmployee {
        field: field.to_string(),
        message: message.into(),
    }
}

fn validate_name(name: &str) -> HrmsResult<()> {
    if name.trim().chars().count() < MIN_NAME_LENGTH {
        return Err(invalid(
            "name",
            format!("must be at least {} characters", MIN_NAME_LENGTH),
        ));
    }
    Ok(())
}

fn validate_email(email: &str) -> HrmsResult<()> {
    if !EMAIL_PATTERN.is_match(email.trim()) {
        return Err(invalid("email", "must be a valid email address"));
    }
    Ok(())
}

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// Full name; split into first and last name for the identifier.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Company name used for the employer code.
    #[serde(default)]
    pub company_name: Option<String>,
    /// Join date, e.g. `2024-01-15`.
    #[serde(default)]
    pub joining_date: Option<String>,
    /// Account role; defaults to employee.
    #[serde(default)]
    pub role: Role,
    /// Department name.
    #[serde(default)]
    pub department: Option<String>,
    /// Job title.
    #[serde(default)]
    pub designation: Option<String>,
    /// Contact number.
    #[serde(default)]
    pub phone: Option<String>,
}

impl CreateEmployeeRequest {
    /// Validates the fields and returns the parsed join date, if one was
    /// given.
    pub fn validate(&self) -> HrmsResult<Option<NaiveDate>> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;

        match self.joining_date.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => parse_join_date(raw)
                .map(Some)
                .ok_or_else(|| invalid("joining_date", format!("'{}' is not a valid date", raw))),
        }
    }
}

/// Request body for `PUT /employees/{employee_id}`.
///
/// Absent fields keep their stored value. The identifier, join date and
/// password cannot be changed here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New login email.
    #[serde(default)]
    pub email: Option<String>,
    /// New account role.
    #[serde(default)]
    pub role: Option<Role>,
    /// New department; an empty string clears it.
    #[serde(default)]
    pub department: Option<String>,
    /// New job title; an empty string clears it.
    #[serde(default)]
    pub designation: Option<String>,
    /// New contact number; an empty string clears it.
    #[serde(default)]
    pub phone: Option<String>,
}

impl UpdateEmployeeRequest {
    /// Validates the supplied fields and applies them to `record`.
    pub fn apply_to(self, mut record: EmployeeRecord) -> HrmsResult<EmployeeRecord> {
        if let Some(name) = self.name {
            validate_name(&name)?;
            record.name = name.trim().to_string();
        }
        if let Some(email) = self.email {
            validate_email(&email)?;
            record.email = email.trim().to_string();
        }
        if let Some(role) = self.role {
            record.role = role;
        }
        if let Some(department) = self.department {
            record.department = optional_text(department);
        }
        if let Some(designation) = self.designation {
            record.designation = optional_text(designation);
        }
        if let Some(phone) = self.phone {
            record.phone = optional_text(phone);
        }
        Ok(record)
    }
}

fn optional_text(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Request body for `POST /register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Full name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Chosen password, checked against the password policy.
    pub password: String,
    /// Must equal `password`.
    pub password_confirmation: String,
    /// Contact number.
    #[serde(default)]
    pub phone: Option<String>,
}

impl RegisterRequest {
    /// Validates name, email and that the password was confirmed. The
    /// password policy itself runs once the identifier is known.
    pub fn validate(&self) -> HrmsResult<()> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;

        if self.password != self.password_confirmation {
            return Err(invalid("password_confirmation", "does not match password"));
        }
        Ok(())
    }
}

/// Request body for `POST /salary/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryCalculationRequest {
    /// Monthly wage to decompose.
    pub monthly_wage: Decimal,
}

/// Request body for `PUT /payrolls/{employee_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSalaryRequest {
    /// Monthly wage; must be non-negative.
    pub monthly_wage: Decimal,
    /// Working days per week, 1 to 7.
    #[serde(default)]
    pub working_days_per_week: Option<i64>,
    /// Break hours per day, 0 to 24.
    #[serde(default)]
    pub break_time_hours: Option<Decimal>,
}

impl From<UpdateSalaryRequest> for SalaryInput {
    fn from(req: UpdateSalaryRequest) -> Self {
        SalaryInput {
            monthly_wage: req.monthly_wage,
            working_days_per_week: req.working_days_per_week,
            break_time_hours: req.break_time_hours,
        }
    }
}

/// Query string for `GET /employees` and `GET /payrolls`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeSearchQuery {
    /// Case-insensitive filter on name, email or identifier.
    #[serde(default)]
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateEmployeeRequest {
        CreateEmployeeRequest {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            company_name: None,
            joining_date: Some("2024-01-15".to_string()),
            role: Role::Employee,
            department: None,
            designation: None,
            phone: None,
        }
    }

    #[test]
    fn test_deserialize_create_employee_request_defaults() {
        let json = r#"{ "name": "John Doe", "email": "john.doe@example.com" }"#;

        let request: CreateEmployeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.role, Role::Employee);
        assert!(request.company_name.is_none());
        assert!(request.joining_date.is_none());
    }

    #[test]
    fn test_valid_request_returns_join_date() {
        let date = create_request().validate().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15));
    }

    #[test]
    fn test_short_name_rejected() {
        let mut request = create_request();
        request.name = " Jo ".to_string();

        match request.validate() {
            Err(HrmsError::InvalidEmployee { field, .. }) => assert_eq!(field, "name"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_email_rejected() {
        for email in ["", "john", "john@", "john@example", "jo hn@example.com"] {
            let mut request = create_request();
            request.email = email.to_string();
            assert!(request.validate().is_err(), "accepted {:?}", email);
        }
    }

    #[test]
    fn test_unparseable_joining_date_rejected() {
        let mut request = create_request();
        request.joining_date = Some("sometime".to_string());

        match request.validate() {
            Err(HrmsError::InvalidEmployee { field, .. }) => assert_eq!(field, "joining_date"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_joining_date_is_absent() {
        let mut request = create_request();
        request.joining_date = Some("  ".to_string());
        assert_eq!(request.validate().unwrap(), None);
    }

    fn stored_record() -> EmployeeRecord {
        EmployeeRecord {
            employee_id: crate::models::EmployeeId::new("OIJODO20240001"),
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            role: Role::Employee,
            employer_name: Some("Odoo India".to_string()),
            join_date: NaiveDate::from_ymd_opt(2024, 1, 15),
            department: Some("Sales".to_string()),
            designation: None,
            phone: None,
            password_hash: "$argon2id$stored".to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_update_request_changes_only_given_fields() {
        let request: UpdateEmployeeRequest = serde_json::from_str(
            r#"{ "designation": " Lead ", "role": "admin", "department": "" }"#,
        )
        .unwrap();

        let updated = request.apply_to(stored_record()).unwrap();
        assert_eq!(updated.designation.as_deref(), Some("Lead"));
        assert_eq!(updated.role, Role::Admin);
        assert_eq!(updated.department, None);
        assert_eq!(updated.name, "John Doe");
        assert_eq!(updated.employee_id.as_str(), "OIJODO20240001");
        assert_eq!(updated.join_date, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(updated.password_hash, "$argon2id$stored");
    }

    #[test]
    fn test_update_request_validates_email() {
        let request = UpdateEmployeeRequest {
            email: Some("not-an-email".to_string()),
            ..UpdateEmployeeRequest::default()
        };

        match request.apply_to(stored_record()) {
            Err(HrmsError::InvalidEmployee { field, .. }) => assert_eq!(field, "email"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_register_password_confirmation_mismatch() {
        let request = RegisterRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "Str0ng!Pass".to_string(),
            password_confirmation: "Str0ng!Pas".to_string(),
            phone: None,
        };

        match request.validate() {
            Err(HrmsError::InvalidEmployee { field, .. }) => {
                assert_eq!(field, "password_confirmation")
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_wage_accepts_number_or_string() {
        let from_number: SalaryCalculationRequest =
            serde_json::from_str(r#"{ "monthly_wage": 50000 }"#).unwrap();
        let from_string: SalaryCalculationRequest =
            serde_json::from_str(r#"{ "monthly_wage": "50000.00" }"#).unwrap();
        assert_eq!(from_number.monthly_wage, from_string.monthly_wage);
    }

    #[test]
    fn test_update_request_converts_to_salary_input() {
        let request: UpdateSalaryRequest =
            serde_json::from_str(r#"{ "monthly_wage": "30000", "working_days_per_week": 6 }"#)
                .unwrap();

        let input: SalaryInput = request.into();
        assert_eq!(input.monthly_wage, Decimal::new(30000, 0));
        assert_eq!(input.working_days_per_week, Some(6));
        assert_eq!(input.break_time_hours, None);
    }
}
