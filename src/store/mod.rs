//! Employee record storage.
//!
//! The [`EmployeeStore`] trait is the narrow interface the identifier
//! allocator and the API handlers need. Implementations must enforce
//! identifier and email uniqueness on `insert`; that check is the final
//! guard against two concurrent allocations producing the same identifier.

mod memory;

use regex::Regex;
use thiserror::Error;

use crate::models::{EmployeeId, EmployeeRecord, SalaryStructure};

pub use memory::InMemoryStore;

/// Errors raised by store writes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Another record already holds this identifier.
    #[error("Employee ID already exists: {employee_id}")]
    DuplicateEmployeeId {
        /// The conflicting identifier.
        employee_id: String,
    },

    /// Another record already holds this email.
    #[error("Email already registered: {email}")]
    DuplicateEmail {
        /// The conflicting email.
        email: String,
    },

    /// The referenced employee does not exist.
    #[error("Employee record not found: {employee_id}")]
    NotFound {
        /// The missing identifier.
        employee_id: String,
    },
}

/// Persistence for employee records and their salary structures.
pub trait EmployeeStore: Send + Sync {
    /// Returns true if any record holds this identifier.
    fn exists_by_employee_id(&self, employee_id: &EmployeeId) -> bool;

    /// Returns every stored identifier matching the pattern.
    fn find_employee_ids_matching(&self, pattern: &Regex) -> Vec<EmployeeId>;

    /// Returns true if the email is taken, ignoring case.
    fn email_taken(&self, email: &str) -> bool;

    /// Inserts a new record, rejecting duplicate identifiers or emails.
    fn insert(&self, record: EmployeeRecord) -> Result<(), StoreError>;

    /// Fetches a record by identifier.
    fn get(&self, employee_id: &EmployeeId) -> Option<EmployeeRecord>;

    /// Lists every record ordered by identifier.
    fn list(&self) -> Vec<EmployeeRecord>;

    /// Replaces an existing record with the same identifier, rejecting an
    /// email held by any other record.
    fn update(&self, record: EmployeeRecord) -> Result<EmployeeRecord, StoreError>;

    /// Removes a record and its salary structure, returning the record.
    fn delete(&self, employee_id: &EmployeeId) -> Result<EmployeeRecord, StoreError>;

    /// Creates or replaces the salary structure of an existing employee.
    fn upsert_salary_structure(
        &self,
        structure: SalaryStructure,
    ) -> Result<SalaryStructure, StoreError>;

    /// Fetches the stored salary structure, if any.
    fn get_salary_structure(&self, employee_id: &EmployeeId) -> Option<SalaryStructure>;
}
