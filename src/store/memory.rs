//! In-process record store.

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use parking_lot::RwLock;
use regex::Regex;

use crate::models::{EmployeeId, EmployeeRecord, SalaryStructure};

use super::{EmployeeStore, StoreError};

#[derive(Debug, Default)]
struct Tables {
    employees: BTreeMap<EmployeeId, EmployeeRecord>,
    salary_structures: HashMap<EmployeeId, SalaryStructure>,
}

/// A [`EmployeeStore`] backed by maps behind a single lock.
///
/// Uniqueness checks and the insert happen under one write guard, so the
/// identifier and email columns behave like unique indexes.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored employees.
    pub fn len(&self) -> usize {
        self.tables.read().employees.len()
    }

    /// Returns true if no employees are stored.
    pub fn is_empty(&self) -> bool {
        self.tables.read().employees.is_empty()
    }
}

impl EmployeeStore for InMemoryStore {
    fn exists_by_employee_id(&self, employee_id: &EmployeeId) -> bool {
        self.tables.read().employees.contains_key(employee_id)
    }

    fn find_employee_ids_matching(&self, pattern: &Regex) -> Vec<EmployeeId> {
        self.tables
            .read()
            .employees
            .keys()
            .filter(|id| pattern.is_match(id.as_str()))
            .cloned()
            .collect()
    }

    fn email_taken(&self, email: &str) -> bool {
        let email = email.to_lowercase();
        self.tables
            .read()
            .employees
            .values()
            .any(|record| record.email.to_lowercase() == email)
    }

    fn insert(&self, record: EmployeeRecord) -> Result<(), StoreError> {
        let mut tables = self.tables.write();

        if tables.employees.contains_key(&record.employee_id) {
            return Err(StoreError::DuplicateEmployeeId {
                employee_id: record.employee_id.to_string(),
            });
        }

        let email = record.email.to_lowercase();
        if tables
            .employees
            .values()
            .any(|existing| existing.email.to_lowercase() == email)
        {
            return Err(StoreError::DuplicateEmail {
                email: record.email,
            });
        }

        tables.employees.insert(record.employee_id.clone(), record);
        Ok(())
    }

    fn get(&self, employee_id: &EmployeeId) -> Option<EmployeeRecord> {
        self.tables.read().employees.get(employee_id).cloned()
    }

    fn list(&self) -> Vec<EmployeeRecord> {
        self.tables.read().employees.values().cloned().collect()
    }

    fn update(&self, record: EmployeeRecord) -> Result<EmployeeRecord, StoreError> {
        let mut tables = self.tables.write();

        if !tables.employees.contains_key(&record.employee_id) {
            return Err(StoreError::NotFound {
                employee_id: record.employee_id.to_string(),
            });
        }

        let email = record.email.to_lowercase();
        if tables.employees.values().any(|existing| {
            existing.employee_id != record.employee_id && existing.email.to_lowercase() == email
        }) {
            return Err(StoreError::DuplicateEmail {
                email: record.email,
            });
        }

        tables
            .employees
            .insert(record.employee_id.clone(), record.clone());
        Ok(record)
    }

    fn delete(&self, employee_id: &EmployeeId) -> Result<EmployeeRecord, StoreError> {
        let mut tables = self.tables.write();

        let record = tables
            .employees
            .remove(employee_id)
            .ok_or_else(|| StoreError::NotFound {
                employee_id: employee_id.to_string(),
            })?;
        tables.salary_structures.remove(employee_id);
        Ok(record)
    }

    fn upsert_salary_structure(
        &self,
        mut structure: SalaryStructure,
    ) -> Result<SalaryStructure, StoreError> {
        let mut tables = self.tables.write();

        if !tables.employees.contains_key(&structure.employee_id) {
            return Err(StoreError::NotFound {
                employee_id: structure.employee_id.to_string(),
            });
        }

        structure.updated_at = Some(Utc::now());
        tables
            .salary_structures
            .insert(structure.employee_id.clone(), structure.clone());
        Ok(structure)
    }

    fn get_salary_structure(&self, employee_id: &EmployeeId) -> Option<SalaryStructure> {
        self.tables.read().salary_structures.get(employee_id).cloned()
    }
}
