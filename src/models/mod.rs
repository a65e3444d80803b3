//! Core data models for the HRMS engine.
//!
//! This module contains the domain models shared by the identifier
//! generator, the salary calculator, the record store and the API.

mod employee;
mod employee_id;
mod salary;

pub use employee::{EmployeeRecord, FullName, IdentityCandidate, Role};
pub use employee_id::{EmployeeId, SERIAL_WIDTH};
pub use salary::{SalaryComponents, SalaryStructure};
