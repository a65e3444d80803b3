//! HRMS engine: employee identifier allocation and salary structures.
//!
//! This crate allocates human-readable employee identifiers of the form
//! `CCFFLLYYYYSSSS` (employer code, name codes, join year, serial) and
//! decomposes a monthly wage into salary components, served over a small
//! HTTP API.
//!
//! ```
//! use hrms_engine::calculation::calculate_components;
//! use hrms_engine::identifier::EmployeeIdGenerator;
//! use hrms_engine::models::IdentityCandidate;
//! use hrms_engine::store::InMemoryStore;
//! use rust_decimal::Decimal;
//!
//! let store = InMemoryStore::new();
//! let generator = EmployeeIdGenerator::new("OI");
//! let candidate = IdentityCandidate::from_full_name(
//!     "John Doe",
//!     None,
//!     Some("2024-01-15".to_string()),
//! );
//! assert_eq!(generator.generate(&store, &candidate).as_str(), "OIJODO20240001");
//!
//! let components = calculate_components(Decimal::new(50000, 0));
//! assert_eq!(components.earned_total(), Decimal::new(5000000, 2));
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod credentials;
pub mod error;
pub mod identifier;
pub mod models;
pub mod store;
