//! Employee identifier generation.
//!
//! This module builds the base identifier for a new hire. The serial is
//! re-derived from the store on every call by scanning the identifiers that
//! share the employer code and join year, so gaps left by deletions are
//! tolerated and no counter table is needed.

use chrono::{NaiveDate, Utc};
use regex::Regex;
use tracing::debug;

use crate::config::ConfigLoader;
use crate::models::{EmployeeId, IdentityCandidate};
use crate::store::EmployeeStore;

use super::codes::{employer_code, join_year, name_code};

/// Generates employee identifiers of the form `CCFFLLYYYYSSSS`.
///
/// The fallback employer code is injected at construction time.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use hrms_engine::identifier::EmployeeIdGenerator;
/// use hrms_engine::models::IdentityCandidate;
/// use hrms_engine::store::InMemoryStore;
///
/// let generator = EmployeeIdGenerator::new("OI");
/// let store = InMemoryStore::new();
/// let candidate = IdentityCandidate {
///     first_name: "John".to_string(),
///     last_name: "Doe".to_string(),
///     employer_name: None,
///     join_date: Some("2024-01-15".to_string()),
/// };
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let id = generator.generate_on(&store, &candidate, today);
/// assert_eq!(id.as_str(), "OIJODO20240001");
/// ```
#[derive(Debug, Clone)]
pub struct EmployeeIdGenerator {
    default_employer_code: String,
}

impl EmployeeIdGenerator {
    /// Creates a generator with the given fallback employer code.
    pub fn new(default_employer_code: impl Into<String>) -> Self {
        Self {
            default_employer_code: default_employer_code.into().to_ascii_uppercase(),
        }
    }

    /// Creates a generator from loaded configuration.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::new(config.default_employer_code())
    }

    /// The fallback employer code.
    pub fn default_employer_code(&self) -> &str {
        &self.default_employer_code
    }

    /// Generates the base identifier, using today's date (UTC) when the join
    /// date is missing or unparseable.
    pub fn generate<S>(&self, store: &S, candidate: &IdentityCandidate) -> EmployeeId
    where
        S: EmployeeStore + ?Sized,
    {
        self.generate_on(store, candidate, Utc::now().date_naive())
    }

    /// Generates the base identifier with an explicit "today".
    ///
    /// The result is not checked for existence; see
    /// [`allocate_employee_id`](super::allocate_employee_id) for the
    /// collision loop.
    pub fn generate_on<S>(
        &self,
        store: &S,
        candidate: &IdentityCandidate,
        today: NaiveDate,
    ) -> EmployeeId
    where
        S: EmployeeStore + ?Sized,
    {
        let company = employer_code(
            candidate.employer_name.as_deref(),
            &self.default_employer_code,
        );
        let first = name_code(&candidate.first_name);
        let last = name_code(&candidate.last_name);
        let year = join_year(candidate.join_date.as_deref(), today);
        let serial = next_serial(store, &company, year);

        let prefix = format!("{}{}{}{:04}", company, first, last, year);
        let id = EmployeeId::from_parts(&prefix, serial);

        debug!(
            employee_id = %id,
            employer_code = %company,
            join_year = year,
            serial,
            "Generated base employee ID"
        );

        id
    }
}

/// Builds `^{employer_code}[A-Z]{4}{year}\d{4}$`.
pub fn serial_pattern(employer_code: &str, year: i32) -> Regex {
    let pattern = format!(
        r"^{}[A-Z]{{4}}{}\d{{4}}$",
        regex::escape(employer_code),
        regex::escape(&format!("{:04}", year))
    );
    Regex::new(&pattern).expect("escaped literals always form a valid pattern")
}

/// Returns one more than the highest serial already issued for this
/// employer code and year, or 1 if there is none.
pub fn next_serial<S>(store: &S, employer_code: &str, year: i32) -> u32
where
    S: EmployeeStore + ?Sized,
{
    let pattern = serial_pattern(employer_code, year);
    store
        .find_employee_ids_matching(&pattern)
        .iter()
        .map(EmployeeId::serial)
        .max()
        .unwrap_or(0)
        + 1
}
