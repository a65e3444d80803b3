//! Employee model and related types.
//!
//! This module defines the persisted [`EmployeeRecord`], the [`Role`] enum,
//! and the ephemeral inputs used when allocating an employee identifier.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::EmployeeId;

/// The access role of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Administrator with access to every employee and payroll.
    Admin,
    /// Regular employee.
    #[default]
    Employee,
}

/// A full name split into the parts the identifier generator encodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName {
    /// The first whitespace-separated token.
    pub first_name: String,
    /// The remaining tokens, or the first token again for single-word names.
    pub last_name: String,
}

impl FullName {
    /// Splits a full name into first and last name.
    ///
    /// A single-word name uses the same word for both parts. Otherwise the
    /// first token is the first name and the remaining tokens, joined by
    /// single spaces, form the last name.
    ///
    /// # Examples
    ///
    /// ```
    /// use hrms_engine::models::FullName;
    ///
    /// let name = FullName::parse("Mary Ann Smith");
    /// assert_eq!(name.first_name, "Mary");
    /// assert_eq!(name.last_name, "Ann Smith");
    ///
    /// let single = FullName::parse("Cher");
    /// assert_eq!(single.first_name, "Cher");
    /// assert_eq!(single.last_name, "Cher");
    /// ```
    pub fn parse(full_name: &str) -> Self {
        let mut tokens = full_name.split_whitespace();
        let first_name = tokens.next().unwrap_or_default().to_string();
        let rest: Vec<&str> = tokens.collect();

        let last_name = if rest.is_empty() {
            first_name.clone()
        } else {
            rest.join(" ")
        };

        Self {
            first_name,
            last_name,
        }
    }
}

/// Input to the identifier generator. Never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdentityCandidate {
    /// First name, trimmed by the generator.
    pub first_name: String,
    /// Last name, trimmed by the generator.
    pub last_name: String,
    /// Employer or company name used for the employer code.
    pub employer_name: Option<String>,
    /// Free-form join date; unparseable values fall back to the current year.
    pub join_date: Option<String>,
}

impl IdentityCandidate {
    /// Builds a candidate from an unsplit full name.
    pub fn from_full_name(
        full_name: &str,
        employer_name: Option<String>,
        join_date: Option<String>,
    ) -> Self {
        let FullName {
            first_name,
            last_name,
        } = FullName::parse(full_name);
        Self {
            first_name,
            last_name,
            employer_name,
            join_date,
        }
    }
}

/// A persisted employee account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The allocated identifier; unique and immutable.
    pub employee_id: EmployeeId,
    /// Display name as entered.
    pub name: String,
    /// Login email; unique case-insensitively.
    pub email: String,
    /// Account role.
    pub role: Role,
    /// Company name given at creation, if any.
    #[serde(default)]
    pub employer_name: Option<String>,
    /// Date the employee joined, if known.
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
    /// Department, if provided.
    #[serde(default)]
    pub department: Option<String>,
    /// Job title, if provided.
    #[serde(default)]
    pub designation: Option<String>,
    /// Contact number, if provided.
    #[serde(default)]
    pub phone: Option<String>,
    /// Argon2 PHC string; never serialized.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl EmployeeRecord {
    /// Returns true if the account is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Case-insensitive match on name, email or identifier.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.email.to_lowercase().contains(&needle)
            || self.employee_id.as_str().to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> EmployeeRecord {
        EmployeeRecord {
            employee_id: EmployeeId::new("OIJODO20240001"),
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            role: Role::Employee,
            employer_name: None,
            join_date: NaiveDate::from_ymd_opt(2024, 1, 15),
            department: Some("Engineering".to_string()),
            designation: None,
            phone: None,
            password_hash: "$argon2id$secret".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_parse_two_word_name() {
        let name = FullName::parse("John Doe");
        assert_eq!(name.first_name, "John");
        assert_eq!(name.last_name, "Doe");
    }

    #[test]
    fn test_parse_collapses_extra_whitespace() {
        let name = FullName::parse("  Anna   Maria  Lopez ");
        assert_eq!(name.first_name, "Anna");
        assert_eq!(name.last_name, "Maria Lopez");
    }

    #[test]
    fn test_parse_single_word_repeats() {
        let name = FullName::parse("  Prince ");
        assert_eq!(name.first_name, "Prince");
        assert_eq!(name.last_name, "Prince");
    }

    #[test]
    fn test_candidate_from_full_name() {
        let candidate = IdentityCandidate::from_full_name(
            "Jane Smith",
            Some("Acme".to_string()),
            Some("2025-03-01".to_string()),
        );
        assert_eq!(candidate.first_name, "Jane");
        assert_eq!(candidate.last_name, "Smith");
        assert_eq!(candidate.employer_name.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"employee\"").unwrap();
        assert_eq!(role, Role::Employee);
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let json = serde_json::to_string(&create_test_record()).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2"));
        assert!(json.contains("\"employee_id\":\"OIJODO20240001\""));
    }

    #[test]
    fn test_matches_search_is_case_insensitive() {
        let record = create_test_record();
        assert!(record.matches_search("JOHN"));
        assert!(record.matches_search("example.com"));
        assert!(record.matches_search("oijodo"));
        assert!(!record.matches_search("smith"));
    }
}
