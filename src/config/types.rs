//! Configuration types for the HRMS engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section has a
//! default so a partial file is accepted.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Employer code used when no company name yields one.
pub const DEFAULT_EMPLOYER_CODE: &str = "OI";

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the API listens on.
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Settings for employee identifier allocation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Two-letter fallback employer code.
    pub default_employer_code: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            default_employer_code: DEFAULT_EMPLOYER_CODE.to_string(),
        }
    }
}

/// Payroll defaults applied when a request or record leaves them out.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Wage used to compute a structure for employees without one.
    pub default_monthly_wage: Decimal,
    /// Largest monthly wage accepted from a caller.
    pub max_monthly_wage: Decimal,
    /// Working days per week when unspecified.
    pub default_working_days_per_week: u8,
    /// Break hours when unspecified.
    pub default_break_time_hours: Decimal,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            default_monthly_wage: Decimal::new(50000, 0),
            max_monthly_wage: Decimal::new(1_000_000_000_000, 0),
            default_working_days_per_week: 5,
            default_break_time_hours: Decimal::new(10, 1),
        }
    }
}

/// Credential generation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Length of passwords generated for admin-created accounts.
    pub generated_password_length: usize,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            generated_password_length: 12,
        }
    }
}

/// The complete engine configuration loaded from `hrms.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HrmsConfig {
    /// Server settings.
    pub server: ServerConfig,
    /// Identifier settings.
    pub identity: IdentityConfig,
    /// Payroll defaults.
    pub payroll: PayrollConfig,
    /// Credential settings.
    pub credentials: CredentialsConfig,
}
