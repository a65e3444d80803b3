//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from a YAML file, with environment overrides applied on top.

use std::env;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::info;

use crate::error::{HrmsError, HrmsResult};

use super::types::HrmsConfig;

/// Environment variable that overrides `identity.default_employer_code`.
pub const COMPANY_CODE_ENV: &str = "HRMS_COMPANY_CODE";

/// Loads and provides access to engine configuration.
///
/// # File Layout
///
/// ```text
/// server:
///   bind_addr: "0.0.0.0:8080"
/// identity:
///   default_employer_code: "OI"
/// payroll:
///   default_monthly_wage: "50000"
///   max_monthly_wage: "1000000000000"
///   default_working_days_per_week: 5
///   default_break_time_hours: "1.0"
/// credentials:
///   generated_password_length: 12
/// ```
///
/// # Example
///
/// ```no_run
/// use hrms_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/hrms.yaml").unwrap();
/// println!("Default employer code: {}", loader.default_employer_code());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: HrmsConfig,
}

impl ConfigLoader {
    /// Loads configuration from the given YAML file and applies the
    /// `HRMS_COMPANY_CODE` override if it is set.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - A value fails validation (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> HrmsResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| HrmsError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let mut config = Self::parse(&content, &path_str)?;

        if let Ok(code) = env::var(COMPANY_CODE_ENV) {
            info!(code = %code, "Default employer code overridden from environment");
            config.identity.default_employer_code = code;
        }

        Self::from_config(config)
    }

    /// Parses configuration from a YAML string without touching the
    /// environment.
    pub fn from_yaml(content: &str) -> HrmsResult<Self> {
        let config = Self::parse(content, "<inline>")?;
        Self::from_config(config)
    }

    /// Validates and wraps an already-built configuration.
    pub fn from_config(mut config: HrmsConfig) -> HrmsResult<Self> {
        config.identity.default_employer_code = config
            .identity
            .default_employer_code
            .trim()
            .to_ascii_uppercase();
        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn parse(content: &str, path: &str) -> HrmsResult<HrmsConfig> {
        serde_yaml::from_str(content).map_err(|e| HrmsError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    fn validate(config: &HrmsConfig) -> HrmsResult<()> {
        let code = &config.identity.default_employer_code;
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(HrmsError::InvalidConfig {
                field: "identity.default_employer_code".to_string(),
                message: format!("expected two ASCII letters, got '{}'", code),
            });
        }

        let max_wage = config.payroll.max_monthly_wage;
        if max_wage < Decimal::ZERO || max_wage.checked_mul(Decimal::from(12)).is_none() {
            return Err(HrmsError::InvalidConfig {
                field: "payroll.max_monthly_wage".to_string(),
                message: "must be non-negative and leave room for a yearly total".to_string(),
            });
        }

        let default_wage = config.payroll.default_monthly_wage;
        if default_wage < Decimal::ZERO || default_wage > max_wage {
            return Err(HrmsError::InvalidConfig {
                field: "payroll.default_monthly_wage".to_string(),
                message: format!("must be between 0 and {}", max_wage),
            });
        }

        if !(1..=7).contains(&config.payroll.default_working_days_per_week) {
            return Err(HrmsError::InvalidConfig {
                field: "payroll.default_working_days_per_week".to_string(),
                message: "must be between 1 and 7".to_string(),
            });
        }

        let break_hours = config.payroll.default_break_time_hours;
        if break_hours < Decimal::ZERO || break_hours > Decimal::new(24, 0) {
            return Err(HrmsError::InvalidConfig {
                field: "payroll.default_break_time_hours".to_string(),
                message: "must be between 0 and 24".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &HrmsConfig {
        &self.config
    }

    /// The uppercased two-letter fallback employer code.
    pub fn default_employer_code(&self) -> &str {
        &self.config.identity.default_employer_code
    }
}
