//! Salary structure assembly.
//!
//! This module validates wage inputs at the boundary and wraps the computed
//! components in a [`SalaryStructure`] with the derived yearly wage and the
//! working-pattern fields.

use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::error::{HrmsError, HrmsResult};
use crate::models::{EmployeeId, SalaryStructure};

use super::salary_components::{calculate_components, round_money};

/// Months in a payroll year.
pub const MONTHS_PER_YEAR: i64 = 12;

/// Raw inputs for a salary structure, as received from a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryInput {
    /// Monthly wage; must be non-negative.
    pub monthly_wage: Decimal,
    /// Working days per week, 1 to 7; config default when absent.
    pub working_days_per_week: Option<i64>,
    /// Break hours per day, 0 to 24; config default when absent.
    pub break_time_hours: Option<Decimal>,
}

/// Returns `monthly_wage * 12` rounded to two places.
///
/// Saturates at [`Decimal::MAX`]; callers bound the wage with
/// [`validate_monthly_wage`] first.
pub fn yearly_wage(monthly_wage: Decimal) -> Decimal {
    round_money(monthly_wage.saturating_mul(Decimal::from(MONTHS_PER_YEAR)))
}

/// Checks that a caller-supplied wage lies in `0..=max_monthly_wage`.
///
/// # Errors
///
/// Returns [`HrmsError::InvalidSalaryInput`] on field `monthly_wage`.
pub fn validate_monthly_wage(monthly_wage: Decimal, limits: &PayrollConfig) -> HrmsResult<()> {
    if monthly_wage < Decimal::ZERO {
        return Err(HrmsError::InvalidSalaryInput {
            field: "monthly_wage".to_string(),
            message: "Monthly wage must be at least 0.".to_string(),
        });
    }
    if monthly_wage > limits.max_monthly_wage {
        return Err(HrmsError::InvalidSalaryInput {
            field: "monthly_wage".to_string(),
            message: format!("Monthly wage must not exceed {}.", limits.max_monthly_wage),
        });
    }
    Ok(())
}

/// Validates the input and builds a salary structure.
///
/// # Errors
///
/// Returns [`HrmsError::InvalidSalaryInput`] when the wage is negative or
/// above `max_monthly_wage`, the working days fall outside 1..=7, or the
/// break hours fall outside 0..=24.
///
/// # Examples
///
/// ```
/// use hrms_engine::calculation::{SalaryInput, build_salary_structure};
/// use hrms_engine::config::PayrollConfig;
/// use hrms_engine::models::EmployeeId;
/// use rust_decimal::Decimal;
///
/// let structure = build_salary_structure(
///     EmployeeId::new("OIJODO20240001"),
///     &SalaryInput {
///         monthly_wage: Decimal::new(50000, 0),
///         working_days_per_week: None,
///         break_time_hours: None,
///     },
///     &PayrollConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(structure.yearly_wage, Decimal::new(600000, 0));
/// assert_eq!(structure.working_days_per_week, 5);
/// ```
pub fn build_salary_structure(
    employee_id: EmployeeId,
    input: &SalaryInput,
    defaults: &PayrollConfig,
) -> HrmsResult<SalaryStructure> {
    validate_monthly_wage(input.monthly_wage, defaults)?;

    let working_days_per_week = match input.working_days_per_week {
        Some(days) => u8::try_from(days)
            .ok()
            .filter(|d| (1..=7).contains(d))
            .ok_or_else(|| HrmsError::InvalidSalaryInput {
                field: "working_days_per_week".to_string(),
                message: format!("must be between 1 and 7, got {}", days),
            })?,
        None => defaults.default_working_days_per_week,
    };

    let break_time_hours = match input.break_time_hours {
        Some(hours) if hours < Decimal::ZERO || hours > Decimal::new(24, 0) => {
            return Err(HrmsError::InvalidSalaryInput {
                field: "break_time_hours".to_string(),
                message: format!("must be between 0 and 24, got {}", hours),
            });
        }
        Some(hours) => hours,
        None => defaults.default_break_time_hours,
    };

    Ok(SalaryStructure {
        employee_id,
        monthly_wage: round_money(input.monthly_wage),
        yearly_wage: yearly_wage(input.monthly_wage),
        working_days_per_week,
        break_time_hours,
        components: calculate_components(input.monthly_wage),
        updated_at: None,
    })
}

/// Builds the structure shown for an employee who has none stored, using
/// the configured default wage and working pattern.
pub fn default_salary_structure(employee_id: EmployeeId, defaults: &PayrollConfig) -> SalaryStructure {
    let monthly_wage = defaults.default_monthly_wage;

    SalaryStructure {
        employee_id,
        monthly_wage: round_money(monthly_wage),
        yearly_wage: yearly_wage(monthly_wage),
        working_days_per_week: defaults.default_working_days_per_week,
        break_time_hours: defaults.default_break_time_hours,
        components: calculate_components(monthly_wage),
        updated_at: None,
    }
}
