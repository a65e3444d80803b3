//! Salary models for the payroll calculator.
//!
//! [`SalaryComponents`] is the nine-field breakdown of a monthly wage and
//! [`SalaryStructure`] is the persisted wage summary built around it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeId;

/// The breakdown of a monthly wage into named components.
///
/// The six earned components (`basic_salary` through `fixed_allowance`) sum
/// to the monthly wage they were derived from, within 0.02 of rounding.
///
/// # Example
///
/// ```
/// use hrms_engine::calculation::calculate_components;
/// use rust_decimal::Decimal;
///
/// let components = calculate_components(Decimal::new(50000, 0));
/// assert_eq!(components.earned_total(), Decimal::new(50000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComponents {
    /// Base pay.
    pub basic_salary: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Standard allowance.
    pub standard_allowance: Decimal,
    /// Performance bonus.
    pub performance_bonus: Decimal,
    /// Leave travel allowance.
    pub lta: Decimal,
    /// Remainder that balances the earned components against the wage.
    pub fixed_allowance: Decimal,
    /// Provident fund contribution deducted from the employee.
    pub pf_employee: Decimal,
    /// Provident fund contribution paid by the employer.
    pub pf_employer: Decimal,
    /// Flat professional tax deduction.
    pub professional_tax: Decimal,
}

impl SalaryComponents {
    /// Sum of the six earned components.
    pub fn earned_total(&self) -> Decimal {
        self.basic_salary
            + self.hra
            + self.standard_allowance
            + self.performance_bonus
            + self.lta
            + self.fixed_allowance
    }

    /// Employee-side deductions: provident fund plus professional tax.
    pub fn employee_deductions(&self) -> Decimal {
        self.pf_employee + self.professional_tax
    }

    /// Earned total less employee-side deductions.
    pub fn net_monthly_pay(&self) -> Decimal {
        self.earned_total() - self.employee_deductions()
    }
}

/// A salary structure for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// The employee this structure belongs to.
    pub employee_id: EmployeeId,
    /// The monthly wage the components were derived from.
    pub monthly_wage: Decimal,
    /// `monthly_wage * 12`.
    pub yearly_wage: Decimal,
    /// Working days in a week, 1 to 7.
    pub working_days_per_week: u8,
    /// Daily break allowance in hours, 0 to 24.
    pub break_time_hours: Decimal,
    /// The calculated components.
    #[serde(flatten)]
    pub components: SalaryComponents,
    /// When the structure was last written; absent for computed defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
