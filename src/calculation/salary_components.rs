//! Salary component calculation.
//!
//! This module decomposes a monthly wage into the nine salary components
//! using fixed percentage rules. All arithmetic is exact decimal arithmetic;
//! rounding to two places happens once per field at the end.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::SalaryComponents;

/// Number of fractional digits every component is rounded to.
pub const MONEY_SCALE: u32 = 2;

/// Share of the monthly wage paid as basic salary (50%).
pub fn basic_salary_rate() -> Decimal {
    Decimal::new(50, 2)
}

/// House rent allowance as a share of basic salary (50%).
pub fn hra_rate() -> Decimal {
    Decimal::new(50, 2)
}

/// Standard allowance as a share of basic salary (16.67%).
pub fn standard_allowance_rate() -> Decimal {
    Decimal::new(1667, 4)
}

/// Performance bonus as a share of basic salary (8.33%).
pub fn performance_bonus_rate() -> Decimal {
    Decimal::new(833, 4)
}

/// Leave travel allowance as a share of basic salary (8.33%).
pub fn lta_rate() -> Decimal {
    Decimal::new(833, 4)
}

/// Provident fund contribution as a share of basic salary (12%), applied
/// separately to the employee and employer sides.
pub fn provident_fund_rate() -> Decimal {
    Decimal::new(12, 2)
}

/// Flat monthly professional tax, independent of wage.
pub fn professional_tax() -> Decimal {
    Decimal::new(20000, 2)
}

/// Rounds to two places, half away from zero, and pins the scale so the
/// value always serializes with two decimals.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Calculates the salary components for a monthly wage.
///
/// ```text
/// basic_salary       = monthly_wage * 0.50
/// hra                = basic_salary * 0.50
/// standard_allowance = basic_salary * 0.1667
/// performance_bonus  = basic_salary * 0.0833
/// lta                = basic_salary * 0.0833
/// fixed_allowance    = monthly_wage - (the five above)
/// pf_employee        = basic_salary * 0.12
/// pf_employer        = basic_salary * 0.12
/// professional_tax   = 200.00
/// ```
///
/// Every field is rounded from its own unrounded value, `fixed_allowance`
/// included: it is the remainder of the unrounded intermediate sums. The six
/// earned fields therefore sum to the wage within two rounding units
/// (0.02).
///
/// The wage is expected to be non-negative; rejecting bad input is the
/// caller's job.
///
/// # Examples
///
/// ```
/// use hrms_engine::calculation::calculate_components;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let c = calculate_components(Decimal::from_str("50000").unwrap());
/// assert_eq!(c.basic_salary, Decimal::from_str("25000.00").unwrap());
/// assert_eq!(c.hra, Decimal::from_str("12500.00").unwrap());
/// assert_eq!(c.standard_allowance, Decimal::from_str("4167.50").unwrap());
/// assert_eq!(c.performance_bonus, Decimal::from_str("2082.50").unwrap());
/// assert_eq!(c.lta, Decimal::from_str("2082.50").unwrap());
/// assert_eq!(c.fixed_allowance, Decimal::from_str("4167.50").unwrap());
/// assert_eq!(c.pf_employee, Decimal::from_str("3000.00").unwrap());
/// assert_eq!(c.pf_employer, Decimal::from_str("3000.00").unwrap());
/// assert_eq!(c.professional_tax, Decimal::from_str("200.00").unwrap());
/// ```
pub fn calculate_components(monthly_wage: Decimal) -> SalaryComponents {
    let basic = monthly_wage * basic_salary_rate();

    let hra = basic * hra_rate();
    let standard_allowance = basic * standard_allowance_rate();
    let performance_bonus = basic * performance_bonus_rate();
    let lta = basic * lta_rate();

    let fixed_allowance =
        monthly_wage - (basic + hra + standard_allowance + performance_bonus + lta);

    let provident_fund = round_money(basic * provident_fund_rate());

    SalaryComponents {
        basic_salary: round_money(basic),
        hra: round_money(hra),
        standard_allowance: round_money(standard_allowance),
        performance_bonus: round_money(performance_bonus),
        lta: round_money(lta),
        fixed_allowance: round_money(fixed_allowance),
        pf_employee: provident_fund,
        pf_employer: provident_fund,
        professional_tax: round_money(professional_tax()),
    }
}
