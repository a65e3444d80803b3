//! Calculation logic for the HRMS engine.
//!
//! This module contains the payroll calculations: the decomposition of a
//! monthly wage into salary components, and the assembly of a validated
//! salary structure around those components.

mod salary_components;
mod salary_structure;

pub use salary_components::{
    MONEY_SCALE, basic_salary_rate, calculate_components, hra_rate, lta_rate,
    performance_bonus_rate, professional_tax, provident_fund_rate, round_money,
    standard_allowance_rate,
};
pub use salary_structure::{
    MONTHS_PER_YEAR, SalaryInput, build_salary_structure, default_salary_structure,
    validate_monthly_wage, yearly_wage,
};
