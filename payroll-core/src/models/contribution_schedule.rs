use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Statutory constants for the three employee contributions (2022 rates).
///
/// The values are fixed for one annual schedule and live in the
/// [`CONTRIBUTION_SCHEDULE`] static.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionSchedule {
    // SSS
    /// Added to the salary before it is snapped to a credit step.
    pub sss_credit_offset: Decimal,
    /// Width of one monthly salary credit step.
    pub sss_credit_step: Decimal,
    /// Highest monthly salary credit.
    pub sss_credit_cap: Decimal,
    /// Credits below this pay the fixed minimum instead of the rate.
    pub sss_minimum_credit: Decimal,
    pub sss_minimum_contribution: Decimal,
    pub sss_rate: Decimal,

    // PhilHealth
    /// Salaries at or below this pay the flat floor premium.
    pub philhealth_salary_floor: Decimal,
    /// Salaries at or above this pay the flat ceiling premium.
    pub philhealth_salary_ceiling: Decimal,
    pub philhealth_floor_premium: Decimal,
    pub philhealth_ceiling_premium: Decimal,
    pub philhealth_rate: Decimal,
    /// The premium is split between employer and employee.
    pub philhealth_employee_divisor: Decimal,

    // Pag-IBIG
    /// Salary is clamped to this before the rate applies.
    pub pagibig_salary_cap: Decimal,
    /// Clamped salaries at or below this use the lower rate.
    pub pagibig_low_salary_limit: Decimal,
    pub pagibig_low_rate: Decimal,
    pub pagibig_rate: Decimal,
}

pub static CONTRIBUTION_SCHEDULE: ContributionSchedule = ContributionSchedule {
    sss_credit_offset: dec!(250),
    sss_credit_step: dec!(500),
    sss_credit_cap: dec!(25000),
    sss_minimum_credit: dec!(3250),
    sss_minimum_contribution: dec!(135),
    sss_rate: dec!(0.045),

    philhealth_salary_floor: dec!(10000),
    philhealth_salary_ceiling: dec!(80000),
    philhealth_floor_premium: dec!(400),
    philhealth_ceiling_premium: dec!(3200),
    philhealth_rate: dec!(0.04),
    philhealth_employee_divisor: dec!(2),

    pagibig_salary_cap: dec!(5000),
    pagibig_low_salary_limit: dec!(1500),
    pagibig_low_rate: dec!(0.01),
    pagibig_rate: dec!(0.02),
};
