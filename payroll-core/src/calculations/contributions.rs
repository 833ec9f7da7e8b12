//! Employee share of the three mandatory monthly contributions.
//!
//! | Agency     | Base                                 | Employee share              |
//! |------------|--------------------------------------|-----------------------------|
//! | SSS        | Monthly salary credit (MSC)          | MSC × 4.5%, minimum 135.00  |
//! | PhilHealth | Salary, flat below 10k / above 80k   | Premium ÷ 2                 |
//! | Pag-IBIG   | Salary, capped at 5,000.00           | 1% up to 1,500.00, else 2%  |
//!
//! None of these results are rounded; rounding first happens when the
//! pipeline totals them.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::calculations::{
//!     health_insurance_contribution, housing_fund_contribution, social_security_contribution,
//! };
//!
//! let salary = dec!(20000.00);
//!
//! assert_eq!(social_security_contribution(salary), dec!(900.00));
//! assert_eq!(health_insurance_contribution(salary), dec!(400.00));
//! assert_eq!(housing_fund_contribution(salary), dec!(100.00));
//! ```

use rust_decimal::Decimal;

use crate::CONTRIBUTION_SCHEDULE;

/// Computes the SSS monthly salary credit.
///
/// The salary is snapped to the nearest 500.00 step with
/// `floor((salary + 250) / 500) * 500` and capped at 25,000.00. The result
/// keeps full precision.
pub fn monthly_salary_credit(salary: Decimal) -> Decimal {
    let schedule = &CONTRIBUTION_SCHEDULE;

    let steps = ((salary + schedule.sss_credit_offset) / schedule.sss_credit_step).floor();
    (steps * schedule.sss_credit_step).min(schedule.sss_credit_cap)
}

/// Employee SSS contribution: 4.5% of the monthly salary credit.
///
/// Credits below 3,250.00 pay the fixed 135.00 instead, including a zero
/// salary.
pub fn social_security_contribution(salary: Decimal) -> Decimal {
    let schedule = &CONTRIBUTION_SCHEDULE;

    let credit = monthly_salary_credit(salary);
    if credit < schedule.sss_minimum_credit {
        return schedule.sss_minimum_contribution;
    }
    credit * schedule.sss_rate
}

/// Employee PhilHealth contribution, half of the monthly premium.
pub fn health_insurance_contribution(salary: Decimal) -> Decimal {
    let schedule = &CONTRIBUTION_SCHEDULE;

    let premium = if salary <= schedule.philhealth_salary_floor {
        schedule.philhealth_floor_premium
    } else if salary >= schedule.philhealth_salary_ceiling {
        schedule.philhealth_ceiling_premium
    } else {
        salary * schedule.philhealth_rate
    };

    premium / schedule.philhealth_employee_divisor
}

/// Employee Pag-IBIG contribution.
pub fn housing_fund_contribution(salary: Decimal) -> Decimal {
    let schedule = &CONTRIBUTION_SCHEDULE;

    let capped = salary.min(schedule.pagibig_salary_cap);
    let rate = if capped <= schedule.pagibig_low_salary_limit {
        schedule.pagibig_low_rate
    } else {
        schedule.pagibig_rate
    };

    capped * rate
}
