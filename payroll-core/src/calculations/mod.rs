//! Payroll calculation modules.
//!
//! Contributions are computed from gross salary, the withholding tax bracket
//! is resolved from taxable income, and the pipeline chains both with the
//! rounding checkpoints the BIR worksheet uses.

pub mod common;
pub mod contributions;
pub mod pipeline;
pub mod withholding;

pub use contributions::{
    health_insurance_contribution, housing_fund_contribution, monthly_salary_credit,
    social_security_contribution,
};
pub use pipeline::{MAX_GROSS_SALARY, compute};
pub use withholding::resolve_bracket;
