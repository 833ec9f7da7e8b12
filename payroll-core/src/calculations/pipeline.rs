//! Monthly payroll deduction pipeline.
//!
//! # Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | SSS contribution |
//! | 2    | PhilHealth contribution |
//! | 3    | Pag-IBIG contribution |
//! | 4    | Total contributions (Steps 1–3, rounded) |
//! | 5    | Taxable income (gross − Step 4) |
//! | 6    | Withholding tax bracket for Step 5 |
//! | 7    | Income tax: fixed tax + (Step 5 − floor) × rate, rounded |
//! | 8    | Net pay after tax (gross − Step 7, rounded) |
//! | 9    | Total deductions (Step 4 + Step 7, rounded) |
//! | 10   | Net pay after deductions (gross − Step 9, rounded) |
//!
//! Steps 1–3 stay unrounded. Step 5 subtracts the rounded total from Step 4,
//! not the raw sum, so a half-centavo in the contributions moves taxable
//! income by a full centavo.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::compute;
//!
//! let result = compute(dec!(35000.00));
//!
//! assert_eq!(result.total_contributions, dec!(1925.00));
//! assert_eq!(result.taxable_income, dec!(33075.00));
//! assert_eq!(result.income_tax, dec!(2448.40));
//! assert_eq!(result.net_salary, dec!(30626.60));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::calculations::common::round_half_up;
use crate::calculations::contributions::{
    health_insurance_contribution, housing_fund_contribution, social_security_contribution,
};
use crate::calculations::withholding::resolve_bracket;
use crate::{ComputationResult, TaxBracketRow};

/// Largest gross monthly salary [`compute`] accepts: one trillion pesos.
///
/// Salaries near `Decimal::MAX` would overflow the SSS credit offset.
pub const MAX_GROSS_SALARY: Decimal = dec!(1000000000000);

/// Computes every deduction and net pay figure for a gross monthly salary.
///
/// The salary must lie in `0..=MAX_GROSS_SALARY`; the input boundary rejects
/// anything else before it gets here.
pub fn compute(gross_salary: Decimal) -> ComputationResult {
    let sss_contribution = social_security_contribution(gross_salary);
    let philhealth_contribution = health_insurance_contribution(gross_salary);
    let pagibig_contribution = housing_fund_contribution(gross_salary);
    debug!(
        %gross_salary,
        sss = %sss_contribution,
        philhealth = %philhealth_contribution,
        pagibig = %pagibig_contribution,
        "computed contributions"
    );

    let total_contributions = total_contributions(
        sss_contribution,
        philhealth_contribution,
        pagibig_contribution,
    );
    let taxable_income = taxable_income(gross_salary, total_contributions);

    let bracket = resolve_bracket(taxable_income);
    let income_tax = income_tax(taxable_income, bracket);
    debug!(%total_contributions, %taxable_income, %income_tax, "computed withholding tax");

    let net_pay_after_tax = net_pay_after_tax(gross_salary, income_tax);
    let total_deductions = total_deductions(total_contributions, income_tax);
    let net_salary = net_salary(gross_salary, total_deductions);

    ComputationResult {
        gross_salary,
        sss_contribution,
        philhealth_contribution,
        pagibig_contribution,
        total_contributions,
        taxable_income,
        income_tax,
        net_pay_after_tax,
        total_deductions,
        net_salary,
    }
}

/// Sums the three contributions, rounded.
fn total_contributions(
    sss: Decimal,
    philhealth: Decimal,
    pagibig: Decimal,
) -> Decimal {
    round_half_up(sss + philhealth + pagibig)
}

/// Gross salary minus the already rounded total contributions.
fn taxable_income(
    gross_salary: Decimal,
    total_contributions: Decimal,
) -> Decimal {
    gross_salary - total_contributions
}

/// Applies a bracket to taxable income.
fn income_tax(
    taxable_income: Decimal,
    bracket: &TaxBracketRow,
) -> Decimal {
    let over_floor = (taxable_income - bracket.bracket_floor) * bracket.marginal_rate;
    round_half_up(bracket.fixed_tax + over_floor)
}

fn net_pay_after_tax(
    gross_salary: Decimal,
    income_tax: Decimal,
) -> Decimal {
    round_half_up(gross_salary - income_tax)
}

fn total_deductions(
    total_contributions: Decimal,
    income_tax: Decimal,
) -> Decimal {
    round_half_up(total_contributions + income_tax)
}

fn net_salary(
    gross_salary: Decimal,
    total_deductions: Decimal,
) -> Decimal {
    round_half_up(gross_salary - total_deductions)
}
