use rust_decimal::Decimal;

/// Every figure reported for one monthly payroll computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputationResult {
    pub gross_salary: Decimal,

    // Contributions, unrounded
    pub sss_contribution: Decimal,
    pub philhealth_contribution: Decimal,
    pub pagibig_contribution: Decimal,

    // Rounded to two decimal places; taxable income is gross salary minus
    // the rounded total
    pub total_contributions: Decimal,
    pub taxable_income: Decimal,
    pub income_tax: Decimal,
    pub net_pay_after_tax: Decimal,
    pub total_deductions: Decimal,
    pub net_salary: Decimal,
}
