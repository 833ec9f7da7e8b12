//! Rendering of a [`ComputationResult`] for the terminal.
//!
//! ## Text layout
//!
//! ```text
//! Monthly Contributions
//! SSS                        PHP 900.00
//! PhilHealth                 PHP 400.00
//! Pag-IBIG                   PHP 100.00
//! Total Contributions        PHP 1400.00
//!
//! Tax Computation
//! Taxable Income             PHP 18600.00
//! Income Tax                 PHP 0.00
//! Net Pay After Tax          PHP 20000.00
//!
//! Total Deductions           PHP 1400.00
//! Net Pay After Deductions   PHP 18600.00
//! ```
//!
//! ## CSV layout
//!
//! One header row and one data row, columns in the same order as the text
//! layout, amounts without the currency prefix.

use std::fmt::Write;

use clap::ValueEnum;
use payroll_core::ComputationResult;
use payroll_core::calculations::common::round_half_up;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Label column width of the text report.
const LABEL_WIDTH: usize = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to format report: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV report is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Formats a peso amount with exactly two decimal places.
///
/// Unrounded contributions are rounded half away from zero for display only.
/// A negative amount that rounds to zero prints as `0.00`.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = round_half_up(amount);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(2);
    rounded.to_string()
}

#[derive(Debug, Serialize)]
struct CsvRow {
    sss: String,
    philhealth: String,
    pagibig: String,
    total_contributions: String,
    taxable_income: String,
    income_tax: String,
    net_pay_after_tax: String,
    total_deductions: String,
    net_pay_after_deductions: String,
}

impl From<&ComputationResult> for CsvRow {
    fn from(result: &ComputationResult) -> Self {
        Self {
            sss: format_amount(result.sss_contribution),
            philhealth: format_amount(result.philhealth_contribution),
            pagibig: format_amount(result.pagibig_contribution),
            total_contributions: format_amount(result.total_contributions),
            taxable_income: format_amount(result.taxable_income),
            income_tax: format_amount(result.income_tax),
            net_pay_after_tax: format_amount(result.net_pay_after_tax),
            total_deductions: format_amount(result.total_deductions),
            net_pay_after_deductions: format_amount(result.net_salary),
        }
    }
}

/// Renders the result in the requested format.
pub fn render(
    result: &ComputationResult,
    format: OutputFormat,
) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Csv => render_csv(result),
    }
}

fn write_line(
    out: &mut String,
    label: &str,
    amount: Decimal,
) -> std::fmt::Result {
    writeln!(out, "{label:<LABEL_WIDTH$} PHP {}", format_amount(amount))
}

fn render_text(result: &ComputationResult) -> Result<String, ReportError> {
    let mut out = String::new();

    writeln!(out, "Monthly Contributions")?;
    write_line(&mut out, "SSS", result.sss_contribution)?;
    write_line(&mut out, "PhilHealth", result.philhealth_contribution)?;
    write_line(&mut out, "Pag-IBIG", result.pagibig_contribution)?;
    write_line(&mut out, "Total Contributions", result.total_contributions)?;
    writeln!(out)?;

    writeln!(out, "Tax Computation")?;
    write_line(&mut out, "Taxable Income", result.taxable_income)?;
    write_line(&mut out, "Income Tax", result.income_tax)?;
    write_line(&mut out, "Net Pay After Tax", result.net_pay_after_tax)?;
    writeln!(out)?;

    write_line(&mut out, "Total Deductions", result.total_deductions)?;
    write_line(&mut out, "Net Pay After Deductions", result.net_salary)?;

    Ok(out)
}

fn render_csv(result: &ComputationResult) -> Result<String, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.serialize(CsvRow::from(result))?;

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
