//! Full reports compared against fixture files, starting from raw salary text
//! the way the binary receives it.

use std::fs;
use std::path::PathBuf;

use payroll_cli::{OutputFormat, SalaryInputError, parse_salary, render};
use payroll_core::compute;
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> String {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", name]
        .iter()
        .collect();
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

fn report_for(
    input: &str,
    format: OutputFormat,
) -> String {
    let salary = parse_salary(input).expect("salary should parse");
    render(&compute(salary), format).expect("report should render")
}

#[test]
fn text_report_matches_fixture() {
    assert_eq!(
        report_for("20000", OutputFormat::Text),
        fixture("report_20000.txt")
    );
}

#[test]
fn text_report_is_identical_for_formatted_input() {
    assert_eq!(
        report_for(" 20,000.00\n", OutputFormat::Text),
        fixture("report_20000.txt")
    );
}

#[test]
fn csv_report_for_zero_salary_matches_fixture() {
    assert_eq!(report_for("0", OutputFormat::Csv), fixture("report_0.csv"));
}

#[test]
fn negative_salary_never_reaches_the_pipeline() {
    let err = parse_salary("-20000").unwrap_err();

    assert!(matches!(err, SalaryInputError::Negative(_)));
    assert_eq!(err.to_string(), "salary must not be negative, got -20000");
}

#[test]
fn salary_beyond_ceiling_never_reaches_the_pipeline() {
    let err = parse_salary("79,228,162,514,264,337,593,543,950,335").unwrap_err();

    assert!(matches!(err, SalaryInputError::TooLarge(_)));
    assert_eq!(
        err.to_string(),
        "salary must not exceed 1000000000000, got 79228162514264337593543950335"
    );
}

#[test]
fn ceiling_salary_renders_a_report() {
    let report = report_for("1000000000000", OutputFormat::Text);

    assert!(report.contains("Income Tax                 PHP 349999966511.13\n"));
    assert!(report.contains("Net Pay After Deductions   PHP 650000030663.87\n"));
}
