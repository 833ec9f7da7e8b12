use std::io::{self, BufRead, Write};

use payroll_core::MAX_GROSS_SALARY;
use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a salary string is rejected before it reaches the pipeline.
#[derive(Debug, Error)]
pub enum SalaryInputError {
    #[error("no salary entered")]
    Empty,

    #[error("invalid salary '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("salary must not be negative, got {0}")]
    Negative(Decimal),

    #[error("salary must not exceed {max}, got {0}", max = MAX_GROSS_SALARY)]
    TooLarge(Decimal),
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a gross monthly salary.
///
/// Accepts comma thousands separators (e.g. `"1,234.56"`) and surrounding
/// whitespace. Empty input, text that is not a decimal, negative amounts and
/// amounts above [`MAX_GROSS_SALARY`] are errors.
pub fn parse_salary(s: &str) -> Result<Decimal, SalaryInputError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Err(SalaryInputError::Empty);
    }

    let salary: Decimal = normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid salary: {}", e);
        SalaryInputError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })?;

    // "-0" parses with its sign bit set
    if salary.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if salary.is_sign_negative() {
        return Err(SalaryInputError::Negative(salary));
    }
    if salary > MAX_GROSS_SALARY {
        return Err(SalaryInputError::TooLarge(salary));
    }
    Ok(salary)
}

/// Asks for the salary on `output` and reads one line from `input`.
///
/// A blank line is written after the answer so the report starts on its own
/// paragraph.
pub fn prompt_salary<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> io::Result<String> {
    write!(output, "Enter total monthly salary: PHP ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    writeln!(output)?;

    Ok(line)
}
