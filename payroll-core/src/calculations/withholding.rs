//! Monthly withholding tax bracket lookup.
//!
//! | Taxable income          | Fixed tax  | Rate | Over       |
//! |-------------------------|------------|------|------------|
//! | up to 20,833            | 0.00       | 0%   | 0          |
//! | up to 33,332            | 0.00       | 20%  | 20,833     |
//! | up to 66,666            | 2,500.00   | 25%  | 33,333     |
//! | up to 166,666           | 10,833.33  | 30%  | 66,667     |
//! | up to 666,666           | 40,833.33  | 32%  | 166,667    |
//! | above                   | 200,833.33 | 35%  | 666,667    |
//!
//! Income equal to a row's limit belongs to that row.

use rust_decimal::Decimal;
use tracing::trace;

use crate::{TaxBracketRow, WITHHOLDING_TAX_TABLE};

/// Finds the withholding tax bracket for `taxable_income`.
///
/// Rows are scanned in order and the first one whose upper bound admits the
/// income wins. The last row is unbounded, so every income resolves.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::resolve_bracket;
///
/// let row = resolve_bracket(dec!(33075.00));
///
/// assert_eq!(row.fixed_tax, dec!(0.00));
/// assert_eq!(row.marginal_rate, dec!(0.20));
/// assert_eq!(row.bracket_floor, dec!(20833.00));
/// ```
pub fn resolve_bracket(taxable_income: Decimal) -> &'static TaxBracketRow {
    let top = &WITHHOLDING_TAX_TABLE[WITHHOLDING_TAX_TABLE.len() - 1];

    let (index, row) = WITHHOLDING_TAX_TABLE
        .iter()
        .enumerate()
        .find(|(_, row)| row.upper_bound.admits(taxable_income))
        .unwrap_or((WITHHOLDING_TAX_TABLE.len() - 1, top));

    trace!(%taxable_income, bracket = index + 1, "resolved withholding bracket");
    row
}
