//! Rounding shared by the payroll pipeline.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a peso amount to exactly two decimal places, half away from zero.
///
/// Every rounding checkpoint of the pipeline goes through this function, so
/// a centavo value at exactly 0.005 always rounds up in magnitude.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(488.498)), dec!(488.50));
/// assert_eq!(round_half_up(dec!(909.4134)), dec!(909.41));
/// assert_eq!(round_half_up(dec!(2499.875)), dec!(2499.88));
/// assert_eq!(round_half_up(dec!(-0.125)), dec!(-0.13)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
