use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Upper limit of a withholding tax bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperBound {
    /// Inclusive limit: income equal to the bound stays in this bracket.
    AtMost(Decimal),
    /// The top bracket has no limit.
    Unbounded,
}

impl UpperBound {
    /// Returns `true` if `income` does not exceed this bound.
    pub fn admits(
        &self,
        income: Decimal,
    ) -> bool {
        match self {
            Self::AtMost(limit) => income <= *limit,
            Self::Unbounded => true,
        }
    }
}

/// One row of the monthly withholding tax table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracketRow {
    pub upper_bound: UpperBound,
    pub fixed_tax: Decimal,
    pub marginal_rate: Decimal,
    /// Compensation level subtracted from taxable income before the rate applies.
    pub bracket_floor: Decimal,
}

impl TaxBracketRow {
    const fn new(
        upper_bound: UpperBound,
        fixed_tax: Decimal,
        marginal_rate: Decimal,
        bracket_floor: Decimal,
    ) -> Self {
        Self {
            upper_bound,
            fixed_tax,
            marginal_rate,
            bracket_floor,
        }
    }
}

/// Monthly withholding tax table (BIR, 2022), ordered by upper bound.
///
/// Only the last row is [`UpperBound::Unbounded`].
pub static WITHHOLDING_TAX_TABLE: [TaxBracketRow; 6] = [
    TaxBracketRow::new(
        UpperBound::AtMost(dec!(20833)),
        Decimal::ZERO,
        Decimal::ZERO,
        Decimal::ZERO,
    ),
    TaxBracketRow::new(
        UpperBound::AtMost(dec!(33332)),
        Decimal::ZERO,
        dec!(0.20),
        dec!(20833),
    ),
    TaxBracketRow::new(
        UpperBound::AtMost(dec!(66666)),
        dec!(2500),
        dec!(0.25),
        dec!(33333),
    ),
    TaxBracketRow::new(
        UpperBound::AtMost(dec!(166666)),
        dec!(10833.33),
        dec!(0.30),
        dec!(66667),
    ),
    TaxBracketRow::new(
        UpperBound::AtMost(dec!(666666)),
        dec!(40833.33),
        dec!(0.32),
        dec!(166667),
    ),
    TaxBracketRow::new(
        UpperBound::Unbounded,
        dec!(200833.33),
        dec!(0.35),
        dec!(666667),
    ),
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // UpperBound tests
    // =========================================================================

    #[test]
    fn at_most_admits_value_equal_to_limit() {
        let bound = UpperBound::AtMost(dec!(20833.00));

        assert!(bound.admits(dec!(20833.00)));
    }

    #[test]
    fn at_most_rejects_value_above_limit() {
        let bound = UpperBound::AtMost(dec!(20833.00));

        assert!(!bound.admits(dec!(20833.01)));
    }

    #[test]
    fn unbounded_admits_anything() {
        assert!(UpperBound::Unbounded.admits(Decimal::MAX));
        assert!(UpperBound::Unbounded.admits(Decimal::ZERO));
    }

    // =========================================================================
    // table shape tests
    // =========================================================================

    #[test]
    fn table_upper_bounds_strictly_increase() {
        let limits: Vec<Decimal> = WITHHOLDING_TAX_TABLE
            .iter()
            .filter_map(|row| match row.upper_bound {
                UpperBound::AtMost(limit) => Some(limit),
                UpperBound::Unbounded => None,
            })
            .collect();

        assert_eq!(limits.len(), 5);
        assert!(limits.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn only_last_row_is_unbounded() {
        let (last, rest) = WITHHOLDING_TAX_TABLE.split_last().unwrap();

        assert_eq!(last.upper_bound, UpperBound::Unbounded);
        assert!(
            rest.iter()
                .all(|row| row.upper_bound != UpperBound::Unbounded)
        );
    }

    #[test]
    fn rates_are_fractions() {
        for row in &WITHHOLDING_TAX_TABLE {
            assert!(row.marginal_rate >= Decimal::ZERO);
            assert!(row.marginal_rate <= Decimal::ONE);
        }
    }

    #[test]
    fn bounded_rows_match_published_schedule() {
        let rows: Vec<(UpperBound, Decimal, Decimal, Decimal)> = WITHHOLDING_TAX_TABLE[..5]
            .iter()
            .map(|row| (row.upper_bound, row.fixed_tax, row.marginal_rate, row.bracket_floor))
            .collect();

        assert_eq!(
            rows,
            vec![
                (UpperBound::AtMost(dec!(20833.00)), dec!(0.00), dec!(0.00), dec!(0.00)),
                (UpperBound::AtMost(dec!(33332.00)), dec!(0.00), dec!(0.20), dec!(20833.00)),
                (UpperBound::AtMost(dec!(66666.00)), dec!(2500.00), dec!(0.25), dec!(33333.00)),
                (UpperBound::AtMost(dec!(166666.00)), dec!(10833.33), dec!(0.30), dec!(66667.00)),
                (UpperBound::AtMost(dec!(666666.00)), dec!(40833.33), dec!(0.32), dec!(166667.00)),
            ]
        );
    }

    #[test]
    fn top_row_matches_published_schedule() {
        let top = WITHHOLDING_TAX_TABLE[5];

        assert_eq!(top.fixed_tax, dec!(200833.33));
        assert_eq!(top.marginal_rate, dec!(0.35));
        assert_eq!(top.bracket_floor, dec!(666667.00));
    }
}
