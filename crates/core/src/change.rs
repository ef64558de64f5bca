//! Percentage-change formula.

use rust_decimal::Decimal;

/// Percentage change from `old` to `new`: `(new - old) / old * 100`.
///
/// Returns zero when `old` is zero or the result does not fit in a `Decimal`.
#[must_use]
pub fn percent_change(new: Decimal, old: Decimal) -> Decimal {
    if old.is_zero() {
        return Decimal::ZERO;
    }

    new.checked_sub(old)
        .and_then(|delta| delta.checked_div(old))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(110), dec!(100), dec!(10))]
    #[case(dec!(90), dec!(100), dec!(-10))]
    #[case(dec!(100), dec!(100), dec!(0))]
    #[case(dec!(0), dec!(50), dec!(-100))]
    #[case(dec!(150), dec!(0), dec!(0))]
    #[case(dec!(0), dec!(0), dec!(0))]
    #[case(dec!(-20), dec!(-10), dec!(100))]
    fn test_percent_change(#[case] new: Decimal, #[case] old: Decimal, #[case] expected: Decimal) {
        assert_eq!(percent_change(new, old), expected);
    }

    #[rstest]
    #[case::tiny_baseline(Decimal::MAX, Decimal::new(1, 28))]
    #[case::ratio_overflows_on_scaling(Decimal::MAX, dec!(2))]
    #[case::difference_overflows(Decimal::MAX, Decimal::MIN)]
    fn test_percent_change_overflow_is_zero(#[case] new: Decimal, #[case] old: Decimal) {
        assert_eq!(percent_change(new, old), Decimal::ZERO);
    }

    proptest! {
        /// A zero baseline always yields zero.
        #[test]
        fn prop_zero_baseline_is_zero(new in -1_000_000_000i64..1_000_000_000) {
            prop_assert_eq!(percent_change(Decimal::new(new, 2), Decimal::ZERO), Decimal::ZERO);
        }

        /// A non-zero baseline follows the formula exactly.
        #[test]
        fn prop_nonzero_baseline_matches_formula(
            new in -1_000_000_000i64..1_000_000_000,
            old in 1i64..1_000_000_000,
            negate in any::<bool>(),
        ) {
            let new = Decimal::new(new, 2);
            let old = if negate { Decimal::new(-old, 2) } else { Decimal::new(old, 2) };
            prop_assert_eq!(
                percent_change(new, old),
                (new - old) / old * Decimal::ONE_HUNDRED
            );
        }
    }
}
