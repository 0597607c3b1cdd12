//! Property-based tests for obfuscation.
//!
//! - Property 5: Obfuscation preserves sign
//! - Property 6: Obfuscation preserves currency and divisor

use proptest::prelude::*;

use super::obfuscator::{OFFSET_RANGE, SCALE_RANGE, TripObfuscator, obfuscate_with};
use crate::currency::{CurrencyCode, TransitCurrency};

/// Strategy to generate non-zero amounts.
fn non_zero_amount() -> impl Strategy<Value = i64> {
    prop_oneof![
        -1_000_000_000_000i64..0,
        1i64..1_000_000_000_000,
        // Small values are the ones the offset can push across zero
        -200i64..0,
        1i64..200,
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// For any non-zero amount and any draw, the sign is kept.
    #[test]
    fn prop_obfuscate_with_preserves_sign(
        amount in non_zero_amount(),
        offset in OFFSET_RANGE,
        scale_bp in SCALE_RANGE,
    ) {
        let value = TransitCurrency::of(CurrencyCode::EUR, amount);
        let result = obfuscate_with(&value, offset, scale_bp);
        prop_assert_eq!(result.amount().signum(), amount.signum());
    }

    /// Zero never turns negative.
    #[test]
    fn prop_obfuscate_zero_is_non_negative(
        offset in OFFSET_RANGE,
        scale_bp in SCALE_RANGE,
    ) {
        let result = obfuscate_with(&TransitCurrency::xxx(0), offset, scale_bp);
        prop_assert!(!result.is_negative());
    }

    /// Across many seeds the random obfuscator keeps the sign, the currency
    /// and the divisor.
    #[test]
    fn prop_seeded_obfuscator_preserves_sign(
        seed in any::<u64>(),
        amount in non_zero_amount(),
        divisor in prop::sample::select(vec![1, 10, 100, 1000]),
    ) {
        let obfuscator = TripObfuscator::seeded(seed);
        let value = TransitCurrency::new(amount, CurrencyCode::JPY, divisor).unwrap();
        for _ in 0..8 {
            let result = obfuscator.obfuscate(&value);
            prop_assert_eq!(result.amount().signum(), amount.signum());
            prop_assert_eq!(result.currency_code(), CurrencyCode::JPY);
            prop_assert_eq!(result.divisor(), divisor);
        }
    }
}
