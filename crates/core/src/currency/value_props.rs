//! Property-based tests for currency values.
//!
//! - Property 1: Cross-divisor equality and hashing
//! - Property 2: Addition identity and divisor reconciliation
//! - Property 3: Negation is involutive
//! - Property 4: Wire representation preserves exact equality

use std::hash::{DefaultHasher, Hash, Hasher};

use proptest::prelude::*;

use super::code::CurrencyCode;
use super::value::TransitCurrency;

/// Strategy to generate amounts well inside `i64` (about +/- 10^12).
fn amount() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..1_000_000_000_000i64
}

/// Strategy to generate positive divisors up to 10^6.
fn divisor() -> impl Strategy<Value = i32> {
    1i32..=1_000_000
}

/// Strategy to pick a currency code.
fn code() -> impl Strategy<Value = CurrencyCode> {
    prop::sample::select(vec![
        CurrencyCode::AUD,
        CurrencyCode::EUR,
        CurrencyCode::JPY,
        CurrencyCode::USD,
        CurrencyCode::XXX,
    ])
}

/// Strategy to generate arbitrary valid values.
fn value() -> impl Strategy<Value = TransitCurrency> {
    (amount(), code(), divisor())
        .prop_map(|(amount, code, divisor)| TransitCurrency::new(amount, code, divisor).unwrap())
}

fn hash_of(value: &TransitCurrency) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // =========================================================================
    // Property 1: Cross-divisor equality and hashing
    // =========================================================================

    /// Scaling amount and divisor by the same factor keeps the value equal,
    /// but not exactly equal, and keeps the hash.
    #[test]
    fn prop_scaled_values_are_equal(
        amount in -1_000_000_000i64..1_000_000_000i64,
        code in code(),
        divisor in 1i32..10_000,
        factor in 2i32..100,
    ) {
        let base = TransitCurrency::new(amount, code, divisor).unwrap();
        let scaled = TransitCurrency::new(
            amount * i64::from(factor),
            code,
            divisor * factor,
        ).unwrap();

        prop_assert_eq!(base, scaled);
        prop_assert!(!base.exactly_equals(&scaled));
        prop_assert_eq!(hash_of(&base), hash_of(&scaled));
    }

    /// Exact equality implies equality.
    #[test]
    fn prop_exact_equality_is_narrower(a in value(), b in value()) {
        if a.exactly_equals(&b) {
            prop_assert_eq!(a, b);
        }
        prop_assert!(a.exactly_equals(&a));
    }

    // =========================================================================
    // Property 2: Addition
    // =========================================================================

    /// Adding nothing returns the same value, divisor included.
    #[test]
    fn prop_add_none_is_identity(v in value()) {
        prop_assert!(v.checked_add(None).unwrap().exactly_equals(&v));
    }

    /// Addition is nominally correct whatever the divisors.
    #[test]
    fn prop_add_matches_rational_sum(
        a in -1_000_000i64..1_000_000,
        b in -1_000_000i64..1_000_000,
        da in 1i32..1_000,
        db in 1i32..1_000,
    ) {
        let left = TransitCurrency::new(a, CurrencyCode::USD, da).unwrap();
        let right = TransitCurrency::new(b, CurrencyCode::USD, db).unwrap();
        let sum = left.checked_add(Some(&right)).unwrap();

        // a/da + b/db == sum.amount / sum.divisor
        let lhs = (i128::from(a) * i128::from(db) + i128::from(b) * i128::from(da))
            * i128::from(sum.divisor());
        let rhs = i128::from(sum.amount()) * i128::from(da) * i128::from(db);
        prop_assert_eq!(lhs, rhs);

        // The result never uses a divisor smaller than either operand's
        prop_assert!(sum.divisor() >= da.max(db));
    }

    /// Addition is commutative up to exact equality.
    #[test]
    fn prop_add_is_commutative(
        a in -1_000_000i64..1_000_000,
        b in -1_000_000i64..1_000_000,
        da in 1i32..1_000,
        db in 1i32..1_000,
    ) {
        let left = TransitCurrency::new(a, CurrencyCode::EUR, da).unwrap();
        let right = TransitCurrency::new(b, CurrencyCode::EUR, db).unwrap();
        let ab = left.checked_add(Some(&right)).unwrap();
        let ba = right.checked_add(Some(&left)).unwrap();
        prop_assert!(ab.exactly_equals(&ba));
    }

    // =========================================================================
    // Property 3: Negation
    // =========================================================================

    /// Negating twice returns the original value exactly, for any amount.
    #[test]
    fn prop_negate_is_involutive(
        amount in any::<i64>(),
        code in code(),
        divisor in divisor(),
    ) {
        let v = TransitCurrency::new(amount, code, divisor).unwrap();
        prop_assert!(v.negate().negate().exactly_equals(&v));
    }

    /// A value plus its negation is zero.
    #[test]
    fn prop_negate_cancels(v in value()) {
        prop_assert!(v.negate().checked_add(Some(&v)).unwrap().is_zero());
    }

    // =========================================================================
    // Property 4: Wire representation
    // =========================================================================

    /// Decoding an encoded value reproduces it exactly.
    #[test]
    fn prop_wire_preserves_exact_equality(v in value()) {
        let json = serde_json::to_string(&v).unwrap();
        let back: TransitCurrency = serde_json::from_str(&json).unwrap();
        prop_assert!(back.exactly_equals(&v));
    }
}
