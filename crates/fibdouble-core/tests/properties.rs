//! Property-based tests for the Fast Doubling engine.

use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use proptest::prelude::*;

use fibdouble_core::calculator::{CoreCalculator, FibCalculator};
use fibdouble_core::fastdoubling::FastDoubling;
use fibdouble_core::parse_index;

fn compute_core(n: u64) -> BigUint {
    FastDoubling::new().calculate_core(n)
}

fn iterative(n: u64) -> BigUint {
    let (mut prev, mut cur) = (BigUint::zero(), BigUint::one());
    for _ in 0..n {
        let next = &prev + &cur;
        prev = std::mem::replace(&mut cur, next);
    }
    prev
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// F(n) + F(n+1) == F(n+2) for random n.
    #[test]
    fn fibonacci_addition_property(n in 0u64..5000) {
        let fn_val = compute_core(n);
        let fn1_val = compute_core(n + 1);
        let fn2_val = compute_core(n + 2);
        prop_assert_eq!(&fn_val + &fn1_val, fn2_val, "F({}) + F({}) != F({})", n, n + 1, n + 2);
    }

    /// Fast Doubling agrees with repeated addition.
    #[test]
    fn matches_iterative(n in 0u64..1500) {
        prop_assert_eq!(compute_core(n), iterative(n));
    }

    /// n1 < n2 implies F(n1) <= F(n2).
    #[test]
    fn monotonic(n1 in 0u64..4000, gap in 1u64..200) {
        let n2 = n1 + gap;
        prop_assert!(compute_core(n1) <= compute_core(n2));
    }

    /// F(2k) = F(k) * (2*F(k+1) - F(k)).
    #[test]
    fn doubling_identity(k in 1u64..3000) {
        let fk = compute_core(k);
        let fk1 = compute_core(k + 1);
        let expected = &fk * ((&fk1 << 1u32) - &fk);
        prop_assert_eq!(compute_core(2 * k), expected);
    }

    /// Repeated timed runs yield the same value and digit count.
    #[test]
    fn idempotent(n in 0u64..3000) {
        let calc = FibCalculator::new(Arc::new(FastDoubling::new()));
        let first = calc.calculate(n).unwrap();
        let second = calc.calculate(n).unwrap();
        prop_assert_eq!(&first.value, &second.value);
        prop_assert_eq!(first.value.to_string().len(), second.value.to_string().len());
    }

    /// Any rendered u64 parses back to itself.
    #[test]
    fn parse_index_accepts_decimal(n in any::<u64>()) {
        prop_assert_eq!(parse_index(&n.to_string()).unwrap(), n);
    }

    /// Negative numbers are always rejected.
    #[test]
    fn parse_index_rejects_negative(n in 1i64..i64::MAX) {
        prop_assert!(parse_index(&(-n).to_string()).is_err());
    }
}
