//! GMP-based Fast Doubling using the `rug` crate.
//!
//! Only available when the `gmp` feature is enabled. Runs the same register
//! loop as [`crate::fastdoubling`], with `mpz_addmul` for the `a += bq` term.

use num_bigint::BigUint;
use num_integer::Integer as _;
use rug::integer::Order;
use rug::{Assign, Integer};
use tracing::debug;

use crate::calculator::CoreCalculator;

/// Fast Doubling calculator on GMP integers.
#[derive(Debug, Default, Clone, Copy)]
pub struct GmpFastDoubling;

impl GmpFastDoubling {
    /// Create a new `GmpFastDoubling` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CoreCalculator for GmpFastDoubling {
    fn calculate_core(&self, n: u64) -> BigUint {
        let mut a = Integer::from(1);
        let mut b = Integer::new();
        let mut p = Integer::new();
        let mut q = Integer::from(1);
        let mut tmp = Integer::new();

        let mut index = n;
        let mut steps = 0u32;
        while index > 0 {
            if index.is_even() {
                tmp.assign(q.square_ref());
                q *= &p;
                q <<= 1u32;
                q += &tmp;
                p.square_mut();
                p += &tmp;
                index /= 2;
            } else {
                tmp.assign(&a * &q);
                a *= &p;
                a += &b * &q;
                a += &tmp;
                b *= &p;
                b += &tmp;
                index -= 1;
            }
            steps += 1;
        }
        debug!(n, steps, "gmp fast doubling loop finished");

        BigUint::from_bytes_le(&b.to_digits::<u8>(Order::Lsf))
    }

    fn name(&self) -> &'static str {
        "GmpFastDoubling"
    }
}
