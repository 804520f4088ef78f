//! Fast Doubling over a binary decomposition of the index.
//!
//! Consumes the index from the least significant end. An even index doubles
//! the step held in `(p, q)`; an odd index folds that step into the
//! accumulator `(a, b)`. When the index reaches zero, `b` holds F(n).
//!
//! The doubling pair follows
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k)^2 + F(k+1)^2

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use tracing::debug;

use crate::calculator::CoreCalculator;

/// Register file for one Fast Doubling computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator, first register.
    pub a: BigUint,
    /// Accumulator, second register. Holds F(n) at the end.
    pub b: BigUint,
    /// Doubling pair, first register.
    pub p: BigUint,
    /// Doubling pair, second register.
    pub q: BigUint,
    /// Scratch register.
    pub tmp: BigUint,
}

impl Registers {
    /// Create registers with `(a, b) = (1, 0)` and `(p, q) = (0, 1)`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: BigUint::one(),
            b: BigUint::zero(),
            p: BigUint::zero(),
            q: BigUint::one(),
            tmp: BigUint::zero(),
        }
    }

    /// Square the doubling step.
    ///
    /// `tmp = q^2`, `q = 2pq + tmp`, `p = p^2 + tmp`.
    pub fn step_even(&mut self) {
        self.tmp = &self.q * &self.q;
        self.q *= &self.p;
        self.q <<= 1u32;
        self.q += &self.tmp;
        self.p = &self.p * &self.p;
        self.p += &self.tmp;
    }

    /// Fold the doubling step into the accumulator.
    ///
    /// `tmp = aq`, `a = ap + bq + tmp`, `b = bp + tmp`.
    pub fn step_odd(&mut self) {
        self.tmp = &self.a * &self.q;
        self.a *= &self.p;
        self.a += &self.b * &self.q;
        self.a += &self.tmp;
        self.b *= &self.p;
        self.b += &self.tmp;
    }

    /// Run the loop for index `n` and return the number of iterations.
    pub fn run(&mut self, n: u64) -> u32 {
        let mut index = n;
        let mut steps = 0u32;
        while index > 0 {
            if index.is_even() {
                self.step_even();
                index /= 2;
            } else {
                self.step_odd();
                index -= 1;
            }
            steps += 1;
        }
        steps
    }

    /// Move the result out of the register file.
    #[must_use]
    pub fn result(self) -> BigUint {
        self.b
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

/// Fast Doubling calculator on `num-bigint`.
///
/// # Example
/// ```
/// use fibdouble_core::calculator::CoreCalculator;
/// use fibdouble_core::fastdoubling::FastDoubling;
///
/// let calc = FastDoubling::new();
/// assert_eq!(calc.calculate_core(100).to_string(), "354224848179261915075");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FastDoubling;

impl FastDoubling {
    /// Create a new `FastDoubling` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CoreCalculator for FastDoubling {
    fn calculate_core(&self, n: u64) -> BigUint {
        let mut registers = Registers::new();
        let steps = registers.run(n);
        debug!(n, steps, "fast doubling loop finished");
        registers.result()
    }

    fn name(&self) -> &'static str {
        "FastDoubling"
    }
}
