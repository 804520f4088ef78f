//! # fibdouble-core
//!
//! Core library for the fibdouble calculator.
//! Implements the fast doubling recurrence over arbitrary-precision integers,
//! plus the wall-clock timing wrapper used by the binary.

pub mod calculator;
pub mod clock;
pub mod constants;
pub mod fastdoubling;
pub mod input;
pub mod registry;

#[cfg(feature = "gmp")]
pub mod calculator_gmp;

// Re-exports
pub use calculator::{Computation, CoreCalculator, FibCalculator, FibError};
pub use clock::{Clock, SystemClock};
pub use constants::{exit_codes, DEFAULT_N};
pub use fastdoubling::{FastDoubling, Registers};
pub use input::parse_index;
pub use registry::{available_backends, core_for};

use num_bigint::BigUint;

/// Compute F(n) using the fast doubling algorithm.
///
/// This is the untimed entry point. Use [`FibCalculator`] when the
/// elapsed time is needed as well.
///
/// # Example
/// ```
/// assert_eq!(fibdouble_core::fibonacci(10).to_string(), "55");
/// assert_eq!(fibdouble_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    FastDoubling::new().calculate_core(n)
}
