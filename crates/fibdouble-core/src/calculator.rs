//! Calculator traits and the timing `FibCalculator` decorator.
//!
//! `CoreCalculator` is implemented by the big-integer backends.
//! `FibCalculator` wraps one of them with a [`Clock`] and produces a
//! [`Computation`] carrying the value and the elapsed wall-clock time.

use std::sync::Arc;
use std::time::Duration;

use num_bigint::BigUint;
use tracing::debug;

use crate::clock::{Clock, SystemClock};

/// Error type for Fibonacci calculations and their reporting.
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    /// The clock could not be read. Carries which read failed.
    #[error("timer unavailable: {0} clock read failed")]
    TimerUnavailable(&'static str),

    /// Writing or flushing the result failed.
    #[error("output write failure")]
    Output(#[from] std::io::Error),

    /// The index is not a non-negative base-10 integer.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Internal trait for algorithm backends.
/// Wrapped by `FibCalculator`, which adds timing.
pub trait CoreCalculator: Send + Sync {
    /// Compute F(n) exactly.
    fn calculate_core(&self, n: u64) -> BigUint;

    /// Get the name of this backend.
    fn name(&self) -> &'static str;
}

/// A finished, timed computation of F(n).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computation {
    /// The index that was computed.
    pub n: u64,
    /// F(n).
    pub value: BigUint,
    /// Wall-clock time spent in the backend.
    pub elapsed: Duration,
}

/// Decorator that wraps a `CoreCalculator` with wall-clock timing.
pub struct FibCalculator {
    inner: Arc<dyn CoreCalculator>,
    clock: Arc<dyn Clock>,
}

impl FibCalculator {
    /// Create a new `FibCalculator` timed by the system clock.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self::with_clock(inner, Arc::new(SystemClock::new()))
    }

    /// Create a new `FibCalculator` timed by the given clock.
    #[must_use]
    pub fn with_clock(inner: Arc<dyn CoreCalculator>, clock: Arc<dyn Clock>) -> Self {
        Self { inner, clock }
    }

    /// Compute F(n) and measure how long the backend took.
    ///
    /// A failed clock read discards the value, so nothing can be reported
    /// for a run whose timing is unknown.
    pub fn calculate(&self, n: u64) -> Result<Computation, FibError> {
        let start = self
            .clock
            .now()
            .ok_or(FibError::TimerUnavailable("start"))?;
        let value = self.inner.calculate_core(n);
        let end = self.clock.now().ok_or(FibError::TimerUnavailable("end"))?;

        let elapsed = end.saturating_sub(start);
        debug!(n, backend = self.inner.name(), ?elapsed, "computation finished");

        Ok(Computation { n, value, elapsed })
    }

    /// Get the name of the wrapped backend.
    pub fn name(&self) -> &'static str {
        self.inner.name()
    }
}
