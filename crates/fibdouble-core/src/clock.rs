//! Wall-clock source used to time a computation.

use std::time::{Duration, Instant};

/// A monotonic time source.
///
/// `now` returns the time elapsed since the clock's origin, or `None`
/// when the underlying facility cannot produce a reading.
pub trait Clock: Send + Sync {
    /// Read the clock.
    fn now(&self) -> Option<Duration>;
}

/// Clock backed by [`std::time::Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Option<Duration> {
        Some(self.origin.elapsed())
    }
}
