//! CLI output formatting.

use std::io;
use std::time::Duration;

use num_bigint::BigUint;

use fibdouble_core::calculator::FibError;
use fibdouble_core::constants::TIME_PRECISION;

/// Decimal rendering of a result together with its digit count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalResult {
    /// Base-10 digits of the value.
    pub digits: String,
}

impl DecimalResult {
    /// Render `value` in base 10. This is the only decimal conversion of a run.
    #[must_use]
    pub fn render(value: &BigUint) -> Self {
        Self {
            digits: value.to_str_radix(10),
        }
    }

    /// Number of decimal digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false: zero renders as "0".
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

/// Format elapsed time as seconds with six decimal places.
#[must_use]
pub fn format_seconds(d: Duration) -> String {
    format!("{:.prec$}", d.as_secs_f64(), prec = TIME_PRECISION)
}

/// Fail with [`FibError::Output`] when standard output is closed.
///
/// Writes to a closed stdout are discarded silently, so the check has to
/// happen up front.
pub fn ensure_stdout_open() -> Result<(), FibError> {
    if stdout_is_closed() {
        return Err(FibError::Output(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "standard output is closed",
        )));
    }
    Ok(())
}

#[cfg(unix)]
fn stdout_is_closed() -> bool {
    use std::fs::File;
    use std::io::Read;
    use std::os::fd::AsFd;
    use std::os::unix::fs::{FileTypeExt, MetadataExt};

    let Ok(fd) = io::stdout().as_fd().try_clone_to_owned() else {
        return true;
    };
    let mut stdout = File::from(fd);
    let (Ok(meta), Ok(null)) = (stdout.metadata(), std::fs::metadata("/dev/null")) else {
        return false;
    };
    if !meta.file_type().is_char_device() || meta.rdev() != null.rdev() {
        return false;
    }
    // The runtime reopens a closed fd 1 as read-write /dev/null.
    // A shell redirect to /dev/null is write-only, so reading fails.
    stdout.read(&mut [0u8; 1]).is_ok()
}

#[cfg(not(unix))]
fn stdout_is_closed() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_counts_digits() {
        let rendered = DecimalResult::render(&BigUint::from(354_224_848_179_261_915_075u128));
        assert_eq!(rendered.digits, "354224848179261915075");
        assert_eq!(rendered.len(), 21);
    }

    #[test]
    fn render_zero() {
        let rendered = DecimalResult::render(&BigUint::default());
        assert_eq!(rendered.digits, "0");
        assert_eq!(rendered.len(), 1);
        assert!(!rendered.is_empty());
    }

    #[test]
    fn format_seconds_six_places() {
        assert_eq!(format_seconds(Duration::ZERO), "0.000000");
        assert_eq!(format_seconds(Duration::from_micros(1234)), "0.001234");
        assert_eq!(format_seconds(Duration::from_millis(2500)), "2.500000");
    }

    #[test]
    fn test_harness_stdout_is_open() {
        assert!(ensure_stdout_open().is_ok());
    }
}
