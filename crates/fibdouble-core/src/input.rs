//! Parsing of the Fibonacci index from text.

use crate::calculator::FibError;

/// Parse a base-10, non-negative Fibonacci index.
///
/// Surrounding whitespace is ignored. Signs, empty input, non-digit
/// characters, and values beyond `u64::MAX` are rejected.
pub fn parse_index(s: &str) -> Result<u64, FibError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(FibError::InvalidInput("index must not be empty".into()));
    }
    if s.starts_with('-') {
        return Err(FibError::InvalidInput(format!(
            "index must be non-negative, got {s}"
        )));
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FibError::InvalidInput(format!(
            "index must be a base-10 integer, got {s:?}"
        )));
    }
    s.parse::<u64>()
        .map_err(|e| FibError::InvalidInput(format!("index {s} is out of range: {e}")))
}
