//! Backend registry.

use std::sync::Arc;

use crate::calculator::{CoreCalculator, FibError};
use crate::fastdoubling::FastDoubling;

/// Look up a backend by name.
pub fn core_for(name: &str) -> Result<Arc<dyn CoreCalculator>, FibError> {
    match name {
        "fast" | "fastdoubling" => Ok(Arc::new(FastDoubling::new())),
        #[cfg(feature = "gmp")]
        "gmp" => Ok(Arc::new(crate::calculator_gmp::GmpFastDoubling::new())),
        _ => Err(FibError::Config(format!(
            "unknown backend: {name} (available: {})",
            available_backends().join(", ")
        ))),
    }
}

/// List the backend names accepted by [`core_for`].
#[must_use]
pub fn available_backends() -> Vec<&'static str> {
    let mut names = vec!["fast"];
    if cfg!(feature = "gmp") {
        names.push("gmp");
    }
    names
}
