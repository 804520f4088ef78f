//! CLI result presenter.

use std::io::Write;

use tracing::debug;

use fibdouble_core::calculator::{Computation, FibError};

use crate::output::{format_seconds, DecimalResult};

/// Trait for presenting a finished computation.
pub trait ResultPresenter {
    /// Write the result report to `out`.
    fn present_result(&self, out: &mut dyn Write, computation: &Computation)
        -> Result<(), FibError>;
}

/// Plain three-line presenter:
///
/// ```text
/// <digits of F(n)>
/// Calculation Time: <seconds> seconds
/// Number of Digits: <count>
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CLIResultPresenter;

impl CLIResultPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(
        &self,
        out: &mut dyn Write,
        computation: &Computation,
    ) -> Result<(), FibError> {
        let decimal = DecimalResult::render(&computation.value);
        debug!(n = computation.n, digits = decimal.len(), "presenting result");

        writeln!(out, "{}", decimal.digits)?;
        writeln!(
            out,
            "Calculation Time: {} seconds",
            format_seconds(computation.elapsed)
        )?;
        writeln!(out, "Number of Digits: {}", decimal.len())?;
        out.flush()?;
        Ok(())
    }
}
