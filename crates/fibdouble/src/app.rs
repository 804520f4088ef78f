//! Application entry point and dispatch.

use std::io::{self, BufWriter, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use fibdouble_cli::output::ensure_stdout_open;
use fibdouble_cli::presenter::{CLIResultPresenter, ResultPresenter};
use fibdouble_core::calculator::FibCalculator;
use fibdouble_core::clock::{Clock, SystemClock};
use fibdouble_core::registry::core_for;

use crate::config::AppConfig;

/// Run the application, writing the report to stdout.
pub fn run(config: &AppConfig) -> Result<()> {
    ensure_stdout_open().context("checking standard output")?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_with(config, Arc::new(SystemClock::new()), &mut out)
}

/// Run the application with an explicit clock and output stream.
///
/// Nothing is written to `out` unless the computation and both clock reads
/// succeed.
pub fn run_with(config: &AppConfig, clock: Arc<dyn Clock>, out: &mut dyn Write) -> Result<()> {
    let core = core_for(&config.algo)?;
    let calc = FibCalculator::with_clock(core, clock);
    info!(n = config.n, backend = calc.name(), "computing");

    let computation = calc
        .calculate(config.n)
        .with_context(|| format!("computing F({})", config.n))?;
    info!(elapsed = ?computation.elapsed, "computation complete");

    CLIResultPresenter::new()
        .present_result(out, &computation)
        .context("writing result")?;
    Ok(())
}
