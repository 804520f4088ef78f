//! fibdouble — Fast doubling Fibonacci calculator.

use std::process::ExitCode;

use fibdouble_core::exit_codes;
use fibdouble_lib::{app, config, errors, logging};

fn main() -> ExitCode {
    logging::init();

    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(errors::exit_code(&err))
        }
    }
}
