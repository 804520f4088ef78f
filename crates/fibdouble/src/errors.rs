//! Error handling and exit codes.

use fibdouble_core::calculator::FibError;
use fibdouble_core::constants::exit_codes;

/// Map a calculation error to its process exit code.
pub fn handle_error(err: &FibError) -> u8 {
    match err {
        FibError::TimerUnavailable(_) => exit_codes::ERROR_TIMER,
        FibError::Output(_) => exit_codes::ERROR_OUTPUT,
        FibError::InvalidInput(_) => exit_codes::ERROR_INVALID_INPUT,
        FibError::Config(_) => exit_codes::ERROR_CONFIG,
    }
}

/// Exit code for an application error, from the first `FibError` in its chain.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<FibError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
