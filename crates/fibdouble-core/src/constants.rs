//! Constants for the default index and process exit codes.

/// Index computed when none is given on the command line.
pub const DEFAULT_N: u64 = 10_000;

/// Precision used when printing the calculation time, in decimal places.
pub const TIME_PRECISION: usize = 6;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: u8 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: u8 = 1;
    /// The index argument was not a non-negative base-10 integer.
    /// Matches the status clap uses for argument errors.
    pub const ERROR_INVALID_INPUT: u8 = 2;
    /// The wall-clock timer failed to produce a reading.
    pub const ERROR_TIMER: u8 = 3;
    /// Unknown backend or other configuration problem.
    pub const ERROR_CONFIG: u8 = 4;
    /// Writing or flushing the result failed.
    pub const ERROR_OUTPUT: u8 = 5;
}
