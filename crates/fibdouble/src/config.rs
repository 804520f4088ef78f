//! Application configuration from CLI arguments.

use clap::Parser;

use fibdouble_core::constants::DEFAULT_N;
use fibdouble_core::input::parse_index;

const ABOUT: &str = "Compute F(N) by fast doubling and report the time taken";

/// Command-line arguments.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "fibdouble", version, about = ABOUT)]
pub struct AppConfig {
    /// Fibonacci index to compute (non-negative, base 10).
    #[arg(
        value_name = "N",
        default_value_t = DEFAULT_N,
        value_parser = parse_index,
        allow_negative_numbers = true
    )]
    pub n: u64,

    /// Big-integer backend: fast, or gmp when built with the `gmp` feature.
    #[arg(long, default_value = "fast")]
    pub algo: String,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn try_parse(args: &[&str]) -> Result<AppConfig, clap::Error> {
        AppConfig::try_parse_from(std::iter::once("fibdouble").chain(args.iter().copied()))
    }

    #[test]
    fn help_describes_fast_doubling() {
        use clap::CommandFactory;

        let about = AppConfig::command().get_about().unwrap().to_string();
        assert_eq!(about, ABOUT);
        assert!(about.contains("fast doubling"));
    }

    #[test]
    fn defaults() {
        let config = try_parse(&[]).unwrap();
        assert_eq!(config.n, 10_000);
        assert_eq!(config.algo, "fast");
    }

    #[test]
    fn positional_index() {
        assert_eq!(try_parse(&["100"]).unwrap().n, 100);
        assert_eq!(try_parse(&["0"]).unwrap().n, 0);
    }

    #[test]
    fn algo_flag() {
        let config = try_parse(&["--algo", "gmp", "5"]).unwrap();
        assert_eq!(config.algo, "gmp");
        assert_eq!(config.n, 5);
    }

    #[test]
    fn negative_index_is_invalid_value() {
        let err = try_parse(&["-5"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn non_numeric_index_is_invalid_value() {
        let err = try_parse(&["ten"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn extra_positional_is_rejected() {
        assert!(try_parse(&["1", "2"]).is_err());
    }
}
