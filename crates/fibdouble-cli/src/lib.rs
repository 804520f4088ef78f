//! # fibdouble-cli
//!
//! Output formatting and the stdout result presenter.

pub mod output;
pub mod presenter;

pub use presenter::{CLIResultPresenter, ResultPresenter};
