//! ww-cli library
//!
//! Argument parsing, logging setup and store wiring for the `waterwise`
//! binary, exported for tests.

pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod logger;

#[cfg(test)]
mod tests;

pub use app::run;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
