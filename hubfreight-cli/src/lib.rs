//! Command-line interface for quoting hubfreight orders.
//!
//! The `quote` subcommand reads an order from JSON, prices it against the
//! reference catalog or a catalog file, and prints the quote as JSON.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod error;
mod fs;
mod quote;

pub use error::CliError;

use quote::{QuoteArgs, run_quote};

const ARG_QUOTE_ORDER: &str = "order";
const ARG_QUOTE_CATALOG: &str = "catalog";
const ENV_QUOTE_ORDER: &str = "HUBFREIGHT_CMDS_QUOTE_ORDER_PATH";

/// Run the hubfreight CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or inputs are invalid,
/// or when the order cannot be quoted.
pub fn run() -> Result<(), CliError> {
    init_logging();
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Quote(args) => run_quote(args),
    }
}

/// Install a stderr formatter filtered by `RUST_LOG`, defaulting to `warn`.
///
/// `log` records from the library crates are bridged into the subscriber.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // An already-installed global subscriber wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug, Parser)]
#[command(
    name = "hubfreight",
    about = "Quote shipping costs for orders served from several centers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Price an order and print the quote as JSON.
    Quote(QuoteArgs),
}

#[cfg(test)]
mod tests;
