//! Entry point for the `hubfreight` command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use hubfreight_cli::CliError;

fn main() -> ExitCode {
    match hubfreight_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("hubfreight: {err}");
            ExitCode::FAILURE
        }
    }
}
