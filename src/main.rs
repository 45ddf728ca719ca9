//! Entry point for the `mission-prompt` CLI.
//!
//! Parses arguments, installs logging, dispatches to the command handler, and
//! maps errors to exit codes.

use mission_prompt::cli::Cli;
use mission_prompt::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(&cli.log_level);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
