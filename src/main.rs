//! pptscreenshot CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the export,
//! and exit with status 1 and a single-line message on any failure.
//! For programmatic use, prefer the library API (`pptscreenshot::api`).

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

mod cli;

fn main() -> ExitCode {
    let args = match cli::CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => e.exit(),
        Err(e) => {
            let rendered = e.to_string();
            eprintln!("{}", rendered.lines().next().unwrap_or("invalid arguments"));
            return ExitCode::FAILURE;
        }
    };

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
