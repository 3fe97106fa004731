use tracing::info;

use pptscreenshot::{Error, ExportOptions, build_info, export_file};

use super::args::CliArgs;
use super::errors::AppError;

const NAME: &str = "pptscreenshot";

fn print_version() {
    let info = build_info();
    eprintln!("{} version {}", NAME, info.version);
    eprintln!("commit {}", info.commit);
    eprintln!("build date {}", info.build_date);
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.version {
        print_version();
        return Ok(());
    }

    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let input = args.input_path().cloned().ok_or(AppError::MissingInput)?;
    // Report a bad input before complaining about the output.
    if !input.exists() {
        return Err(Error::InputNotFound(input).into());
    }
    let output = args.output.clone().ok_or(AppError::MissingOutput)?;
    let options = ExportOptions {
        width: args.width,
        height: args.height,
        slide: args.slide,
        force: args.force,
    };

    let summary = export_file(&input, &output, &options)?;
    info!(
        "Successfully exported slide {} of {:?} -> {:?}",
        summary.slide, input, summary.output
    );
    Ok(())
}
