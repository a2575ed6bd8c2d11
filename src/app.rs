//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - reads and validates the request payload
//! - runs normalization, model fitting, and forecast generation
//! - writes the JSON envelope or a terminal report
//! - generates synthetic sample requests

use clap::Parser;

use crate::cli::{Command, RunArgs, SampleArgs};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `df` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Run(args) => handle_forecast(args, OutputMode::Json),
        Command::Report(args) => handle_forecast(args, OutputMode::Text),
        Command::Sample(args) => handle_sample(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Json,
    Text,
}

fn handle_forecast(args: RunArgs, mode: OutputMode) -> Result<(), AppError> {
    let request = crate::io::read_request(args.input.as_deref())?;

    let run = match pipeline::run_forecast(&request) {
        Ok(run) => run,
        Err(err) => {
            // JSON callers always get one parseable object on stdout; the
            // non-zero exit code still signals failure.
            if mode == OutputMode::Json {
                let envelope = crate::io::failure_envelope(&err);
                crate::io::write_json(args.output.as_deref(), &envelope)?;
            }
            return Err(err);
        }
    };

    match mode {
        OutputMode::Json => {
            let envelope = crate::io::success_envelope(&request, run.generated_at, run.result);
            crate::io::write_json(args.output.as_deref(), &envelope)?;
        }
        OutputMode::Text => {
            println!(
                "{}",
                crate::report::format_run_summary(&request, &run.series, &run.model, &run.result)
            );
        }
    }

    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let config = crate::data::sample_config_from_args(&args)?;
    let request = crate::data::generate_sample_request(&config)?;
    crate::io::write_json(args.output.as_deref(), &request)
}
