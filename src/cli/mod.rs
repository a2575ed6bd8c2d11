//! Command-line parsing for the demand forecaster.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "df",
    version,
    about = "Single-product demand forecaster (trend + weekly seasonality + momentum)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the forecast pipeline and emit the JSON response envelope.
    Run(RunArgs),
    /// Run the same pipeline and print a human-readable terminal report.
    Report(RunArgs),
    /// Generate a synthetic sales-history request (useful for demos/testing).
    Sample(SampleArgs),
}

/// Common options for forecasting and reporting.
#[derive(Debug, Parser, Clone)]
pub struct RunArgs {
    /// Request JSON file; reads stdin when omitted.
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Output file; writes stdout when omitted.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Options for synthetic request generation.
#[derive(Debug, Parser, Clone)]
pub struct SampleArgs {
    /// Number of history days to generate.
    #[arg(short = 'd', long, default_value_t = 28)]
    pub days: usize,

    /// Random seed for reproducible histories.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Baseline daily quantity.
    #[arg(long, default_value_t = 12.0)]
    pub base: f64,

    /// Linear trend in units/day.
    #[arg(long, default_value_t = 0.1)]
    pub trend: f64,

    /// Weekend demand lift in units (applied Fri-Sun, strongest Saturday).
    #[arg(long = "weekly-amp", default_value_t = 4.0)]
    pub weekly_amp: f64,

    /// Probability that a day has no sales record at all (exercises gap-filling).
    #[arg(long = "missing-prob", default_value_t = 0.2)]
    pub missing_prob: f64,

    /// Forecast horizon to embed in the request.
    #[arg(long = "forecast-days", default_value_t = 30)]
    pub forecast_days: u32,

    /// Product id to embed in the request.
    #[arg(long = "product-id", default_value = "sample-sku")]
    pub product_id: String,

    /// Product name to embed in the request.
    #[arg(long = "product-name", default_value = "Sample Product")]
    pub product_name: String,

    /// Output file; writes stdout when omitted.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}
