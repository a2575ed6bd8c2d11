//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - raw input records (`SalesRecord`) and the normalized series (`DailySeries`)
//! - the fitted model (`ModelDescriptor`)
//! - forecast outputs (`ForecastPoint`, `ForecastSummary`)

pub mod types;

pub use types::*;
