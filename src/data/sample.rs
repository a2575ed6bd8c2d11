//! Synthetic sales-history request generation.
//!
//! Produces a request payload with the texture the pipeline has to handle in
//! production:
//!
//! - a linear demand trend with Gaussian noise
//! - a weekend lift so weekly seasonality is detectable
//! - randomly missing days (exercises gap-filling)
//! - occasional same-day record splits (exercises duplicate-date summing)
//!
//! Generation is fully determined by the seed and config, so sample requests
//! are reproducible across runs and machines.

use chrono::{Datelike, Duration, NaiveDate, Utc};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;
use serde::Serialize;

use crate::cli::SampleArgs;
use crate::domain::SalesRecord;
use crate::error::{AppError, ErrorKind};

/// Probability that an observed day is split into two same-day records.
const SPLIT_PROB: f64 = 0.15;

/// Validated sample-generation settings.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub days: usize,
    pub seed: u64,
    pub base: f64,
    pub trend: f64,
    pub weekly_amp: f64,
    pub missing_prob: f64,
    pub forecast_days: u32,
    pub product_id: String,
    pub product_name: String,
    /// Last history date; the request's forecast starts the day after.
    pub end_date: NaiveDate,
}

/// A generated request payload, shaped like the wire format.
#[derive(Debug, Clone, Serialize)]
pub struct SampleRequest {
    pub sales_data: Vec<SalesRecord>,
    pub forecast_days: u32,
    pub product_id: String,
    pub product_name: String,
}

/// Build a validated config from CLI arguments, anchored at today's date.
pub fn sample_config_from_args(args: &SampleArgs) -> Result<SampleConfig, AppError> {
    let config = SampleConfig {
        days: args.days,
        seed: args.seed,
        base: args.base,
        trend: args.trend,
        weekly_amp: args.weekly_amp,
        missing_prob: args.missing_prob,
        forecast_days: args.forecast_days,
        product_id: args.product_id.clone(),
        product_name: args.product_name.clone(),
        end_date: Utc::now().date_naive(),
    };
    validate(&config)?;
    Ok(config)
}

fn validate(config: &SampleConfig) -> Result<(), AppError> {
    if config.days < 2 {
        return Err(AppError::new(
            ErrorKind::Range,
            "Sample history must cover at least 2 days.",
        ));
    }
    if !(config.base.is_finite() && config.base >= 0.0) {
        return Err(AppError::new(
            ErrorKind::Range,
            "Sample base quantity must be a non-negative number.",
        ));
    }
    if !(config.trend.is_finite() && config.weekly_amp.is_finite()) {
        return Err(AppError::new(
            ErrorKind::Range,
            "Sample trend and weekly amplitude must be finite.",
        ));
    }
    if !(0.0..1.0).contains(&config.missing_prob) {
        return Err(AppError::new(
            ErrorKind::Range,
            "Missing-day probability must be in [0, 1).",
        ));
    }
    Ok(())
}

/// Generate a deterministic synthetic request.
pub fn generate_sample_request(config: &SampleConfig) -> Result<SampleRequest, AppError> {
    validate(config)?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let noise_sigma = (config.base * 0.15).max(0.5);
    let normal = Normal::new(0.0, noise_sigma)
        .map_err(|e| AppError::new(ErrorKind::Range, format!("Noise distribution error: {e}")))?;

    let start = config.end_date - Duration::days(config.days as i64 - 1);

    let mut sales_data = Vec::new();
    for i in 0..config.days {
        let date = start + Duration::days(i as i64);

        // Keep both endpoints so the generated span always covers `days`.
        let interior = i != 0 && i != config.days - 1;
        if interior && rng.gen_bool(config.missing_prob) {
            continue;
        }

        let lift = match date.weekday().num_days_from_monday() {
            4 | 6 => config.weekly_amp * 0.5, // Friday, Sunday
            5 => config.weekly_amp,           // Saturday
            _ => 0.0,
        };
        let level = config.base + config.trend * i as f64 + lift;
        let quantity = (level + normal.sample(&mut rng)).max(0.0).round();

        // Occasionally split one day's demand across two records; the
        // normalizer must sum these back into a single daily signal.
        if quantity >= 2.0 && rng.gen_bool(SPLIT_PROB) {
            let first = (quantity / 2.0).floor();
            sales_data.push(SalesRecord {
                date,
                quantity: first,
            });
            sales_data.push(SalesRecord {
                date,
                quantity: quantity - first,
            });
        } else {
            sales_data.push(SalesRecord { date, quantity });
        }
    }

    Ok(SampleRequest {
        sales_data,
        forecast_days: config.forecast_days,
        product_id: config.product_id.clone(),
        product_name: config.product_name.clone(),
    })
}
