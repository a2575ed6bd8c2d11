//! Forecast generation: project a fitted descriptor over the horizon.
//!
//! Per-day composition, in order:
//!
//! 1. extrapolated trend (index sequence continued past the series end)
//! 2. additive weekly-seasonal offset (weekday mean minus overall mean)
//! 3. damped momentum from recent day-over-day differences
//! 4. clamp at zero
//! 5. sequential exponential smoothing (0.7 new / 0.3 previous *smoothed*)
//! 6. fixed-width uncertainty band (0.8 × historical std, deterministic)
//!
//! The smoothing is a strict left-to-right fold: each day's output feeds the
//! next day's blend, so the horizon cannot be computed out of order.

use chrono::{Datelike, NaiveDate};

use crate::domain::{ForecastPoint, ForecastResult, ForecastSummary, ModelDescriptor};
use crate::error::{AppError, ErrorKind};
use crate::math::{mean_diff, round2};

/// Momentum damping factor: recent short-term swings should not dominate.
const MOMENTUM_DAMPING: f64 = 0.5;
/// Exponential smoothing weight on the current day's base prediction.
const SMOOTHING_ALPHA: f64 = 0.7;
/// Uncertainty band width as a fraction of the historical std.
const UNCERTAINTY_FACTOR: f64 = 0.8;

/// Inclusive horizon bounds (days).
pub const MIN_HORIZON_DAYS: u32 = 1;
pub const MAX_HORIZON_DAYS: u32 = 365;

/// Validate a forecast horizon. Called at the request boundary before any
/// model fitting, and defensively re-checked by [`generate`].
pub fn validate_horizon(days: i64) -> Result<u32, AppError> {
    if !(MIN_HORIZON_DAYS as i64..=MAX_HORIZON_DAYS as i64).contains(&days) {
        return Err(AppError::new(
            ErrorKind::Range,
            "Forecast days must be between 1 and 365.",
        ));
    }
    Ok(days as u32)
}

/// Project the model `horizon_days` past `last_date`.
pub fn generate(
    model: &ModelDescriptor,
    last_date: NaiveDate,
    horizon_days: u32,
) -> Result<ForecastResult, AppError> {
    let horizon_days = validate_horizon(horizon_days as i64)?;

    let momentum = mean_diff(&model.recent_window) * MOMENTUM_DAMPING;
    let uncertainty = model.historical_std * UNCERTAINTY_FACTOR;

    let mut forecast = Vec::with_capacity(horizon_days as usize);
    let mut date = last_date;
    let mut previous_smoothed = 0.0;

    for i in 0..horizon_days {
        date = date.succ_opt().ok_or_else(|| {
            AppError::new(
                ErrorKind::Forecast,
                format!("Calendar overflow extending the horizon past {date}."),
            )
        })?;

        let trend_value =
            model.trend_slope * (model.series_length + i as usize) as f64 + model.trend_intercept;

        let seasonal_value = match &model.weekly_pattern {
            Some(pattern) => {
                let weekday = date.weekday().num_days_from_monday() as usize;
                pattern[weekday] - model.historical_mean
            }
            None => 0.0,
        };

        let base = (trend_value + seasonal_value + momentum).max(0.0);

        // Each day blends with the previous day's *final* output, not its raw
        // base value, so the fold below cannot be reordered.
        let smoothed = if i == 0 {
            base
        } else {
            SMOOTHING_ALPHA * base + (1.0 - SMOOTHING_ALPHA) * previous_smoothed
        };

        if !smoothed.is_finite() {
            return Err(AppError::new(
                ErrorKind::Forecast,
                format!("Non-finite prediction on {date}."),
            ));
        }
        previous_smoothed = smoothed;

        forecast.push(ForecastPoint {
            date,
            predicted_quantity: round2(smoothed),
            lower_bound: round2((smoothed - uncertainty).max(0.0)),
            upper_bound: round2(smoothed + uncertainty),
            // The constant fitted slope, repeated per point (wire-format
            // compatibility; see domain::ForecastPoint).
            trend: round2(model.trend_slope),
        });
    }

    let summary = summarize(&forecast, model, horizon_days);
    Ok(ForecastResult { forecast, summary })
}

/// Aggregate the horizon. Totals are taken over the already-rounded per-point
/// quantities so the single-day case matches its point exactly.
fn summarize(
    forecast: &[ForecastPoint],
    model: &ModelDescriptor,
    horizon_days: u32,
) -> ForecastSummary {
    let total: f64 = forecast.iter().map(|p| p.predicted_quantity).sum();
    let avg_daily = total / horizon_days as f64;

    // A flat/zero history yields 0% growth by convention, not an error.
    let growth_rate = if model.historical_mean > 0.0 {
        (avg_daily - model.historical_mean) / model.historical_mean * 100.0
    } else {
        0.0
    };

    ForecastSummary {
        total_predicted_quantity: round2(total),
        average_daily_quantity: round2(avg_daily),
        historical_daily_average: round2(model.historical_mean),
        predicted_growth_rate_percent: round2(growth_rate),
        forecast_period_days: horizon_days,
        data_points_used: model.series_length,
    }
}
