//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting and forecasting
//! - emitted directly into the JSON response envelope
//! - reloaded later for comparisons or snapshot tests

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single raw sales observation.
///
/// Multiple records may share a date; the normalizer sums them into one daily
/// demand signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub quantity: f64,
}

/// A dense, gap-filled daily time series.
///
/// Invariants (established by [`crate::series::normalize`]):
///
/// - dates strictly increase by exactly one calendar day
/// - contiguous from the earliest to the latest observed date
/// - length ≥ 2
/// - days with no observed sales carry quantity 0
#[derive(Debug, Clone, PartialEq)]
pub struct DailySeries {
    entries: Vec<(NaiveDate, f64)>,
}

impl DailySeries {
    /// Wrap pre-validated entries. Callers must uphold the contiguity invariant.
    pub(crate) fn from_entries(entries: Vec<(NaiveDate, f64)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(NaiveDate, f64)] {
        &self.entries
    }

    pub fn quantities(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, q)| *q).collect()
    }

    /// Last observed calendar date; forecasts start the day after.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.entries.last().map(|(d, _)| *d)
    }
}

/// Compact statistical descriptor derived from a [`DailySeries`].
///
/// Owned solely by the pipeline invocation; nothing is shared across requests.
#[derive(Debug, Clone)]
pub struct ModelDescriptor {
    /// OLS slope of quantity against day-index 0..n-1.
    pub trend_slope: f64,
    /// OLS intercept of the same fit.
    pub trend_intercept: f64,
    /// Mean quantity per weekday (Monday = 0). Present only when the series
    /// spans at least 7 days; without a full week the weekday means would be
    /// dominated by which days happen to be observed.
    pub weekly_pattern: Option<[f64; 7]>,
    /// Population mean over all quantities.
    pub historical_mean: f64,
    /// Population standard deviation over all quantities.
    pub historical_std: f64,
    /// Last value of the rolling mean (window = min(7, n/2), min period 1).
    /// Smoothing context for reporting; not part of the JSON payload.
    pub recent_level: f64,
    /// Trailing min(7, n) raw quantities, used for momentum.
    pub recent_window: Vec<f64>,
    /// Number of days in the normalized series.
    pub series_length: usize,
}

/// One forecasted day.
///
/// `trend` is the constant fitted slope, repeated on every point — not the
/// per-day extrapolated trend level. This mirrors the established wire format
/// and is preserved as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted_quantity: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub trend: f64,
}

/// Aggregate statistics over the full forecast horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub total_predicted_quantity: f64,
    pub average_daily_quantity: f64,
    pub historical_daily_average: f64,
    pub predicted_growth_rate_percent: f64,
    pub forecast_period_days: u32,
    pub data_points_used: usize,
}

/// Forecast output: the per-day points plus the horizon summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub forecast: Vec<ForecastPoint>,
    pub summary: ForecastSummary,
}
