//! Model fitting: derive a compact statistical descriptor from a daily series.
//!
//! The model is a bespoke closed-form composite, not a learned one:
//!
//! - first-order OLS trend over day-index vs. quantity
//! - per-weekday mean quantities (only when the series spans a full week)
//! - rolling-mean smoothing context
//! - population moments and a trailing momentum window
//!
//! No higher-order terms, no outlier rejection, no iterative refitting.

use chrono::Datelike;

use crate::domain::{DailySeries, ModelDescriptor};
use crate::error::{AppError, ErrorKind};
use crate::math;

/// Trailing window length (days) used for momentum and the rolling mean cap.
const RECENT_WINDOW_DAYS: usize = 7;

/// Fit the statistical descriptor for a normalized series.
pub fn fit(series: &DailySeries) -> Result<ModelDescriptor, AppError> {
    let n = series.len();
    if n < 2 {
        return Err(AppError::new(
            ErrorKind::InsufficientData,
            "Insufficient data for modeling.",
        ));
    }

    let quantities = series.quantities();

    let (trend_slope, trend_intercept) = math::fit_linear_trend(&quantities).ok_or_else(|| {
        AppError::new(
            ErrorKind::ModelFit,
            "Degenerate least-squares system for the trend fit.",
        )
    })?;
    if !(trend_slope.is_finite() && trend_intercept.is_finite()) {
        return Err(AppError::new(
            ErrorKind::ModelFit,
            "Non-finite trend coefficients.",
        ));
    }

    let weekly_pattern = if n >= 7 {
        Some(weekday_means(series))
    } else {
        None
    };

    // Rolling mean: window = min(7, n/2), minimum period 1. The smoothed tail
    // is kept for reporting context; momentum works off the raw window below.
    let window = RECENT_WINDOW_DAYS.min(n / 2);
    let smoothed = math::rolling_mean(&quantities, window);
    let recent_level = smoothed.last().copied().unwrap_or(0.0);

    let recent_window = quantities[n - RECENT_WINDOW_DAYS.min(n)..].to_vec();

    Ok(ModelDescriptor {
        trend_slope,
        trend_intercept,
        weekly_pattern,
        historical_mean: math::mean(&quantities),
        historical_std: math::population_std(&quantities),
        recent_level,
        recent_window,
        series_length: n,
    })
}

/// Mean quantity per weekday, Monday = 0.
///
/// Only called with n ≥ 7, so every weekday group of a contiguous daily series
/// is non-empty.
fn weekday_means(series: &DailySeries) -> [f64; 7] {
    let mut sums = [0.0f64; 7];
    let mut counts = [0usize; 7];

    for (date, quantity) in series.entries() {
        let w = date.weekday().num_days_from_monday() as usize;
        sums[w] += quantity;
        counts[w] += 1;
    }

    let mut means = [0.0f64; 7];
    for w in 0..7 {
        if counts[w] > 0 {
            means[w] = sums[w] / counts[w] as f64;
        }
    }
    means
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SalesRecord;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn series_from(quantities: &[f64]) -> DailySeries {
        let start = d(2024, 1, 1);
        let records: Vec<SalesRecord> = quantities
            .iter()
            .enumerate()
            .map(|(i, &q)| SalesRecord {
                date: start + chrono::Duration::days(i as i64),
                quantity: q,
            })
            .collect();
        crate::series::normalize(&records).unwrap()
    }

    #[test]
    fn positive_trend_on_rising_series() {
        // The gap-filled [10, 0, 20] example: slope is still positive.
        let records = vec![
            SalesRecord {
                date: d(2024, 1, 1),
                quantity: 10.0,
            },
            SalesRecord {
                date: d(2024, 1, 3),
                quantity: 20.0,
            },
        ];
        let series = crate::series::normalize(&records).unwrap();
        let model = fit(&series).unwrap();

        assert!(model.trend_slope > 0.0);
        assert_eq!(model.series_length, 3);
    }

    #[test]
    fn weekly_pattern_absent_below_seven_days() {
        let model = fit(&series_from(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])).unwrap();
        assert!(model.weekly_pattern.is_none());
    }

    #[test]
    fn weekly_pattern_present_at_seven_days() {
        let model = fit(&series_from(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0])).unwrap();
        let pattern = model.weekly_pattern.unwrap();

        // 2024-01-01 is a Monday, so the pattern reads off the series directly.
        assert!((pattern[0] - 1.0).abs() < 1e-12);
        assert!((pattern[6] - 7.0).abs() < 1e-12);
    }

    #[test]
    fn weekday_means_average_across_weeks() {
        // Two full weeks: Monday values 2 and 4 average to 3.
        let mut quantities = vec![0.0; 14];
        quantities[0] = 2.0;
        quantities[7] = 4.0;
        let model = fit(&series_from(&quantities)).unwrap();

        let pattern = model.weekly_pattern.unwrap();
        assert!((pattern[0] - 3.0).abs() < 1e-12);
        assert!(pattern[1].abs() < 1e-12);
    }

    #[test]
    fn moments_are_population_statistics() {
        let model = fit(&series_from(&[2.0, 4.0])).unwrap();
        assert!((model.historical_mean - 3.0).abs() < 1e-12);
        assert!((model.historical_std - 1.0).abs() < 1e-12);
    }

    #[test]
    fn recent_window_is_trailing_week_at_most() {
        let model = fit(&series_from(&[1.0, 2.0, 3.0])).unwrap();
        assert_eq!(model.recent_window, vec![1.0, 2.0, 3.0]);

        let long: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let model = fit(&series_from(&long)).unwrap();
        assert_eq!(model.recent_window.len(), 7);
        assert_eq!(model.recent_window[0], 3.0);
    }

    #[test]
    fn recent_level_reflects_rolling_mean_tail() {
        // n = 4 → window = 2; last rolling value averages the final two days.
        let model = fit(&series_from(&[0.0, 0.0, 4.0, 8.0])).unwrap();
        assert!((model.recent_level - 6.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_single_day_series() {
        let records = vec![
            SalesRecord {
                date: d(2024, 1, 1),
                quantity: 1.0,
            },
            SalesRecord {
                date: d(2024, 1, 1),
                quantity: 2.0,
            },
        ];
        let series = crate::series::normalize(&records).unwrap();
        let err = fit(&series).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientData);
    }
}
