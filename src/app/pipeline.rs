//! Shared forecast pipeline used by both JSON and report front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! normalize -> fit -> forecast
//!
//! The front-ends can then focus on presentation (envelope vs terminal text).
//! Data flows strictly forward; no stage calls back into an earlier one, and
//! nothing here is shared across invocations.

use chrono::{DateTime, Utc};

use crate::domain::{DailySeries, ForecastResult, ModelDescriptor};
use crate::error::{AppError, ErrorKind};
use crate::io::request::ForecastRequest;

/// All computed outputs of a single forecast run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub series: DailySeries,
    pub model: ModelDescriptor,
    pub result: ForecastResult,
    pub generated_at: DateTime<Utc>,
}

/// Execute the full pipeline for a validated request.
///
/// The horizon was range-checked at the request boundary, so every error out
/// of here is about the data or the numerics, not the envelope.
pub fn run_forecast(request: &ForecastRequest) -> Result<RunOutput, AppError> {
    // 1) Normalize raw records into a dense daily series.
    let series = crate::series::normalize(&request.sales_data)?;

    // 2) Fit the statistical descriptor.
    let model = crate::model::fit(&series)?;

    // 3) Project it over the horizon.
    let last_date = series
        .last_date()
        .ok_or_else(|| AppError::new(ErrorKind::Preprocessing, "Normalized series is empty."))?;
    let result = crate::forecast::generate(&model, last_date, request.forecast_days)?;

    Ok(RunOutput {
        series,
        model,
        result,
        generated_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SalesRecord;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn request(records: Vec<SalesRecord>, forecast_days: u32) -> ForecastRequest {
        ForecastRequest {
            product_id: "sku-1".to_string(),
            product_name: "Widget".to_string(),
            forecast_days,
            sales_data: records,
        }
    }

    #[test]
    fn end_to_end_two_sparse_records() {
        // 2024-01-01: 10 and 2024-01-03: 20 normalize to a 3-day series with a
        // zero-filled middle day, fit a positive slope, and forecast forward.
        let run = run_forecast(&request(
            vec![
                SalesRecord {
                    date: d(2024, 1, 1),
                    quantity: 10.0,
                },
                SalesRecord {
                    date: d(2024, 1, 3),
                    quantity: 20.0,
                },
            ],
            2,
        ))
        .unwrap();

        assert_eq!(run.series.len(), 3);
        assert!(run.model.trend_slope > 0.0);

        assert_eq!(run.result.forecast.len(), 2);
        assert_eq!(run.result.forecast[0].date, d(2024, 1, 4));
        assert_eq!(run.result.forecast[1].date, d(2024, 1, 5));
        for point in &run.result.forecast {
            assert!(point.predicted_quantity >= 0.0);
            assert!(point.lower_bound <= point.upper_bound);
        }
        assert_eq!(run.result.summary.data_points_used, 3);
    }

    #[test]
    fn insufficient_data_stops_before_fitting() {
        let err = run_forecast(&request(
            vec![SalesRecord {
                date: d(2024, 1, 1),
                quantity: 10.0,
            }],
            30,
        ))
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientData);
    }
}
