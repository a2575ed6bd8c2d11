//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/forecast code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use std::collections::BTreeSet;

use crate::domain::{DailySeries, ForecastResult, ModelDescriptor};
use crate::io::request::ForecastRequest;
use crate::math::mean_diff;

/// Format the full run summary (history stats + model diagnostics + forecast table).
pub fn format_run_summary(
    request: &ForecastRequest,
    series: &DailySeries,
    model: &ModelDescriptor,
    result: &ForecastResult,
) -> String {
    let mut out = String::new();

    out.push_str("=== df - Demand Forecast ===\n");
    out.push_str(&format!(
        "Product: {} ({})\n",
        request.product_name, request.product_id
    ));

    let observed: BTreeSet<_> = request.sales_data.iter().map(|r| r.date).collect();
    let entries = series.entries();
    if let (Some((first, _)), Some((last, _))) = (entries.first(), entries.last()) {
        out.push_str(&format!(
            "History: {first} -> {last} | n={} days (observed={}, gap-filled={})\n",
            series.len(),
            observed.len(),
            series.len() - observed.len(),
        ));
    }
    let total: f64 = series.quantities().iter().sum();
    out.push_str(&format!("Total sold: {total:.0} units\n"));

    out.push_str("\nModel:\n");
    out.push_str(&format!(
        "- trend   : {:+.4} units/day (intercept {:.2})\n",
        model.trend_slope, model.trend_intercept
    ));
    match &model.weekly_pattern {
        Some(pattern) => {
            out.push_str("- weekly  : ");
            let labels = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
            for (label, mean) in labels.iter().zip(pattern.iter()) {
                out.push_str(&format!("{label}={mean:.1} "));
            }
            out.push('\n');
        }
        None => out.push_str("- weekly  : (series shorter than 7 days, skipped)\n"),
    }
    out.push_str(&format!(
        "- moments : mean={:.2} std={:.2}\n",
        model.historical_mean, model.historical_std
    ));
    out.push_str(&format!(
        "- recent  : level={:.2} momentum={:+.2}\n",
        model.recent_level,
        mean_diff(&model.recent_window) * 0.5
    ));

    out.push_str(&format!(
        "\nForecast ({} days):\n",
        result.summary.forecast_period_days
    ));
    out.push_str(&format!(
        "{:<12} {:>10} {:>10} {:>10}\n",
        "date", "predicted", "lower", "upper"
    ));
    for point in &result.forecast {
        out.push_str(&format!(
            "{:<12} {:>10.2} {:>10.2} {:>10.2}\n",
            point.date.to_string(),
            point.predicted_quantity,
            point.lower_bound,
            point.upper_bound
        ));
    }

    out.push_str("\nSummary:\n");
    out.push_str(&format!(
        "- total predicted : {:.2} units\n",
        result.summary.total_predicted_quantity
    ));
    out.push_str(&format!(
        "- daily average   : {:.2} (historical {:.2})\n",
        result.summary.average_daily_quantity, result.summary.historical_daily_average
    ));
    out.push_str(&format!(
        "- growth          : {:+.2}%\n",
        result.summary.predicted_growth_rate_percent
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_forecast;
    use crate::domain::SalesRecord;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn summary_mentions_history_model_and_forecast() {
        let request = ForecastRequest {
            product_id: "sku-7".to_string(),
            product_name: "Gadget".to_string(),
            forecast_days: 3,
            sales_data: vec![
                SalesRecord {
                    date: d(2024, 1, 1),
                    quantity: 10.0,
                },
                SalesRecord {
                    date: d(2024, 1, 3),
                    quantity: 20.0,
                },
            ],
        };
        let run = run_forecast(&request).unwrap();
        let text = format_run_summary(&request, &run.series, &run.model, &run.result);

        assert!(text.contains("Gadget (sku-7)"));
        assert!(text.contains("observed=2, gap-filled=1"));
        assert!(text.contains("series shorter than 7 days"));
        assert!(text.contains("2024-01-04"));
        assert!(text.contains("Summary:"));
    }

    #[test]
    fn weekly_line_lists_weekday_means_when_present() {
        let sales_data: Vec<SalesRecord> = (0..14)
            .map(|i| SalesRecord {
                date: d(2024, 1, 1) + chrono::Duration::days(i),
                quantity: 5.0,
            })
            .collect();
        let request = ForecastRequest {
            product_id: "sku-8".to_string(),
            product_name: "Widget".to_string(),
            forecast_days: 2,
            sales_data,
        };
        let run = run_forecast(&request).unwrap();
        let text = format_run_summary(&request, &run.series, &run.model, &run.result);

        assert!(text.contains("Mon=5.0"));
        assert!(text.contains("Sun=5.0"));
    }
}
