//! Time-series normalization.
//!
//! This module turns raw, possibly unsorted, possibly duplicate-dated sales
//! records into a dense daily series that is safe to fit:
//!
//! - **Aggregation**: multiple sales events on one date are one demand signal,
//!   so per-date quantities are summed, never overwritten.
//! - **Gap-filling**: every calendar date between the earliest and latest
//!   observation is present, absent dates at quantity 0. Weekday indexing and
//!   slope-per-day trend math downstream are meaningless without a
//!   fixed-frequency series.
//! - **Deterministic behavior**: no hidden reordering beyond the ascending
//!   date sort.

use std::collections::BTreeMap;

use crate::domain::{DailySeries, SalesRecord};
use crate::error::{AppError, ErrorKind};

/// Normalize raw sales records into a gap-filled [`DailySeries`].
///
/// Fails with `InsufficientData` when fewer than 2 raw records are supplied;
/// with fewer points there is no span to fill and no trend to fit.
pub fn normalize(records: &[SalesRecord]) -> Result<DailySeries, AppError> {
    if records.len() < 2 {
        return Err(AppError::new(
            ErrorKind::InsufficientData,
            "Insufficient data for forecasting (minimum 2 data points required).",
        ));
    }

    // BTreeMap gives us per-date summing and ascending order in one pass.
    let mut by_date: BTreeMap<chrono::NaiveDate, f64> = BTreeMap::new();
    for record in records {
        *by_date.entry(record.date).or_insert(0.0) += record.quantity;
    }

    let (&first, _) = by_date
        .first_key_value()
        .ok_or_else(|| AppError::new(ErrorKind::Preprocessing, "Empty aggregated series."))?;
    let (&last, _) = by_date
        .last_key_value()
        .ok_or_else(|| AppError::new(ErrorKind::Preprocessing, "Empty aggregated series."))?;

    let mut entries = Vec::new();
    let mut date = first;
    loop {
        entries.push((date, by_date.get(&date).copied().unwrap_or(0.0)));
        if date == last {
            break;
        }
        date = date.succ_opt().ok_or_else(|| {
            AppError::new(
                ErrorKind::Preprocessing,
                format!("Calendar overflow while filling gaps after {date}."),
            )
        })?;
    }

    Ok(DailySeries::from_entries(entries))
}
