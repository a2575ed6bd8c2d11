//! Request JSON ingest and validation.
//!
//! This module is responsible for turning an incoming request payload into a
//! clean [`ForecastRequest`] that is safe to hand to the pipeline.
//!
//! Design goals:
//! - **Classified errors**: malformed payloads are `schema error`, an
//!   out-of-range horizon is `range error`, and both are raised before any
//!   model fitting happens.
//! - **Record-level validation** with messages naming the offending record
//! - **Separation of concerns**: no normalization or fitting logic here

use std::fs;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::SalesRecord;
use crate::error::{AppError, ErrorKind};
use crate::forecast::validate_horizon;

/// A validated forecast request.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub product_id: String,
    pub product_name: String,
    pub forecast_days: u32,
    pub sales_data: Vec<SalesRecord>,
}

/// Wire-format request before validation.
///
/// Every field is optional at this layer: missing identifiers and horizon fall
/// back to defaults, while missing/invalid sales fields become schema errors
/// during validation (not serde failures with opaque positions).
#[derive(Debug, Deserialize)]
struct RawRequest {
    #[serde(default)]
    sales_data: Vec<RawRecord>,
    #[serde(default = "default_forecast_days")]
    forecast_days: i64,
    #[serde(default = "default_product_id")]
    product_id: String,
    #[serde(default = "default_product_name")]
    product_name: String,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    quantity: Option<f64>,
}

fn default_forecast_days() -> i64 {
    30
}

fn default_product_id() -> String {
    "unknown".to_string()
}

fn default_product_name() -> String {
    "Unknown Product".to_string()
}

/// Read and validate a request from a file, or stdin when `path` is `None`.
pub fn read_request(path: Option<&Path>) -> Result<ForecastRequest, AppError> {
    let text = match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorKind::Io,
                format!("Failed to read request '{}': {e}", path.display()),
            )
        })?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to read stdin: {e}")))?;
            buf
        }
    };

    parse_request(&text)
}

/// Parse and validate a request payload.
pub fn parse_request(text: &str) -> Result<ForecastRequest, AppError> {
    let raw: RawRequest = serde_json::from_str(text)
        .map_err(|e| AppError::new(ErrorKind::Schema, format!("Invalid JSON input: {e}")))?;

    let forecast_days = validate_horizon(raw.forecast_days)?;

    let mut sales_data = Vec::with_capacity(raw.sales_data.len());
    for (i, record) in raw.sales_data.iter().enumerate() {
        sales_data.push(validate_record(i, record)?);
    }

    Ok(ForecastRequest {
        product_id: raw.product_id,
        product_name: raw.product_name,
        forecast_days,
        sales_data,
    })
}

fn validate_record(index: usize, record: &RawRecord) -> Result<SalesRecord, AppError> {
    let date_text = record.date.as_deref().ok_or_else(|| {
        AppError::new(
            ErrorKind::Schema,
            format!("Record {index}: missing 'date' field."),
        )
    })?;
    let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d").map_err(|_| {
        AppError::new(
            ErrorKind::Schema,
            format!("Record {index}: unparseable date '{date_text}' (expected YYYY-MM-DD)."),
        )
    })?;

    let quantity = record.quantity.ok_or_else(|| {
        AppError::new(
            ErrorKind::Schema,
            format!("Record {index}: missing 'quantity' field."),
        )
    })?;
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(AppError::new(
            ErrorKind::Schema,
            format!("Record {index}: quantity must be a non-negative number, got {quantity}."),
        ));
    }

    Ok(SalesRecord { date, quantity })
}
