//! Response envelope assembly and writing.
//!
//! The envelope is the "portable" representation of a forecast run:
//! - `success: true` + product identity + generation timestamp + forecast/summary
//! - `success: false` + a `kind: detail` error string
//!
//! The failure envelope goes to stdout like a success would, so callers can
//! always parse one JSON object per invocation; the non-zero exit code is the
//! machine-readable failure signal.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ForecastResult;
use crate::error::{AppError, ErrorKind};
use crate::io::request::ForecastRequest;

/// Successful forecast response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessEnvelope {
    pub success: bool,
    pub product_id: String,
    pub product_name: String,
    pub forecast_generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: ForecastResult,
}

/// Failed forecast response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEnvelope {
    pub success: bool,
    pub error: String,
}

/// Assemble the success envelope for a completed run.
pub fn success_envelope(
    request: &ForecastRequest,
    generated_at: DateTime<Utc>,
    result: ForecastResult,
) -> SuccessEnvelope {
    SuccessEnvelope {
        success: true,
        product_id: request.product_id.clone(),
        product_name: request.product_name.clone(),
        forecast_generated_at: generated_at,
        result,
    }
}

/// Assemble the failure envelope for a classified error.
pub fn failure_envelope(err: &AppError) -> FailureEnvelope {
    FailureEnvelope {
        success: false,
        error: err.to_string(),
    }
}

/// Serialize a JSON value to a file, or stdout when `path` is `None`.
pub fn write_json<T: Serialize>(path: Option<&Path>, value: &T) -> Result<(), AppError> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                AppError::new(
                    ErrorKind::Io,
                    format!("Failed to create output '{}': {e}", path.display()),
                )
            })?;
            serde_json::to_writer_pretty(file, value)
                .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to write output: {e}")))?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, value)
                .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to write output: {e}")))?;
            writeln!(handle)
                .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to write output: {e}")))?;
        }
    }
    Ok(())
}
