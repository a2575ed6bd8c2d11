//! Process-wide error type.
//!
//! Every failure is classified with an [`ErrorKind`] so the boundary layer can
//! render `kind: detail` without inspecting internals, and so the process can
//! map each class to a stable exit code:
//!
//! - `2` — input/boundary problems (schema, horizon range, file I/O)
//! - `3` — insufficient historical data
//! - `4` — computation failures (preprocessing, model fit, forecast)

/// Classification of a pipeline failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing input fields.
    Schema,
    /// Fewer than 2 historical data points.
    InsufficientData,
    /// Unexpected failure while normalizing the raw series.
    Preprocessing,
    /// Unexpected numeric failure while fitting the model.
    ModelFit,
    /// Unexpected numeric failure while generating the forecast.
    Forecast,
    /// Forecast horizon outside the supported [1, 365] range.
    Range,
    /// File read/write failure at the request/response boundary.
    Io,
}

impl ErrorKind {
    /// Stable label used in rendered messages and the failure envelope.
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Schema => "schema error",
            ErrorKind::InsufficientData => "insufficient data",
            ErrorKind::Preprocessing => "preprocessing error",
            ErrorKind::ModelFit => "model fit error",
            ErrorKind::Forecast => "forecast error",
            ErrorKind::Range => "range error",
            ErrorKind::Io => "io error",
        }
    }

    /// Process exit code for this class of failure.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Schema | ErrorKind::Range | ErrorKind::Io => 2,
            ErrorKind::InsufficientData => 3,
            ErrorKind::Preprocessing | ErrorKind::ModelFit | ErrorKind::Forecast => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_kind_and_detail() {
        let err = AppError::new(ErrorKind::Range, "Forecast days must be between 1 and 365.");
        assert_eq!(
            err.to_string(),
            "range error: Forecast days must be between 1 and 365."
        );
    }

    #[test]
    fn exit_codes_follow_classification() {
        assert_eq!(ErrorKind::Schema.exit_code(), 2);
        assert_eq!(ErrorKind::Range.exit_code(), 2);
        assert_eq!(ErrorKind::InsufficientData.exit_code(), 3);
        assert_eq!(ErrorKind::ModelFit.exit_code(), 4);
        assert_eq!(ErrorKind::Forecast.exit_code(), 4);
    }
}
