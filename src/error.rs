//! Error types.
//!
//! - `MetricsError`: typed failures of the metric pipeline and payload decoding
//! - `AppError`: what the `bizm` binary reports (message + process exit code)

use thiserror::Error;

/// Exit code for unreadable/malformed input files and failed exports.
pub const EXIT_INPUT: u8 = 2;
/// Exit code when the payload has too few days to compute anything.
pub const EXIT_INSUFFICIENT_DATA: u8 = 3;
/// Exit code for computation failures (zero divisors).
pub const EXIT_COMPUTATION: u8 = 4;

/// Failures raised by the pipeline stages and payload decoding.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("At least 2 days of data are required (found {found})")]
    InsufficientData { found: usize },

    #[error("Division by zero: {what}")]
    DivisionByZero { what: &'static str },

    #[error("Record {index}: missing field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Record {index}: invalid field '{field}': {reason}")]
    InvalidField {
        index: usize,
        field: &'static str,
        reason: String,
    },
}

impl MetricsError {
    pub fn exit_code(&self) -> u8 {
        match self {
            MetricsError::InsufficientData { .. } => EXIT_INSUFFICIENT_DATA,
            MetricsError::DivisionByZero { .. } => EXIT_COMPUTATION,
            MetricsError::MissingField { .. } | MetricsError::InvalidField { .. } => EXIT_INPUT,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<MetricsError> for AppError {
    fn from(err: MetricsError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
