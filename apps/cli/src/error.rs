//! # CLI Error Type
//!
//! Unified error type for the `breakfast-till` binary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in breakfast-till                         │
//! │                                                                         │
//! │  ConfigError ──────────┐                                                │
//! │  std::io::Error ───────┼──► CliError ──► ErrorReport ──► stderr (JSON) │
//! │  BreakfastError ───────┘        │                                       │
//! │                                 └──────► exit status                    │
//! │                                                                         │
//! │  MALFORMED_INPUT    → 2                                                 │
//! │  INVALID_PRICE_LIST → 3                                                 │
//! │  INVALID_ORDER      → 4                                                 │
//! │  everything else    → 1                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Scripts calling the binary branch on the exit status; humans read the
//! `message` field.

use breakfast_core::{BreakfastError, ErrorKind};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Everything that can stop a run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Breakfast(#[from] BreakfastError),

    #[error("Failed to format output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A payload was not a JSON array
    MalformedInput,

    /// Price list entry missing a field, or duplicated
    InvalidPriceList,

    /// Order failed validation
    InvalidOrder,

    /// Bad arguments or environment
    ConfigError,

    /// Input file could not be read
    IoError,

    /// Anything else
    Internal,
}

impl ErrorCode {
    /// Process exit status for this code.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorCode::MalformedInput => 2,
            ErrorCode::InvalidPriceList => 3,
            ErrorCode::InvalidOrder => 4,
            ErrorCode::ConfigError | ErrorCode::IoError | ErrorCode::Internal => 1,
        }
    }
}

impl CliError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::Config(_) => ErrorCode::ConfigError,
            CliError::Read { .. } => ErrorCode::IoError,
            CliError::Breakfast(err) => match err.kind() {
                ErrorKind::MalformedInput => ErrorCode::MalformedInput,
                ErrorKind::InvalidPriceList => ErrorCode::InvalidPriceList,
                ErrorKind::InvalidOrder => ErrorCode::InvalidOrder,
                ErrorKind::Internal => ErrorCode::Internal,
            },
            CliError::Output(_) => ErrorCode::Internal,
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// What gets printed to stderr on failure.
///
/// ```json
/// { "code": "INVALID_ORDER", "message": "Invalid order: missing field 'money'" }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use breakfast_core::ValidationError;

    #[test]
    fn test_codes_and_exit_status() {
        let err: CliError = BreakfastError::malformed("orders", "EOF").into();
        assert_eq!(err.code(), ErrorCode::MalformedInput);
        assert_eq!(err.code().exit_code(), 2);

        let err: CliError =
            BreakfastError::from(ValidationError::Required { field: "money" }).into();
        assert_eq!(err.code(), ErrorCode::InvalidOrder);
        assert_eq!(err.code().exit_code(), 4);

        let err: CliError =
            ConfigError::MissingRequired("BREAKFAST_ORDERS".to_string()).into();
        assert_eq!(err.code().exit_code(), 1);
    }

    #[test]
    fn test_report_serialization() {
        let err: CliError =
            BreakfastError::from(ValidationError::Required { field: "money" }).into();
        let json = serde_json::to_value(err.report()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "INVALID_ORDER",
                "message": "Invalid order: missing field 'money'"
            })
        );
    }

    #[test]
    fn test_read_error_message() {
        let err = CliError::Read {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.code(), ErrorCode::IoError);
        assert_eq!(err.to_string(), "Failed to read missing.json: not found");
    }
}
