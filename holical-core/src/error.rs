//! Error types for holical.

use thiserror::Error;

/// Errors that can occur while fetching holidays or rendering a calendar.
#[derive(Error, Debug)]
pub enum HolicalError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Resource not found at {endpoint}")]
    NotFound { endpoint: String },

    #[error("Internal server error at {endpoint}")]
    ServerError { endpoint: String },

    #[error("Unexpected status code {status} at {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rust_xlsxwriter::XlsxError> for HolicalError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        HolicalError::Spreadsheet(e.to_string())
    }
}

/// Result type alias for holical operations.
pub type HolicalResult<T> = Result<T, HolicalError>;
