// src/error.rs
// Error taxonomy for a single summarization run

use actix_web::http::StatusCode;
use thiserror::Error;

/// Result type for pipeline operations
pub type SummarizeResult<T> = Result<T, SummarizeError>;

/// Every failure is terminal for the current run; nothing is retried.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Please provide text or upload a file first.")]
    MissingInput,

    #[error("Summarization model failed: {0}")]
    ModelInvocation(String),

    #[error("Number of bullet points must be between 3 and 10, got {0}")]
    InvalidBulletCount(usize),

    #[error("Unsupported file type: {0} (only .txt and .pdf are accepted)")]
    UnsupportedFileType(String),

    #[error("Could not read document: {0}")]
    Extraction(String),
}

impl SummarizeError {
    /// HTTP status the UI shell reports for this failure
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingInput
            | Self::InvalidBulletCount(_)
            | Self::UnsupportedFileType(_) => StatusCode::BAD_REQUEST,
            Self::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ModelInvocation(_) => StatusCode::BAD_GATEWAY,
        }
    }
}
