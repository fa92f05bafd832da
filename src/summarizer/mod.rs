// src/summarizer/mod.rs
// Summarization model abstraction - any backend that can turn text into a shorter text
// Default: facebook/bart-large-cnn via the Hugging Face Inference API

pub mod huggingface;

pub use huggingface::HuggingFaceSummarizer;

use crate::error::SummarizeError;
use crate::settings::Settings;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";

/// Length bounds passed to the model for one chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryParams {
    pub max_length: usize,
    pub min_length: usize,
    pub do_sample: bool,
}

impl SummaryParams {
    /// Deterministic generation bounded by the requested bullet count
    pub fn for_settings(settings: &Settings) -> Self {
        Self {
            max_length: settings.max_summary_length(),
            min_length: settings.min_summary_length(),
            do_sample: false,
        }
    }
}

/// Summarizer trait - implement this to plug in another model backend
#[async_trait::async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String, SummarizerError>;
    fn model_name(&self) -> &str;
}

/// Error types for model calls
#[derive(Debug, Clone, Error)]
pub enum SummarizerError {
    #[error("cannot reach model endpoint: {0}")]
    ConnectionFailed(String),

    #[error("model call timed out after {0:?}")]
    Timeout(Duration),

    #[error("model endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid model response: {0}")]
    InvalidResponse(String),

    #[error("summarizer config error: {0}")]
    ConfigError(String),
}

impl From<SummarizerError> for SummarizeError {
    fn from(err: SummarizerError) -> Self {
        SummarizeError::ModelInvocation(err.to_string())
    }
}

/// Connection settings for the hosted model
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummarizerConfig {
    pub endpoint: String,
    pub model: String,
    #[serde(skip_serializing)]
    pub api_token: Option<String>,
    pub timeout: Option<Duration>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_token: None,
            timeout: None,
        }
    }
}

/// Build a summarizer from config
pub fn create_summarizer(config: &SummarizerConfig) -> Result<Arc<dyn Summarizer>, SummarizerError> {
    info!(
        endpoint = %config.endpoint,
        model = %config.model,
        authenticated = config.api_token.is_some(),
        "Initializing summarizer"
    );
    let summarizer = HuggingFaceSummarizer::new(config.clone())?;
    Ok(Arc::new(summarizer))
}

static SHARED_SUMMARIZER: OnceCell<Arc<dyn Summarizer>> = OnceCell::new();

/// Process-wide summarizer, built on first use and reused afterwards.
///
/// Later calls return the first instance regardless of `config`.
pub fn shared_summarizer(config: &SummarizerConfig) -> Result<Arc<dyn Summarizer>, SummarizerError> {
    SHARED_SUMMARIZER
        .get_or_try_init(|| create_summarizer(config))
        .map(Arc::clone)
}
