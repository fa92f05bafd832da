// src/summarizer/huggingface.rs
// Hugging Face Inference API backend

use super::{Summarizer, SummarizerConfig, SummarizerError, SummaryParams};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

pub struct HuggingFaceSummarizer {
    config: SummarizerConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a SummaryParams,
}

#[derive(Deserialize)]
struct InferenceOutput {
    summary_text: String,
}

impl HuggingFaceSummarizer {
    pub fn new(config: SummarizerConfig) -> Result<Self, SummarizerError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SummarizerError::ConfigError(e.to_string()))?;
        Ok(Self { config, client })
    }

    fn model_url(&self) -> String {
        format!(
            "{}/models/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    fn request_error(&self, err: reqwest::Error) -> SummarizerError {
        match self.config.timeout {
            Some(timeout) if err.is_timeout() => SummarizerError::Timeout(timeout),
            _ => SummarizerError::ConnectionFailed(format!(
                "{}: {}",
                self.config.endpoint, err
            )),
        }
    }
}

#[async_trait::async_trait]
impl Summarizer for HuggingFaceSummarizer {
    async fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String, SummarizerError> {
        debug!(
            model = %self.config.model,
            input_chars = text.chars().count(),
            max_length = params.max_length,
            min_length = params.min_length,
            "Summarizing chunk"
        );

        let body = InferenceRequest {
            inputs: text,
            parameters: params,
        };
        let mut request = self.client.post(self.model_url()).json(&body);
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(model = %self.config.model, status = status.as_u16(), "Model endpoint rejected request");
            return Err(SummarizerError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let outputs: Vec<InferenceOutput> = response.json().await.map_err(|e| {
            if e.is_timeout() {
                self.request_error(e)
            } else {
                SummarizerError::InvalidResponse(e.to_string())
            }
        })?;

        let summary = outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text)
            .ok_or_else(|| SummarizerError::InvalidResponse("empty result list".to_string()))?;

        debug!(model = %self.config.model, summary_chars = summary.chars().count(), "Chunk summarized");
        Ok(summary)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
