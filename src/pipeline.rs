// src/pipeline.rs
// Chunk -> summarize -> aggregate -> bullets

use crate::bullets::{extract_bullets, render_bullets};
use crate::chunker::{chunk_text, DEFAULT_MAX_CHUNK_CHARS};
use crate::error::{SummarizeError, SummarizeResult};
use crate::settings::Settings;
use crate::summarizer::{Summarizer, SummaryParams};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Result of one run
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub bullets: Vec<String>,
    /// Bullets as `"- "` lines, ready for display or export
    pub summary_text: String,
    pub combined_summary: String,
    pub chunk_count: usize,
}

/// Joins chunk summaries in order with a single space.
pub fn aggregate(fragments: &[String]) -> String {
    fragments.join(" ")
}

pub struct SummaryPipeline {
    summarizer: Arc<dyn Summarizer>,
    max_chunk_chars: usize,
}

impl SummaryPipeline {
    pub fn new(summarizer: Arc<dyn Summarizer>, max_chunk_chars: usize) -> Self {
        Self {
            summarizer,
            max_chunk_chars,
        }
    }

    pub fn with_default_chunking(summarizer: Arc<dyn Summarizer>) -> Self {
        Self::new(summarizer, DEFAULT_MAX_CHUNK_CHARS)
    }

    pub fn model_name(&self) -> &str {
        self.summarizer.model_name()
    }

    /// Summarize `document` into at most `settings.num_bullets()` bullets.
    ///
    /// Chunks are sent to the model one at a time, in order. The first model
    /// failure aborts the run.
    pub async fn run(&self, document: &str, settings: &Settings) -> SummarizeResult<SummaryReport> {
        if document.is_empty() {
            return Err(SummarizeError::MissingInput);
        }

        let start = Instant::now();
        let chunks = chunk_text(document, self.max_chunk_chars);
        let params = SummaryParams::for_settings(settings);

        info!(
            model = self.summarizer.model_name(),
            input_method = settings.input_method.as_str(),
            document_chars = document.chars().count(),
            chunk_count = chunks.len(),
            num_bullets = settings.num_bullets(),
            "Starting summary run"
        );

        let mut fragments = Vec::with_capacity(chunks.len());
        for (idx, chunk) in chunks.iter().enumerate() {
            debug!(chunk_index = idx, "Sending chunk to model");
            let fragment = self.summarizer.summarize(chunk, &params).await.map_err(|e| {
                error!(chunk_index = idx, error = %e, "Summarization aborted");
                SummarizeError::from(e)
            })?;
            fragments.push(fragment);
        }

        let combined_summary = aggregate(&fragments);
        let bullets = extract_bullets(&combined_summary, document, settings.num_bullets());
        let summary_text = render_bullets(&bullets);

        info!(
            chunk_count = chunks.len(),
            bullet_count = bullets.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Summary run complete"
        );

        Ok(SummaryReport {
            bullets,
            summary_text,
            combined_summary,
            chunk_count: chunks.len(),
        })
    }
}
