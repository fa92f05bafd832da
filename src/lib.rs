pub mod api;
pub mod bullets;
pub mod chunker;
pub mod config;
pub mod error;
pub mod input;
pub mod middleware;
pub mod monitoring;
pub mod pdf;
pub mod pipeline;
pub mod settings;
pub mod summarizer;

pub use error::{SummarizeError, SummarizeResult};
pub use pipeline::{SummaryPipeline, SummaryReport};
pub use settings::{InputMethod, Settings};
pub use summarizer::{Summarizer, SummarizerError, SummaryParams};
