// src/config.rs
use crate::chunker::DEFAULT_MAX_CHUNK_CHARS;
use crate::summarizer::{SummarizerConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL};
use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub summarizer: SummarizerConfig,
    pub max_chunk_chars: usize,
    pub max_upload_bytes: usize,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BACKEND_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or(&lookup, "BACKEND_PORT", 3010u16)?;

        let timeout = match lookup("MODEL_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(parse_value("MODEL_TIMEOUT_SECS", &raw)?)),
            None => None,
        };
        let summarizer = SummarizerConfig {
            endpoint: lookup("SUMMARIZER_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            model: lookup("SUMMARIZER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_token: lookup("HF_TOKEN").filter(|t| !t.is_empty()),
            timeout,
        };

        let max_chunk_chars = parse_or(&lookup, "MAX_CHUNK_CHARS", DEFAULT_MAX_CHUNK_CHARS)?;
        if max_chunk_chars == 0 {
            return Err(ConfigError::InvalidValue {
                key: "MAX_CHUNK_CHARS".to_string(),
                value: "0".to_string(),
            });
        }
        let max_upload_bytes = parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?;

        Ok(Self {
            host,
            port,
            summarizer,
            max_chunk_chars,
            max_upload_bytes,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}
