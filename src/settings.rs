// src/settings.rs
// Per-run user choices

use crate::error::{SummarizeError, SummarizeResult};
use serde::{Deserialize, Serialize};

pub const MIN_BULLETS: usize = 3;
pub const MAX_BULLETS: usize = 10;
pub const DEFAULT_BULLETS: usize = 5;

/// Minimum summary length requested from the model for every chunk
pub const MIN_SUMMARY_LENGTH: usize = 30;

/// Model length units allowed per requested bullet
pub const LENGTH_PER_BULLET: usize = 60;

/// Where the document text comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMethod {
    Paste,
    Upload,
}

impl InputMethod {
    pub fn as_str(&self) -> &str {
        match self {
            InputMethod::Paste => "paste",
            InputMethod::Upload => "upload",
        }
    }
}

/// Settings for one summarization run. Nothing here outlives the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub input_method: InputMethod,
    num_bullets: usize,
}

impl Settings {
    pub fn new(input_method: InputMethod, num_bullets: usize) -> SummarizeResult<Self> {
        if !(MIN_BULLETS..=MAX_BULLETS).contains(&num_bullets) {
            return Err(SummarizeError::InvalidBulletCount(num_bullets));
        }
        Ok(Self {
            input_method,
            num_bullets,
        })
    }

    pub fn num_bullets(&self) -> usize {
        self.num_bullets
    }

    /// Upper bound on each chunk's summary length
    pub fn max_summary_length(&self) -> usize {
        self.num_bullets * LENGTH_PER_BULLET
    }

    pub fn min_summary_length(&self) -> usize {
        MIN_SUMMARY_LENGTH
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_method: InputMethod::Paste,
            num_bullets: DEFAULT_BULLETS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.input_method, InputMethod::Paste);
        assert_eq!(settings.num_bullets(), 5);
    }

    #[test]
    fn test_bullet_range_is_inclusive() {
        assert!(Settings::new(InputMethod::Paste, 3).is_ok());
        assert!(Settings::new(InputMethod::Upload, 10).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        for n in [0, 2, 11, 100] {
            match Settings::new(InputMethod::Paste, n) {
                Err(SummarizeError::InvalidBulletCount(got)) => assert_eq!(got, n),
                other => panic!("expected InvalidBulletCount, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_length_bounds() {
        let settings = Settings::new(InputMethod::Paste, 4).unwrap();
        assert_eq!(settings.max_summary_length(), 240);
        assert_eq!(settings.min_summary_length(), 30);
    }

    #[test]
    fn test_input_method_serde() {
        let method: InputMethod = serde_json::from_str("\"upload\"").unwrap();
        assert_eq!(method, InputMethod::Upload);
        assert_eq!(method.as_str(), "upload");
    }
}
