//! Logging settings read by `init_tracing`
//!
//! Environment variables:
//! - RUST_LOG: filter directive, `info` when unset
//! - MONITORING_ENABLED: `false` turns logging off
//! - LOG_FORMAT: console format, `text` or `json`
//! - LOG_DIR: rolling file directory (default: ~/.lexsum/logs)
//! - LOG_TO_FILE / LOG_TO_CONSOLE: sink toggles

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: String,
    /// Applies to the console sink only; files are always JSON
    pub log_format: LogFormat,
    pub log_dir: PathBuf,
    pub enable_file_logging: bool,
    pub enable_console_logging: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("json") {
            Ok(LogFormat::Json)
        } else if s.eq_ignore_ascii_case("text") {
            Ok(LogFormat::Text)
        } else {
            Err(format!("Unknown log format: {}", s))
        }
    }
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
        Self {
            enabled: true,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            log_dir: PathBuf::from(home).join(".lexsum").join("logs"),
            enable_file_logging: false,
            enable_console_logging: true,
        }
    }
}

impl MonitoringConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values keep the default.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let flag = |key: &str, default: bool| {
            lookup(key).map_or(default, |v| v.eq_ignore_ascii_case("true"))
        };
        let defaults = Self::default();

        Self {
            enabled: flag("MONITORING_ENABLED", defaults.enabled),
            enable_file_logging: flag("LOG_TO_FILE", defaults.enable_file_logging),
            enable_console_logging: flag("LOG_TO_CONSOLE", defaults.enable_console_logging),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: lookup("LOG_FORMAT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_format),
            log_dir: lookup("LOG_DIR").map(PathBuf::from).unwrap_or(defaults.log_dir),
        }
    }

    pub fn ensure_log_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.log_dir)
    }
}
