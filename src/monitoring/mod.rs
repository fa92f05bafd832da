//! Monitoring module for lexsum
//!
//! Provides structured logging with tracing. Log files, when enabled, go to
//! ~/.lexsum/logs/ unless LOG_DIR says otherwise.

pub mod config;
pub mod tracing_config;

pub use config::{LogFormat, MonitoringConfig};
pub use tracing_config::init_tracing;
