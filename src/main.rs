// lexsum/src/main.rs
use lexsum::api::start_api_server;
use lexsum::config::ApiConfig;
use lexsum::monitoring::{init_tracing, MonitoringConfig};
use lexsum::summarizer::shared_summarizer;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let monitoring = MonitoringConfig::from_env();
    let _log_guard = init_tracing(&monitoring)?;

    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    let summarizer = shared_summarizer(&config.summarizer).map_err(|e| {
        error!(error = %e, "Failed to initialize summarizer");
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    info!(
        model = summarizer.model_name(),
        max_chunk_chars = config.max_chunk_chars,
        "Starting legal document summarizer on http://{}",
        config.bind_addr()
    );
    start_api_server(&config, summarizer)?.await
}
