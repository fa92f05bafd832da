// src/api/mod.rs
// HTTP shell around the summary pipeline

pub mod page;

use crate::bullets::{render_bullets, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
use crate::config::ApiConfig;
use crate::error::{SummarizeError, SummarizeResult};
use crate::input::{acquire_text, acquire_upload_text, UploadedFile};
use crate::middleware::{request_id, RequestIdLayer};
use crate::pipeline::{SummaryPipeline, SummaryReport};
use crate::settings::{InputMethod, Settings, DEFAULT_BULLETS};
use crate::summarizer::Summarizer;
use actix_cors::Cors;
use actix_multipart::Multipart;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::http::StatusCode;
use actix_web::{web, App, Error, HttpRequest, HttpResponse, HttpServer};
use chrono::Utc;
use futures_util::stream::StreamExt;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared across workers; holds nothing mutable
pub struct AppState {
    pub pipeline: SummaryPipeline,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(summarizer: Arc<dyn Summarizer>, config: &ApiConfig) -> Self {
        Self {
            pipeline: SummaryPipeline::new(summarizer, config.max_chunk_chars),
            max_upload_bytes: config.max_upload_bytes,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PasteRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_bullets")]
    pub num_bullets: usize,
}

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    pub num_bullets: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    pub bullets: Vec<String>,
}

fn default_bullets() -> usize {
    DEFAULT_BULLETS
}

fn error_response(err: &SummarizeError, request_id: &str) -> HttpResponse {
    HttpResponse::build(err.status_code()).json(json!({
        "status": "error",
        "message": err.to_string(),
        "request_id": request_id
    }))
}

fn report_response(report: &SummaryReport, request_id: &str) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "success",
        "bullets": report.bullets,
        "summary_text": report.summary_text,
        "chunk_count": report.chunk_count,
        "request_id": request_id
    }))
}

async fn run_pipeline(
    state: &AppState,
    settings: &Settings,
    text: SummarizeResult<String>,
    request_id: &str,
) -> HttpResponse {
    let text = match text {
        Ok(t) => t,
        Err(e) => return error_response(&e, request_id),
    };

    match state.pipeline.run(&text, settings).await {
        Ok(report) => report_response(&report, request_id),
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "Summary run failed");
            error_response(&e, request_id)
        }
    }
}

/// JSON body extractor settings: same size cap as uploads, errors in the
/// usual `{status, message, request_id}` shape
pub fn json_config(max_bytes: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_bytes)
        .error_handler(|err, req| {
            let request_id = request_id(req);
            let status = match &err {
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    StatusCode::PAYLOAD_TOO_LARGE
                }
                _ => StatusCode::BAD_REQUEST,
            };
            warn!(request_id = %request_id, error = %err, "Rejected JSON body");
            let response = HttpResponse::build(status).json(json!({
                "status": "error",
                "message": err.to_string(),
                "request_id": request_id
            }));
            InternalError::from_response(err, response).into()
        })
}

async fn index_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page::INDEX_HTML)
}

async fn health_check(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "model": state.pipeline.model_name(),
        "timestamp": Utc::now().to_rfc3339(),
        "request_id": request_id(&req)
    }))
}

/// POST /summarize - pasted text
pub async fn summarize_text(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<PasteRequest>,
) -> HttpResponse {
    let request_id = request_id(&req);
    let settings = match Settings::new(InputMethod::Paste, body.num_bullets) {
        Ok(s) => s,
        Err(e) => return error_response(&e, &request_id),
    };
    let text = acquire_text(InputMethod::Paste, Some(body.text.as_str()), None);
    run_pipeline(&state, &settings, text, &request_id).await
}

/// POST /summarize/upload - multipart with one .txt or .pdf file
pub async fn summarize_upload(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<UploadQuery>,
    mut payload: Multipart,
) -> Result<HttpResponse, Error> {
    let request_id = request_id(&req);
    let mut num_bullets = query.num_bullets.unwrap_or(DEFAULT_BULLETS);
    let mut upload: Option<UploadedFile> = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(|s| s.to_string());
        let field_name = field.name().unwrap_or("").to_string();
        let content_type = field.content_type().map(|m| m.essence_str().to_string());

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            if data.len() + chunk.len() > state.max_upload_bytes {
                warn!(request_id = %request_id, limit = state.max_upload_bytes, "Upload too large");
                return Ok(HttpResponse::PayloadTooLarge().json(json!({
                    "status": "error",
                    "message": format!("Upload exceeds {} bytes", state.max_upload_bytes),
                    "request_id": request_id
                })));
            }
            data.extend_from_slice(&chunk);
        }

        match filename {
            Some(name) if upload.is_none() => {
                info!(request_id = %request_id, filename = %name, bytes = data.len(), "Received upload");
                upload = Some(UploadedFile::new(name, content_type, data));
            }
            Some(name) => {
                warn!(request_id = %request_id, filename = %name, "Ignoring extra uploaded file");
            }
            None if field_name == "num_bullets" => {
                let raw = String::from_utf8_lossy(&data);
                match raw.trim().parse() {
                    Ok(n) => num_bullets = n,
                    Err(_) => {
                        return Ok(HttpResponse::BadRequest().json(json!({
                            "status": "error",
                            "message": format!("num_bullets must be an integer, got {:?}", raw),
                            "request_id": request_id
                        })))
                    }
                }
            }
            None => {}
        }
    }

    let settings = match Settings::new(InputMethod::Upload, num_bullets) {
        Ok(s) => s,
        Err(e) => return Ok(error_response(&e, &request_id)),
    };
    let text = acquire_upload_text(upload).await;
    Ok(run_pipeline(&state, &settings, text, &request_id).await)
}

/// POST /summarize/download - bullets as legal_summary.txt
pub async fn download_summary(body: web::Json<DownloadRequest>) -> HttpResponse {
    let content = render_bullets(&body.bullets);
    HttpResponse::Ok()
        .content_type(format!("{}; charset=utf-8", EXPORT_MIME_TYPE))
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(EXPORT_FILE_NAME.to_string())],
        })
        .body(content)
}

/// Route table, shared by the server and the HTTP tests
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index_page))
        .route("/health", web::get().to(health_check))
        .route("/summarize", web::post().to(summarize_text))
        .route("/summarize/upload", web::post().to(summarize_upload))
        .route("/summarize/download", web::post().to(download_summary));
}

pub fn start_api_server(
    config: &ApiConfig,
    summarizer: Arc<dyn Summarizer>,
) -> std::io::Result<actix_web::dev::Server> {
    let bind_addr = config.bind_addr();
    let state = web::Data::new(AppState::new(summarizer, config));
    let max_upload_bytes = config.max_upload_bytes;

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .app_data(json_config(max_upload_bytes))
            .wrap(cors)
            .wrap(RequestIdLayer)
            .configure(routes)
    })
    .bind(bind_addr.as_str())?
    .run();

    info!(bind_addr = %bind_addr, "API server listening");
    Ok(server)
}
