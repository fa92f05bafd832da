// tests/huggingface_adapter.rs
// Hugging Face adapter against a local stand-in for the inference API

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use lexsum::summarizer::{HuggingFaceSummarizer, SummarizerConfig};
use lexsum::{Summarizer, SummarizerError, SummaryParams};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::time::Duration;

/// Mirrors the request back so tests can check what was sent
async fn echo_inference(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    let auth = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("none")
        .to_string();
    let params = &body["parameters"];
    let summary = format!(
        "{} [max={} min={} sample={} auth={}]",
        body["inputs"].as_str().unwrap_or_default(),
        params["max_length"],
        params["min_length"],
        params["do_sample"],
        auth
    );
    HttpResponse::Ok().json(json!([{ "summary_text": summary }]))
}

async fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({ "error": "Invalid credentials in Authorization header" }))
}

async fn empty_list() -> HttpResponse {
    HttpResponse::Ok().json(json!([]))
}

async fn wrong_shape() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "generated_text": "not a summary" }))
}

async fn slow() -> HttpResponse {
    actix_web::rt::time::sleep(Duration::from_secs(3)).await;
    HttpResponse::Ok().json(json!([{ "summary_text": "too late." }]))
}

/// Start the stand-in server on an ephemeral port
fn spawn_fake_api() -> SocketAddr {
    let server = HttpServer::new(|| {
        App::new()
            .route("/models/echo/model", web::post().to(echo_inference))
            .route("/models/locked/model", web::post().to(unauthorized))
            .route("/models/empty/model", web::post().to(empty_list))
            .route("/models/odd/model", web::post().to(wrong_shape))
            .route("/models/slow/model", web::post().to(slow))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind fake inference API");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    addr
}

fn summarizer_for(addr: SocketAddr, model: &str, token: Option<&str>) -> HuggingFaceSummarizer {
    HuggingFaceSummarizer::new(SummarizerConfig {
        endpoint: format!("http://{}", addr),
        model: model.to_string(),
        api_token: token.map(|t| t.to_string()),
        timeout: Some(Duration::from_secs(1)),
    })
    .expect("Failed to build summarizer")
}

fn params() -> SummaryParams {
    SummaryParams {
        max_length: 300,
        min_length: 30,
        do_sample: false,
    }
}

#[actix_web::test]
async fn test_sends_inputs_parameters_and_token() {
    let addr = spawn_fake_api();
    let summarizer = summarizer_for(addr, "echo/model", Some("hf_test"));

    let summary = summarizer
        .summarize("The lease is void.", &params())
        .await
        .expect("summarize failed");

    assert_eq!(
        summary,
        "The lease is void. [max=300 min=30 sample=false auth=Bearer hf_test]"
    );
}

#[actix_web::test]
async fn test_no_token_sends_no_auth_header() {
    let addr = spawn_fake_api();
    let summarizer = summarizer_for(addr, "echo/model", None);

    let summary = summarizer.summarize("Rent.", &params()).await.unwrap();
    assert!(summary.ends_with("auth=none]"));
}

#[actix_web::test]
async fn test_error_status_is_reported() {
    let addr = spawn_fake_api();
    let summarizer = summarizer_for(addr, "locked/model", Some("hf_bad"));

    match summarizer.summarize("Rent.", &params()).await {
        Err(SummarizerError::Status { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("Invalid credentials"));
        }
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[actix_web::test]
async fn test_empty_result_is_invalid() {
    let addr = spawn_fake_api();
    let summarizer = summarizer_for(addr, "empty/model", None);

    let err = summarizer.summarize("Rent.", &params()).await.unwrap_err();
    assert!(matches!(err, SummarizerError::InvalidResponse(_)));
}

#[actix_web::test]
async fn test_unexpected_shape_is_invalid() {
    let addr = spawn_fake_api();
    let summarizer = summarizer_for(addr, "odd/model", None);

    let err = summarizer.summarize("Rent.", &params()).await.unwrap_err();
    assert!(matches!(err, SummarizerError::InvalidResponse(_)));
}

#[actix_web::test]
async fn test_timeout_is_fatal() {
    let addr = spawn_fake_api();
    let summarizer = summarizer_for(addr, "slow/model", None);

    let err = summarizer.summarize("Rent.", &params()).await.unwrap_err();
    assert!(matches!(err, SummarizerError::Timeout(d) if d == Duration::from_secs(1)));
}

#[actix_web::test]
async fn test_unreachable_endpoint() {
    let summarizer = HuggingFaceSummarizer::new(SummarizerConfig {
        endpoint: "http://127.0.0.1:1".to_string(),
        model: "echo/model".to_string(),
        api_token: None,
        timeout: Some(Duration::from_secs(2)),
    })
    .unwrap();

    let err = summarizer.summarize("Rent.", &params()).await.unwrap_err();
    assert!(matches!(err, SummarizerError::ConnectionFailed(_)));
}
