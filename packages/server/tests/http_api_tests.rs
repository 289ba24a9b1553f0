//! HTTP surface tests: the generate and health routes over a real
//! listener.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use inference_client::InferenceClient;
use serde_json::{json, Value};
use server_core::generation::{GenerationOrchestrator, InMemoryJobStore, JobRegistry};
use server_core::server::build_app;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// App wired to an unreachable inference endpoint: every request takes
/// the fallback path, which is all the HTTP layer needs.
async fn app_with_output_root(output_root: &Path) -> Router {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let unreachable = format!("http://{}/generate", listener.local_addr().unwrap());
    drop(listener);

    let inference = InferenceClient::new(unreachable).with_timeout(Duration::from_secs(1));
    let registry = JobRegistry::new(Arc::new(InMemoryJobStore::new()));
    let orchestrator = Arc::new(GenerationOrchestrator::new(
        inference,
        registry,
        output_root,
        "http://localhost:3000",
        2000,
    ));
    build_app(orchestrator, PathBuf::from(output_root))
}

#[tokio::test]
async fn generate_returns_locators() {
    let dir = tempfile::tempdir().unwrap();
    let base = serve(app_with_output_root(dir.path()).await).await;

    let response = reqwest::Client::new()
        .post(format!("{}/generate", base))
        .json(&json!({
            "title": "Café Noss",
            "type": "business",
            "colors": "#ff6600,#111111",
            "desc": "Best coffee",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert!(body["zip_url"]
        .as_str()
        .unwrap()
        .contains("/download/site_"));
    assert!(body["preview_url"].as_str().unwrap().contains("/preview/"));
}

#[tokio::test]
async fn generate_accepts_an_empty_payload() {
    let dir = tempfile::tempdir().unwrap();
    let base = serve(app_with_output_root(dir.path()).await).await;

    let response = reqwest::Client::new()
        .post(format!("{}/generate", base))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    // Every field defaults; nothing is rejected.
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn generate_failure_returns_single_error_payload() {
    let dir = tempfile::tempdir().unwrap();
    let blocked = dir.path().join("blocked");
    std::fs::write(&blocked, b"file, not dir").unwrap();

    let base = serve(app_with_output_root(&blocked).await).await;

    let response = reqwest::Client::new()
        .post(format!("{}/generate", base))
        .json(&json!({ "title": "x" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "generation failed" }));
}

#[tokio::test]
async fn health_reports_healthy_output_root() {
    let dir = tempfile::tempdir().unwrap();
    let base = serve(app_with_output_root(dir.path()).await).await;

    let response = reqwest::Client::new()
        .get(format!("{}/health", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["output_root"]["status"], "ok");
}

#[tokio::test]
async fn health_reports_unwritable_output_root() {
    let dir = tempfile::tempdir().unwrap();
    let blocked = dir.path().join("blocked");
    std::fs::write(&blocked, b"file, not dir").unwrap();

    let base = serve(app_with_output_root(&blocked).await).await;

    let response = reqwest::Client::new()
        .get(format!("{}/health", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 503);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "unhealthy");
}
