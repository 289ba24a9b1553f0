use std::path::Path;

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    output_root: OutputRootHealth,
}

#[derive(Serialize)]
pub struct OutputRootHealth {
    status: String,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint
///
/// Probes the archive output root (creatable and writable; archives
/// cannot be published without it).
///
/// Returns 200 OK if healthy, 503 Service Unavailable otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let output_root = probe_output_root(&state.output_root);

    let is_healthy = output_root.status == "ok";
    let overall_status = if is_healthy { "healthy" } else { "unhealthy" };
    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            status: overall_status.to_string(),
            output_root,
        }),
    )
}

fn probe_output_root(root: &Path) -> OutputRootHealth {
    let probe = std::fs::create_dir_all(root).and_then(|_| {
        let probe_path = root.join(".healthcheck");
        std::fs::write(&probe_path, b"ok")?;
        std::fs::remove_file(&probe_path)
    });

    match probe {
        Ok(()) => OutputRootHealth {
            status: "ok".to_string(),
            path: root.display().to_string(),
            error: None,
        },
        Err(e) => OutputRootHealth {
            status: "error".to_string(),
            path: root.display().to_string(),
            error: Some(e.to_string()),
        },
    }
}
