use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;
use tracing::error;

use crate::generation::{GenerationResult, SiteSpecInput};
use crate::server::app::AppState;

#[derive(Serialize)]
pub struct GenerationFailure {
    error: String,
}

/// Generation endpoint
///
/// Accepts a site spec payload and answers with download/preview
/// locators. Provider failures are absorbed inside the orchestrator; the
/// only failure that reaches this boundary is an archive write failure,
/// answered as a single 500 payload with no locators.
pub async fn generate_handler(
    Extension(state): Extension<AppState>,
    Json(input): Json<SiteSpecInput>,
) -> Result<Json<GenerationResult>, (StatusCode, Json<GenerationFailure>)> {
    match state.orchestrator.generate(input).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            error!(error = %e, "Generation failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GenerationFailure {
                    error: "generation failed".to_string(),
                }),
            ))
        }
    }
}
