// Main entry point for the generation service

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use inference_client::InferenceClient;
use server_core::generation::{GenerationOrchestrator, InMemoryJobStore, JobRegistry};
use server_core::server::build_app;
use server_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Siteforge generation service");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Archive output root must exist before the first request
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let inference = InferenceClient::new(config.inference_url.clone())
        .with_timeout(Duration::from_secs(config.inference_timeout_secs));
    tracing::info!("Inference endpoint: {}", config.inference_url);

    let registry = JobRegistry::new(Arc::new(InMemoryJobStore::new()));
    let orchestrator = Arc::new(GenerationOrchestrator::new(
        inference,
        registry,
        config.output_dir.clone(),
        config.public_base_url.clone(),
        config.inference_max_tokens,
    ));

    // Build application
    let app = build_app(orchestrator, config.output_dir.clone());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!(
        "Generation endpoint: http://localhost:{}/generate",
        config.port
    );
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
