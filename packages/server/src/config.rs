use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub inference_url: String,
    pub inference_timeout_secs: u64,
    pub inference_max_tokens: u32,
    pub output_dir: PathBuf,
    pub public_base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid number")?;

        Ok(Self {
            port,
            inference_url: env::var("INFERENCE_URL")
                .unwrap_or_else(|_| "http://localhost:8000/generate".to_string()),
            inference_timeout_secs: env::var("INFERENCE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .context("INFERENCE_TIMEOUT_SECS must be a valid number")?,
            inference_max_tokens: env::var("INFERENCE_MAX_TOKENS")
                .unwrap_or_else(|_| "2000".to_string())
                .parse()
                .context("INFERENCE_MAX_TOKENS must be a valid number")?,
            output_dir: env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "generated".to_string())
                .into(),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| format!("http://localhost:{}", port)),
        })
    }
}
