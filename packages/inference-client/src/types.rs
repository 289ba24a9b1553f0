//! Inference API request and response types.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Generation request sent to the inference endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Rendered prompt text
    pub prompt: String,

    /// Token budget for the completion
    pub max_tokens: u32,
}

/// Raw response body as the endpoint returns it.
///
/// `assets` is kept as a raw JSON value so that a provider sending a
/// non-sequence there degrades to "no assets" instead of failing the
/// whole response.
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponseRaw {
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub css: Option<String>,
    #[serde(default)]
    pub assets: Option<serde_json::Value>,
}

/// A binary site asset decoded from a provider response entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Relative path inside the generated site (e.g. `images/logo.png`)
    pub path: String,

    /// Decoded file contents
    pub bytes: Vec<u8>,
}

/// Validated draft content from the provider.
///
/// Shape validation guarantees at least one of `html`/`css` is present;
/// either field may individually be missing and is left for the caller to
/// repair.
#[derive(Debug, Clone)]
pub struct SiteDraft {
    pub html: Option<String>,
    pub css: Option<String>,
    pub assets: Vec<Asset>,
}

/// Decode the `assets` value of a response into well-formed entries.
///
/// An entry must be an object carrying a non-empty `path` and valid base64
/// `data_base64`; anything else is skipped individually.
pub(crate) fn decode_assets(value: Option<serde_json::Value>) -> Vec<Asset> {
    let entries = match value {
        Some(serde_json::Value::Array(entries)) => entries,
        _ => return Vec::new(),
    };

    entries
        .into_iter()
        .filter_map(|entry| {
            let path = entry
                .get("path")
                .and_then(|p| p.as_str())
                .unwrap_or_default();
            if path.is_empty() {
                tracing::debug!("Skipping asset entry without a path");
                return None;
            }

            let data = match entry.get("data_base64").and_then(|d| d.as_str()) {
                Some(data) => data,
                None => {
                    tracing::debug!(path, "Skipping asset entry without base64 data");
                    return None;
                }
            };

            match STANDARD.decode(data) {
                Ok(bytes) => Some(Asset {
                    path: path.to_string(),
                    bytes,
                }),
                Err(e) => {
                    tracing::debug!(path, error = %e, "Skipping asset entry with invalid base64");
                    None
                }
            }
        })
        .collect()
}
