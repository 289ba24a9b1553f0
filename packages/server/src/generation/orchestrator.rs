//! Request pipeline: prompt building, the inference attempt, content
//! selection, archive packaging, and job registration.

use std::path::PathBuf;

use inference_client::InferenceClient;
use serde::Serialize;
use tracing::{info, warn};

use super::archive::{self, ArchiveError};
use super::content::GenerationContent;
use super::error::GenerationError;
use super::jobs::{JobId, JobRegistry};
use super::prompt::build_prompt;
use super::spec::{SiteSpec, SiteSpecInput};

/// Where the content of a finished run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Inference,
    Fallback,
}

/// Locators returned to the caller, both derived from the job id.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub zip_url: String,
    pub preview_url: String,
}

/// Composes the pipeline components. The only part of the service whose
/// external dependencies are visible to callers; everything beneath it is
/// pure or narrowly scoped.
pub struct GenerationOrchestrator {
    inference: InferenceClient,
    registry: JobRegistry,
    output_root: PathBuf,
    public_base_url: String,
    max_tokens: u32,
}

impl GenerationOrchestrator {
    pub fn new(
        inference: InferenceClient,
        registry: JobRegistry,
        output_root: impl Into<PathBuf>,
        public_base_url: impl Into<String>,
        max_tokens: u32,
    ) -> Self {
        Self {
            inference,
            registry,
            output_root: output_root.into(),
            public_base_url: public_base_url.into(),
            max_tokens,
        }
    }

    /// The registry backing this orchestrator.
    pub fn registry(&self) -> &JobRegistry {
        &self.registry
    }

    /// Run one generation request end to end.
    ///
    /// A provider failure (unreachable, error status, malformed body) is
    /// absorbed into the fallback transition and never fails the request;
    /// an archive failure always does. Exactly one job and one archive
    /// exist after a successful return.
    pub async fn generate(
        &self,
        input: SiteSpecInput,
    ) -> Result<GenerationResult, GenerationError> {
        let spec = SiteSpec::normalize(input);
        let prompt = build_prompt(&spec);

        let (content, source) = match self.inference.generate(prompt, self.max_tokens).await {
            Ok(draft) => (
                GenerationContent::from_draft(draft, &spec),
                ContentSource::Inference,
            ),
            Err(e) => {
                warn!(error = %e, "Inference failed, using fallback");
                (
                    GenerationContent::fallback_for(&spec),
                    ContentSource::Fallback,
                )
            }
        };

        let id = self.registry.issue();

        // Zip writing is synchronous storage I/O; keep it off the async
        // workers.
        let output_root = self.output_root.clone();
        let archive_path =
            tokio::task::spawn_blocking(move || archive::write_archive(content, &output_root, id))
                .await
                .map_err(|e| ArchiveError::Io(std::io::Error::other(e)))??;

        let job = self.registry.register(id, archive_path).await;

        info!(
            job_id = %job.id,
            source = ?source,
            archive = %job.archive_path.display(),
            "Generation complete"
        );

        Ok(self.result_for(id))
    }

    /// Derive the caller-facing locators for a job id.
    fn result_for(&self, id: JobId) -> GenerationResult {
        GenerationResult {
            zip_url: format!(
                "{}/download/{}",
                self.public_base_url,
                archive::archive_file_name(id)
            ),
            preview_url: format!("{}/preview/{}", self.public_base_url, id),
        }
    }
}
