//! Job records and the registry mapping ids to archive locations.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::common::Id;

pub type JobId = Id<Job>;

/// A registered record linking a job id to a finalized archive.
/// Created once per successful archive build, never mutated.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub archive_path: PathBuf,
    pub created_at: DateTime<Utc>,
}

/// Returned by lookups for ids that were never registered.
#[derive(Debug, Error)]
#[error("No job registered for id {0}")]
pub struct JobNotFound(pub JobId);

/// Storage backing the registry.
///
/// Injected rather than process-global so it can be swapped for a
/// persistent store and tested in isolation.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn insert(&self, job: Job);
    async fn find(&self, id: JobId) -> Option<Job>;
}

/// In-memory store: a map guarded for concurrent handler access.
#[derive(Default)]
pub struct InMemoryJobStore {
    jobs: RwLock<HashMap<JobId, Job>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn insert(&self, job: Job) {
        self.jobs.write().await.insert(job.id, job);
    }

    async fn find(&self, id: JobId) -> Option<Job> {
        self.jobs.read().await.get(&id).cloned()
    }
}

/// Issues job ids and records where each finalized archive lives.
#[derive(Clone)]
pub struct JobRegistry {
    store: Arc<dyn JobStore>,
}

impl JobRegistry {
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self { store }
    }

    /// Issue a fresh job id.
    pub fn issue(&self) -> JobId {
        JobId::new()
    }

    /// Record a finalized archive.
    ///
    /// Must only be called after the archive write has fully succeeded;
    /// a job record must never reference a partial file.
    pub async fn register(&self, id: JobId, archive_path: impl Into<PathBuf>) -> Job {
        let job = Job {
            id,
            archive_path: archive_path.into(),
            created_at: Utc::now(),
        };
        self.store.insert(job.clone()).await;
        job
    }

    /// Resolve an id to its archive path.
    pub async fn locate(&self, id: JobId) -> Result<PathBuf, JobNotFound> {
        self.store
            .find(id)
            .await
            .map(|job| job.archive_path)
            .ok_or(JobNotFound(id))
    }
}
