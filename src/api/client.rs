//! Typed operations of the translation service API.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use super::error::ApiError;
use super::transport::Transport;
use super::types::{Job, JobAck, JobCreate, UploadArtifact};

/// The job-lifecycle operations the translation service exposes.
///
/// The poller and the session controller depend on this trait rather than
/// on [`TranslationApi`] directly, so tests can substitute a scripted
/// implementation without a live backend.
#[async_trait]
pub trait JobApi: Send + Sync {
    /// Uploads file contents, returning the artifact key to embed in job
    /// creation options.
    async fn upload_file(&self, filename: &str, bytes: Vec<u8>) -> Result<UploadArtifact, ApiError>;

    /// Creates a job; the returned snapshot has status `pending`.
    async fn create_job(&self, request: &JobCreate) -> Result<Job, ApiError>;

    /// Kicks off processing for a created job.
    async fn start_job(&self, job_id: &str) -> Result<JobAck, ApiError>;

    /// Requests cancellation. The status transitions to `cancelled` via a
    /// later poll, not synchronously.
    async fn cancel_job(&self, job_id: &str) -> Result<JobAck, ApiError>;

    /// Fetches the current job snapshot. Never cached.
    async fn get_job(&self, job_id: &str) -> Result<Job, ApiError>;
}

/// HTTP client for the translation service.
pub struct TranslationApi {
    transport: Transport,
}

impl TranslationApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            transport: Transport::new(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }
}

#[async_trait]
impl JobApi for TranslationApi {
    async fn upload_file(&self, filename: &str, bytes: Vec<u8>) -> Result<UploadArtifact, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("application/pdf")
            .map_err(|e| ApiError::InvalidInput(format!("invalid upload payload: {e}")))?;
        let form = Form::new().part("file", part);

        self.transport
            .post_multipart("/upload/direct", form)
            .await
            .map_err(|err| match err {
                ApiError::RequestFailed { status, message } => {
                    ApiError::UploadRejected { status, message }
                }
                other => other,
            })
    }

    async fn create_job(&self, request: &JobCreate) -> Result<Job, ApiError> {
        if request.target_language.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "target language is required".to_string(),
            ));
        }

        self.transport.post_json("/jobs", request).await
    }

    async fn start_job(&self, job_id: &str) -> Result<JobAck, ApiError> {
        self.transport.post(&format!("/jobs/{job_id}/start")).await
    }

    async fn cancel_job(&self, job_id: &str) -> Result<JobAck, ApiError> {
        self.transport.post(&format!("/jobs/{job_id}/cancel")).await
    }

    async fn get_job(&self, job_id: &str) -> Result<Job, ApiError> {
        self.transport.get(&format!("/jobs/{job_id}")).await
    }
}
