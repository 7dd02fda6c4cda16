//! Wire types for the translation service API.
//!
//! These mirror the backend's JSON schemas. Snapshots are treated as
//! authoritative and replaced wholesale on every fetch; the client never
//! mutates a job locally.

use serde::{Deserialize, Serialize};

/// Pipeline status of a translation job.
///
/// The pipeline advances monotonically through the non-terminal stages;
/// `Completed`, `Failed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Uploading,
    Uploaded,
    Extracting,
    Translating,
    Shaping,
    Building,
    QaCheck,
    Completed,
    Failed,
    Cancelled,
}

impl JobStatus {
    /// Returns `true` once no further transitions can occur.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }

    /// Human-readable stage label for progress display.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Waiting to start",
            Self::Uploading => "Uploading document",
            Self::Uploaded => "Upload complete",
            Self::Extracting => "Extracting content",
            Self::Translating => "Translating",
            Self::Shaping => "Shaping text",
            Self::Building => "Rebuilding layout",
            Self::QaCheck => "Quality check",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// A point-in-time snapshot of a translation job.
///
/// Timestamps are kept as opaque strings; the client only displays them.
/// A completed snapshot should carry `download_url` and a failed one
/// `error_message`, but a snapshot violating that is tolerated - the
/// fields simply stay `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub source_language: Option<String>,
    pub target_language: String,
    pub status: JobStatus,
    pub progress_percent: f32,
    #[serde(default)]
    pub current_stage: Option<String>,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub processing_time: Option<f64>,
    pub created_at: String,
    #[serde(default)]
    pub completed_at: Option<String>,
}

impl Job {
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Stage text for display: the backend's `current_stage` when present,
    /// otherwise a label derived from the status.
    pub fn stage_label(&self) -> &str {
        self.current_stage
            .as_deref()
            .unwrap_or_else(|| self.status.label())
    }
}

/// Request body for creating a job.
#[derive(Debug, Clone, Serialize)]
pub struct JobCreate {
    pub filename: String,
    pub file_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    pub target_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

/// Reference to an uploaded file, consumed once at job creation.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadArtifact {
    pub file_key: String,
    pub file_size: u64,
}

/// Acknowledgement returned by the start and cancel endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct JobAck {
    pub message: String,
    pub job_id: String,
}
