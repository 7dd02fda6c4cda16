mod client;
mod error;
mod transport;
mod types;

pub use client::{JobApi, TranslationApi};
pub use error::ApiError;
pub use transport::Transport;
pub use types::{Job, JobAck, JobCreate, JobStatus, UploadArtifact};
