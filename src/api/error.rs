//! Error taxonomy for the translation service API.

use thiserror::Error;

/// Errors produced by [`Transport`](super::transport::Transport) and the
/// typed operations built on top of it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received at all (connection refused, DNS, timeout).
    #[error("could not reach the translation service: {0}")]
    TransportUnavailable(#[source] reqwest::Error),

    /// The backend answered with a non-2xx status.
    ///
    /// `message` is the backend's `detail` string when the error body could
    /// be parsed, or a generic `HTTP {status}` fallback otherwise.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// The upload endpoint rejected the file (size, type, quota).
    #[error("upload rejected: {message}")]
    UploadRejected { status: u16, message: String },

    /// A required argument was missing or empty; detected before any
    /// network call is made.
    #[error("{0}")]
    InvalidInput(String),
}

impl ApiError {
    /// The HTTP status associated with this error, if the backend responded.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } | Self::UploadRejected { status, .. } => {
                Some(*status)
            }
            Self::TransportUnavailable(_) | Self::InvalidInput(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_displays_message_only() {
        let err = ApiError::RequestFailed {
            status: 422,
            message: "target_language is required".to_string(),
        };
        assert_eq!(err.to_string(), "target_language is required");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_upload_rejected_display() {
        let err = ApiError::UploadRejected {
            status: 413,
            message: "file too large".to_string(),
        };
        assert_eq!(err.to_string(), "upload rejected: file too large");
    }

    #[test]
    fn test_invalid_input_has_no_status() {
        let err = ApiError::InvalidInput("target language is required".to_string());
        assert_eq!(err.status(), None);
    }
}
