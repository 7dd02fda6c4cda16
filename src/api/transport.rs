//! HTTP transport for the translation service.
//!
//! A thin layer over reqwest that normalizes non-2xx responses into
//! [`ApiError::RequestFailed`] and decodes JSON bodies on success. No
//! retries happen here; retry policy belongs to the poller.

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Error body shape used by the backend for all non-2xx responses.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    detail: String,
}

pub struct Transport {
    client: Client,
    base_url: String,
}

impl Transport {
    /// Creates a transport rooted at the given base URL
    /// (e.g. `http://localhost:8000/api/v1`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Issues a GET and decodes the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(ApiError::TransportUnavailable)?;

        Self::decode(response).await
    }

    /// Issues a POST with a JSON body and decodes the JSON response.
    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(ApiError::TransportUnavailable)?;

        Self::decode(response).await
    }

    /// Issues a bodyless POST and decodes the JSON response.
    pub async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .send()
            .await
            .map_err(ApiError::TransportUnavailable)?;

        Self::decode(response).await
    }

    /// Issues a POST with a multipart form and decodes the JSON response.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::TransportUnavailable)?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            });
        }

        response
            .json()
            .await
            .map_err(|err| ApiError::RequestFailed {
                status: status.as_u16(),
                message: format!("invalid response body: {err}"),
            })
    }
}

/// Extracts the backend's `detail` message from an error body, falling back
/// to a generic `HTTP {status}` when the body is not a parseable error
/// payload.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map_or_else(|_| format!("HTTP {status}"), |parsed| parsed.detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_parses_detail() {
        let body = r#"{"detail": "Job not found"}"#;
        assert_eq!(error_message(404, body), "Job not found");
    }

    #[test]
    fn test_error_message_falls_back_on_empty_body() {
        assert_eq!(error_message(502, ""), "HTTP 502");
    }

    #[test]
    fn test_error_message_falls_back_on_html_body() {
        let body = "<html><body>Bad Gateway</body></html>";
        assert_eq!(error_message(502, body), "HTTP 502");
    }

    #[test]
    fn test_error_message_falls_back_on_unexpected_shape() {
        let body = r#"{"error": "something"}"#;
        assert_eq!(error_message(500, body), "HTTP 500");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let transport = Transport::new("http://localhost:8000/api/v1/");
        assert_eq!(transport.base_url(), "http://localhost:8000/api/v1");
    }
}
