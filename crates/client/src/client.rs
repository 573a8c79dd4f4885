//! REST client for the luxury asset API.
//!
//! Wraps `GET /api/assets`, `GET /api/assets/{id}` and
//! `POST /api/assets/submit` using [`reqwest`].

use luxury_core::asset::AssetDto;
use luxury_core::submission::AssetSubmitRequest;
use luxury_core::types::DbId;
use serde::de::DeserializeOwned;

/// Default API base URL for local development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Errors from the API client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    ///
    /// `message` is the raw response body, or `Request failed with status N`
    /// when the body is empty.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A form field could not be coerced into the request type.
    #[error("Invalid {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
}

impl ClientError {
    /// Build the error for a non-2xx response body.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            format!("Request failed with status {status}")
        } else {
            body.to_string()
        };
        ClientError::Api { status, message }
    }

    /// Drop an API error's body, keeping `Request failed with status N`.
    pub fn status_only(self) -> Self {
        match self {
            ClientError::Api { status, .. } => Self::from_response_body(status, ""),
            other => other,
        }
    }
}

/// HTTP client for one API deployment.
pub struct AssetsClient {
    client: reqwest::Client,
    base_url: String,
}

impl AssetsClient {
    /// * `base_url` - API root, e.g. `http://localhost:8080`. A trailing
    ///   slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/assets`
    ///
    /// A failed listing reports only its status; the body is dropped.
    pub async fn list_assets(&self) -> Result<Vec<AssetDto>, ClientError> {
        let response = self
            .client
            .get(self.url("/api/assets"))
            .send()
            .await?;

        Self::parse_response(response)
            .await
            .map_err(ClientError::status_only)
    }

    /// `GET /api/assets/{id}`
    pub async fn get_asset(&self, id: DbId) -> Result<AssetDto, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/api/assets/{id}")))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `POST /api/assets/submit`
    pub async fn submit_asset(
        &self,
        request: &AssetSubmitRequest,
    ) -> Result<AssetDto, ClientError> {
        let response = self
            .client
            .post(self.url("/api/assets/submit"))
            .json(request)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Return the response unchanged on success, or a
    /// [`ClientError::Api`] carrying the body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_response_body(status.as_u16(), &body));
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn empty_error_body_reports_status() {
        let err = ClientError::from_response_body(502, "  ");
        assert_eq!(err.to_string(), "Request failed with status 502");
        assert_matches!(err, ClientError::Api { status: 502, .. });
    }

    #[test]
    fn error_body_is_carried_verbatim() {
        let body = r#"{"error":"Asset submission failed: brand is required","code":"SUBMISSION_FAILED"}"#;
        let err = ClientError::from_response_body(400, body);
        assert_eq!(err.to_string(), body);
    }

    #[test]
    fn status_only_drops_the_body() {
        let err = ClientError::from_response_body(500, "database exploded").status_only();
        assert_eq!(err.to_string(), "Request failed with status 500");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = AssetsClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/api/assets"), "http://localhost:8080/api/assets");
    }
}
