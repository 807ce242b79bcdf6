//! Reqwest-backed API client
//!
//! This adapter owns transport details only: URL joining, JSON request
//! serialization, HTTP error mapping, and JSON decoding of the response
//! body. No timeout is configured on the client; a request resolves or
//! rejects according to the transport's own behavior.

use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use crate::client::{ApiClient, HttpMethod};
use crate::error::ApiError;

/// API client that performs real HTTP requests against one base endpoint
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    http: reqwest::Client,
    base_url: String,
}

impl ReqwestClient {
    /// Create a client for the given base endpoint
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying reqwest client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// The configured base endpoint
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Join a base endpoint and a path with exactly one slash between them
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

#[async_trait]
impl ApiClient for ReqwestClient {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = join_url(&self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self.http.request(method.into(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = if text.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string()
            } else {
                text.trim().to_string()
            };
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_plain() {
        assert_eq!(
            join_url("http://localhost:9001/api", "/bugs"),
            "http://localhost:9001/api/bugs"
        );
    }

    #[test]
    fn test_join_url_trailing_slash() {
        assert_eq!(
            join_url("http://localhost:9001/api/", "/bugs/1"),
            "http://localhost:9001/api/bugs/1"
        );
    }

    #[test]
    fn test_join_url_bare_path() {
        assert_eq!(
            join_url("http://localhost:9001/api", "bugs"),
            "http://localhost:9001/api/bugs"
        );
    }

    #[test]
    fn test_method_conversion() {
        assert_eq!(reqwest::Method::from(HttpMethod::Get), reqwest::Method::GET);
        assert_eq!(
            reqwest::Method::from(HttpMethod::Post),
            reqwest::Method::POST
        );
        assert_eq!(
            reqwest::Method::from(HttpMethod::Patch),
            reqwest::Method::PATCH
        );
    }

    #[test]
    fn test_client_construction() {
        let client = ReqwestClient::new("http://localhost:9001/api").unwrap();
        assert_eq!(client.base_url(), "http://localhost:9001/api");
    }
}
