//! API client trait and request method definitions
//!
//! This module defines the core `ApiClient` trait that all transport
//! implementations must satisfy, as well as the closed `HttpMethod` enum
//! used by request descriptors.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use crate::error::ApiError;

/// HTTP method of a request descriptor
///
/// A closed enum rather than free-form strings, so an unsupported method
/// is unrepresentable. Only the verbs the tracker API actually uses are
/// listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HttpMethod {
    /// Read a resource or collection
    #[default]
    Get,
    /// Create a resource
    Post,
    /// Partially update a resource
    Patch,
}

impl HttpMethod {
    /// Uppercase wire representation of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// REST API client trait
///
/// Defines the interface for talking to the tracker API. Implementations
/// can be direct (hitting the network) or mocks feeding canned responses
/// to tests.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across async
/// tasks.
///
/// # Example
///
/// ```rust,ignore
/// use bugboard_client::{ApiClient, HttpMethod};
///
/// async fn list_bugs(client: &dyn ApiClient) -> Result<serde_json::Value, ApiError> {
///     client.request(HttpMethod::Get, "/bugs", None).await
/// }
/// ```
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Perform a request against the configured base endpoint
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method to use
    /// * `path` - Path below the base endpoint (e.g., "/bugs")
    /// * `body` - Optional JSON request body for POST/PATCH
    ///
    /// # Returns
    ///
    /// The decoded JSON response body, or an [`ApiError`] describing the
    /// transport failure, the non-2xx status, or the undecodable body.
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError>;
}
