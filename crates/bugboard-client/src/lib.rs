//! REST transport for the bugboard state container
//!
//! This crate provides a trait-based REST client kept free of any store or
//! domain knowledge, so the store's middleware can be exercised against a
//! mock transport in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                ApiClient trait                   │
//! │  - request(method, path, body)                   │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ ReqwestClient   │         │ test mocks          │
//! │ (direct HTTP)   │         │ (canned responses)  │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use bugboard_client::{ApiClient, HttpMethod, ReqwestClient, DEFAULT_BASE_URL};
//!
//! # async fn example() -> Result<(), bugboard_client::ApiError> {
//! let client = ReqwestClient::new(DEFAULT_BASE_URL).expect("client construction");
//! let bugs = client.request(HttpMethod::Get, "/bugs", None).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod reqwest_client;

/// Default base endpoint for the tracker API
pub const DEFAULT_BASE_URL: &str = "http://localhost:9001/api";

pub use client::{ApiClient, HttpMethod};
pub use error::ApiError;
pub use reqwest_client::ReqwestClient;
