//! Completion client port
//!
//! Defines the interface for sending one prompt to a hosted language model
//! and receiving its raw text reply.

use async_trait::async_trait;
use fanout_domain::{ApiKey, ProviderKind};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during a completion call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompletionError {
    /// The provider rejected the credentials (401/403)
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The provider asked us to slow down (429)
    #[error("Rate limited")]
    RateLimited { retry_after: Option<Duration> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout")]
    Timeout,

    /// Any other non-success status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The provider envelope did not contain reply text
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A single prompt exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}

/// Client for a hosted language model
///
/// The API key is passed on every call and never stored by the client.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// The provider this client talks to
    fn provider(&self) -> ProviderKind;

    /// Model identifier sent with each request
    fn model(&self) -> &str;

    /// Send the request and return the reply text
    async fn complete(
        &self,
        request: &CompletionRequest,
        api_key: &ApiKey,
    ) -> Result<String, CompletionError>;
}
