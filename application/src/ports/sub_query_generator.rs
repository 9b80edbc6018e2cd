//! Sub-query generator port
//!
//! A generator turns a normalized query into unranked predictions. The
//! template engine and the remote model engine both implement it.

use super::completion_client::CompletionError;
use async_trait::async_trait;
use fanout_domain::{
    ApiKey, FallbackReason, ProviderKind, Query, QueryAnalysis, SchemaError, SubQueryPrediction,
};
use thiserror::Error;

/// Errors that can occur while generating predictions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RemoteError {
    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("No API key configured")]
    MissingApiKey,
}

impl RemoteError {
    /// Reason recorded on the template result that replaces this failure
    pub fn fallback_reason(&self) -> FallbackReason {
        match self {
            RemoteError::Completion(err) => match err {
                CompletionError::Auth(_) => FallbackReason::Auth,
                CompletionError::RateLimited { .. } => FallbackReason::RateLimited,
                CompletionError::Network(_) => FallbackReason::Network,
                CompletionError::Timeout => FallbackReason::Timeout,
                CompletionError::Http { .. } => FallbackReason::Upstream,
                CompletionError::InvalidResponse(_) => FallbackReason::Schema,
            },
            RemoteError::Schema(_) => FallbackReason::Schema,
            RemoteError::MissingApiKey => FallbackReason::Auth,
        }
    }
}

/// Generator of sub-query predictions
#[async_trait]
pub trait SubQueryGenerator: Send + Sync {
    /// The provider this generator serves
    fn kind(&self) -> ProviderKind;

    /// Model identifier, if the generator uses one
    fn model(&self) -> Option<&str> {
        None
    }

    /// Produce unranked predictions for the query
    async fn generate(
        &self,
        query: &Query,
        analysis: &QueryAnalysis,
        api_key: Option<&ApiKey>,
    ) -> Result<Vec<SubQueryPrediction>, RemoteError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_fallback_reason_mapping() {
        let cases = [
            (
                RemoteError::Completion(CompletionError::Auth("401".into())),
                FallbackReason::Auth,
            ),
            (
                RemoteError::Completion(CompletionError::RateLimited {
                    retry_after: Some(Duration::from_secs(2)),
                }),
                FallbackReason::RateLimited,
            ),
            (
                RemoteError::Completion(CompletionError::Timeout),
                FallbackReason::Timeout,
            ),
            (
                RemoteError::Completion(CompletionError::Http {
                    status: 500,
                    body: String::new(),
                }),
                FallbackReason::Upstream,
            ),
            (
                RemoteError::Schema(SchemaError::NoJson),
                FallbackReason::Schema,
            ),
            (RemoteError::MissingApiKey, FallbackReason::Auth),
        ];

        for (err, expected) in cases {
            assert_eq!(err.fallback_reason(), expected, "{err}");
        }
    }
}
