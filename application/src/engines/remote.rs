//! Remote model engine
//!
//! Builds the prediction prompt, calls the provider through a
//! [`CompletionClient`], and validates the reply against the prediction
//! schema. Each call is bounded by a timeout; a rate-limit response is
//! retried once.

use crate::ports::completion_client::{CompletionClient, CompletionError, CompletionRequest};
use crate::ports::sub_query_generator::{RemoteError, SubQueryGenerator};
use async_trait::async_trait;
use fanout_domain::{
    ApiKey, PredictionPromptTemplate, ProviderKind, Query, QueryAnalysis, SubQueryPrediction,
    parse_prediction_response,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Upper bound on a provider-supplied `Retry-After` wait
const MAX_RETRY_WAIT: Duration = Duration::from_secs(5);

/// Call policy for a [`RemoteModelEngine`]
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteParams {
    /// Predictions asked for in the prompt
    pub requested_predictions: usize,
    /// Replies with more predictions than this fail validation
    pub max_predictions: usize,
    pub timeout: Duration,
    pub retry_on_rate_limit: bool,
    pub retry_backoff: Duration,
}

impl Default for RemoteParams {
    fn default() -> Self {
        Self {
            requested_predictions: 8,
            max_predictions: 20,
            timeout: Duration::from_secs(20),
            retry_on_rate_limit: true,
            retry_backoff: Duration::from_secs(1),
        }
    }
}

/// Generator backed by a hosted language model.
pub struct RemoteModelEngine {
    client: Arc<dyn CompletionClient>,
    params: RemoteParams,
}

impl RemoteModelEngine {
    pub fn new(client: Arc<dyn CompletionClient>, params: RemoteParams) -> Self {
        Self { client, params }
    }

    pub fn params(&self) -> &RemoteParams {
        &self.params
    }

    async fn call_once(
        &self,
        request: &CompletionRequest,
        api_key: &ApiKey,
    ) -> Result<String, CompletionError> {
        match tokio::time::timeout(self.params.timeout, self.client.complete(request, api_key)).await
        {
            Ok(result) => result,
            Err(_) => Err(CompletionError::Timeout),
        }
    }

    async fn call(
        &self,
        request: &CompletionRequest,
        api_key: &ApiKey,
    ) -> Result<String, CompletionError> {
        match self.call_once(request, api_key).await {
            Err(CompletionError::RateLimited { retry_after }) if self.params.retry_on_rate_limit => {
                let wait = retry_after
                    .unwrap_or(self.params.retry_backoff)
                    .min(MAX_RETRY_WAIT);
                warn!(
                    "{} rate limited, retrying once after {}ms",
                    self.client.provider(),
                    wait.as_millis()
                );
                tokio::time::sleep(wait).await;
                self.call_once(request, api_key).await
            }
            other => other,
        }
    }
}

#[async_trait]
impl SubQueryGenerator for RemoteModelEngine {
    fn kind(&self) -> ProviderKind {
        self.client.provider()
    }

    fn model(&self) -> Option<&str> {
        Some(self.client.model())
    }

    async fn generate(
        &self,
        query: &Query,
        analysis: &QueryAnalysis,
        api_key: Option<&ApiKey>,
    ) -> Result<Vec<SubQueryPrediction>, RemoteError> {
        let api_key = api_key.ok_or(RemoteError::MissingApiKey)?;

        let request = CompletionRequest::new(
            PredictionPromptTemplate::system(),
            PredictionPromptTemplate::user(query, analysis, self.params.requested_predictions),
        );

        debug!(
            "Requesting {} predictions from {} ({})",
            self.params.requested_predictions,
            self.client.provider(),
            self.client.model()
        );

        let reply = self.call(&request, api_key).await?;
        let predictions = parse_prediction_response(&reply, self.params.max_predictions)?;

        debug!(
            "{} returned {} valid predictions",
            self.client.provider(),
            predictions.len()
        );
        Ok(predictions)
    }
}
