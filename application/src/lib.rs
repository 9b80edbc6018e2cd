//! Application layer for fanout-predictor
//!
//! This crate contains use cases, prediction engines, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod engines;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PipelineParams;
pub use engines::{
    remote::{RemoteModelEngine, RemoteParams},
    template::TemplateGenerator,
};
pub use ports::{
    completion_client::{CompletionClient, CompletionError, CompletionRequest},
    sub_query_generator::{RemoteError, SubQueryGenerator},
};
pub use use_cases::predict_sub_queries::PredictSubQueriesUseCase;
