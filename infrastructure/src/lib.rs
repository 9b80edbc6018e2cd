//! Infrastructure layer for fanout-predictor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, configuration file loading, and logging setup.

pub mod bootstrap;
pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use bootstrap::build_use_case;
pub use config::{
    ConfigError, ConfigIssue, ConfigLoader, FileAnthropicConfig, FileConfig, FileOpenAiConfig,
    FilePipelineConfig, FileProvidersConfig, Severity,
};
pub use logging::init_tracing;
pub use providers::{anthropic::AnthropicClient, openai::OpenAiClient};
