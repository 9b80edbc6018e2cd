//! Configuration file loading for fanout-predictor
//!
//! Settings merge from these sources (highest priority first):
//!
//! 1. `FANOUT_`-prefixed environment variables (`__` separates sections)
//! 2. A TOML file whose path the host supplies
//! 3. Default values
//!
//! API keys are session state and never come from configuration.

mod error;
mod file_config;
mod loader;
mod validation;

pub use error::ConfigError;
pub use file_config::{
    FileAnthropicConfig, FileConfig, FileOpenAiConfig, FilePipelineConfig, FileProvidersConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
pub use validation::{ConfigIssue, Severity};
