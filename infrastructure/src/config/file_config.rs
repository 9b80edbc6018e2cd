//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod pipeline;
mod providers;

pub use pipeline::FilePipelineConfig;
pub use providers::{FileAnthropicConfig, FileOpenAiConfig, FileProvidersConfig};

use super::validation::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Pipeline limits and remote-call policy
    pub pipeline: FilePipelineConfig,
    /// Provider endpoints
    pub providers: FileProvidersConfig,
}

impl FileConfig {
    /// Validate the configuration, collecting every issue found.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.pipeline.validate();
        issues.extend(self.providers.validate());
        issues
    }

    /// Messages of error-severity issues, empty when the config is usable.
    pub fn errors(&self) -> Vec<String> {
        self.validate()
            .into_iter()
            .filter(ConfigIssue::is_error)
            .map(|issue| issue.to_string())
            .collect()
    }
}
