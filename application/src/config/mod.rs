//! Application-level configuration.
//!
//! - [`PipelineParams`]: limits, thresholds and timeouts for a prediction request

pub mod pipeline_params;

pub use pipeline_params::PipelineParams;
