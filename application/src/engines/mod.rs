//! Prediction engines implementing [`SubQueryGenerator`](crate::ports::sub_query_generator::SubQueryGenerator)
//!
//! - [`template::TemplateGenerator`]: rule-based, infallible
//! - [`remote::RemoteModelEngine`]: hosted model behind a [`CompletionClient`](crate::ports::completion_client::CompletionClient)

pub mod remote;
pub mod template;
