//! HTTP completion clients for hosted model providers
//!
//! Each client implements the [`CompletionClient`](fanout_application::CompletionClient)
//! port. Request building and response extraction are plain functions so the
//! wire mapping can be tested without a network.

pub mod anthropic;
mod http;
pub mod openai;
