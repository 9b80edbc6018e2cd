//! Port definitions (interfaces for infrastructure adapters)

pub mod completion_client;
pub mod sub_query_generator;
