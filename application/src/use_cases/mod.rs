//! Application use cases

pub mod predict_sub_queries;
