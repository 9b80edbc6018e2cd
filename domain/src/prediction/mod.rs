//! Prediction subdomain.
//!
//! - [`entities`]: a single predicted sub-query
//! - [`parsing`]: model response → validated predictions
//! - [`ranking`]: dedupe, order and truncate predictions
//! - [`result`]: the immutable outcome of one analysis request

pub mod entities;
pub mod parsing;
pub mod ranking;
pub mod result;
