//! Core domain concepts shared across all subdomains.
//!
//! - [`language::Language`]: supported query languages
//! - [`probability::Probability`]: a score constrained to `[0.0, 1.0]`
//! - [`error`]: validation and schema errors

pub mod error;
pub mod language;
pub mod probability;
