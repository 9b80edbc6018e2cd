//! Query subdomain: the validated main query and how it is produced.
//!
//! - [`entities::Query`]: canonical, language-tagged query (Value Object)
//! - [`normalizer::QueryNormalizer`]: raw text → [`entities::Query`]
//! - [`detection`]: language detection for undeclared input

pub mod detection;
pub mod entities;
pub mod normalizer;
