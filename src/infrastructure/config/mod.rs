//! Configuration management infrastructure
//!
//! Strict YAML loading for [`Config`](crate::domain::models::Config):
//! - Defaults first, then the document overlaid on top
//! - Unknown keys rejected
//! - Best-effort rendering for diagnostics

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
