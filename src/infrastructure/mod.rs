//! Infrastructure layer module
//!
//! This module contains the adapters between the domain model and the
//! outside world:
//! - Configuration loading (YAML via serde_yaml)
//! - Logging infrastructure

pub mod config;
pub mod logging;
