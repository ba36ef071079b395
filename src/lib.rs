//! awesome-gen - Awesome List Generator
//!
//! awesome-gen builds "awesome list" READMEs from a code-hosting topic
//! search. This crate provides the configuration layer every run starts
//! from.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the configuration model and credential rules
//! - **Infrastructure Layer** (`infrastructure`): strict YAML loading and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use awesome_gen::ConfigLoader;
//!
//! let config = ConfigLoader::load_from_str("topic: rust\n").unwrap();
//! assert_eq!(config.topic, "rust");
//! assert_eq!(config.output_file, "README.md");
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{AuthConfig, AuthMethod, Config, DEFAULT_OUTPUT_FILE};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::logging::{LogConfig, LogFormat, LoggerImpl};
