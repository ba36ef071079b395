pub mod config;

pub use config::{AuthConfig, AuthMethod, Config, DEFAULT_OUTPUT_FILE};
