//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON event formatting
//! - `RUST_LOG` overrides on top of the configured level
//! - Output on stderr, keeping stdout for command results

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat};
pub use logger::LoggerImpl;
