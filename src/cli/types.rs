//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::infrastructure::logging::LogFormat;

/// Configuration file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

#[derive(Parser, Debug)]
#[command(name = "awesome-gen")]
#[command(about = "Generate awesome-list READMEs from topic searches", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a configuration file
    Check(ConfigArgs),

    /// Print the effective configuration, secrets redacted
    Show(ShowArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "AWESOME_GEN_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: ConfigArgs,

    /// One-time password for two-factor accounts; never read from the file
    #[arg(long, env = "AWESOME_GEN_OTP", hide_env_values = true)]
    pub otp: Option<String>,
}
