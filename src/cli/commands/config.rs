//! Implementation of the `awesome-gen check` and `awesome-gen show` commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::cli::types::{ConfigArgs, ShowArgs};
use crate::domain::models::{AuthMethod, Config};
use crate::infrastructure::config::ConfigLoader;

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub success: bool,
    pub path: PathBuf,
    pub topic: String,
    pub sub_topics: usize,
    pub output_file: String,
    pub auth: &'static str,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let topic = if self.topic.is_empty() { "<none>" } else { self.topic.as_str() };
        [
            format!("{} is valid", self.path.display()),
            format!("  topic:       {topic}"),
            format!("  sub topics:  {}", self.sub_topics),
            format!("  output file: {}", self.output_file),
            format!("  auth:        {}", self.auth),
        ]
        .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct ShowOutput {
    pub path: PathBuf,
    pub config: Config,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        ConfigLoader::render(&self.config).trim_end().to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Label for the credentials a generation run would use
pub const fn auth_label(method: &AuthMethod<'_>) -> &'static str {
    match method {
        AuthMethod::Token(_) => "access token",
        AuthMethod::Basic { otp: Some(_), .. } => "username/password with one-time password",
        AuthMethod::Basic { otp: None, .. } => "username/password",
        AuthMethod::Anonymous => "anonymous",
    }
}

/// Load the configuration named by `args`
pub fn load(args: &ConfigArgs) -> Result<Config> {
    ConfigLoader::load_from_file(&args.config)
        .with_context(|| format!("Invalid configuration {}", args.config.display()))
}

pub fn check(args: ConfigArgs, json_mode: bool) -> Result<()> {
    let config = load(&args)?;
    tracing::info!(path = %args.config.display(), "configuration is valid");

    let output_data = CheckOutput {
        success: true,
        topic: config.topic.clone(),
        sub_topics: config.sub_topics.len(),
        output_file: config.output_file.clone(),
        auth: auth_label(&config.auth.method()),
        path: args.config,
    };
    output(&output_data, json_mode);
    Ok(())
}

pub fn show(args: ShowArgs, json_mode: bool) -> Result<()> {
    let mut config = load(&args.source)?;
    if let Some(otp) = args.otp {
        config.auth.otp = otp;
    }
    tracing::debug!(auth = auth_label(&config.auth.method()), "resolved credentials");

    let output_data = ShowOutput {
        path: args.source.config,
        config: config.redacted(),
    };
    output(&output_data, json_mode);
    Ok(())
}
