use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Failed to parse configuration file {}: {source}", path.display())]
    ParseFile {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Failed to read configuration file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ConfigError {
    /// The configuration source could not be read
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// The configuration source was read but its content is invalid
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::ParseFile { .. })
    }
}

/// Strict YAML configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse a YAML document into a [`Config`]
    ///
    /// Fields absent from the document keep their default value. Any key the
    /// schema does not know fails the whole load, so a misspelled option is
    /// never silently ignored.
    pub fn load_from_str(raw: &str) -> Result<Config, ConfigError> {
        let config: Config = serde_yaml::from_str(raw)?;
        Ok(config)
    }

    /// Read the whole file at `path` and parse it with [`Self::load_from_str`]
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::load_from_str(&raw).map_err(|err| match err {
            ConfigError::Parse(source) => ConfigError::ParseFile {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        debug!(
            path = %path.display(),
            topic = %config.topic,
            sub_topics = config.sub_topics.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Render a configuration as YAML for display
    ///
    /// Never fails: a serialization error is reported inside the returned
    /// string. The one-time password is not part of the output.
    pub fn render(config: &Config) -> String {
        match serde_yaml::to_string(config) {
            Ok(rendered) => rendered,
            Err(err) => {
                warn!(error = %err, "failed to render configuration");
                format!("<error creating config string: {err}>")
            }
        }
    }
}
