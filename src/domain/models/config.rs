use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Output file used when the configuration does not name one.
pub const DEFAULT_OUTPUT_FILE: &str = "README.md";

const REDACTED: &str = "[REDACTED]";

/// Top-level configuration for an awesome-list generation run
///
/// Decoding always starts from [`Config::default`] and overlays the keys
/// present in the document. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Hosting-service credentials
    pub auth: AuthConfig,

    /// Output format. Empty means a Markdown table.
    pub format: String,

    /// Main topic of the list, e.g. `go|golang` for a Go list
    pub topic: String,

    /// Sub sections of the list, in the order they are declared
    pub sub_topics: Vec<String>,

    /// Path of the generated README
    pub output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth: AuthConfig::default(),
            format: String::new(),
            topic: String::new(),
            sub_topics: vec![],
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

impl Config {
    /// Copy of this configuration with every non-empty secret masked
    ///
    /// Use this before logging or printing a configuration.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            auth: AuthConfig {
                username: self.auth.username.clone(),
                password: mask(&self.auth.password),
                otp: mask(&self.auth.otp),
                access_token: mask(&self.auth.access_token),
            },
            ..self.clone()
        }
    }

    fn overlay(mut self, plain: PlainConfig) -> Self {
        if let Some(auth) = plain.auth {
            self.auth = auth;
        }
        if let Some(format) = plain.format {
            self.format = format;
        }
        if let Some(topic) = plain.topic {
            self.topic = topic;
        }
        if let Some(sub_topics) = plain.sub_topics {
            self.sub_topics = sub_topics;
        }
        if let Some(output_file) = plain.output_file {
            self.output_file = output_file;
        }
        self
    }
}

/// Field-for-field mirror of [`Config`] without the defaulting `Deserialize`
/// impl. Decoding goes through this type so that `Config::deserialize` never
/// calls itself.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlainConfig {
    #[serde(default, deserialize_with = "null_as_empty")]
    auth: Option<AuthConfig>,
    #[serde(default, deserialize_with = "null_as_empty")]
    format: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    topic: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    sub_topics: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    output_file: Option<String>,
}

/// A key that is present with a null value (`output_file:`) sets the field to
/// its empty value. Only a missing key keeps the default.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Some(Option::<T>::deserialize(deserializer)?.unwrap_or_default()))
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // An empty or `null` document leaves the defaults untouched
        let plain = Option::<PlainConfig>::deserialize(deserializer)?.unwrap_or_default();
        Ok(Self::default().overlay(plain))
    }
}

/// Hosting-service authentication
///
/// When `access_token` is set, consumers ignore `username`, `password` and
/// `otp`. See [`AuthConfig::method`].
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthConfig {
    /// Account name for password authentication
    pub username: String,

    /// Account password for password authentication
    pub password: String,

    /// One-time password for accounts with two-factor auth enabled.
    /// Never read from or written to a configuration file.
    #[serde(skip)]
    pub otp: String,

    /// Personal API token
    pub access_token: String,
}

/// How a consumer should authenticate, derived from an [`AuthConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod<'a> {
    /// Personal access token; all other credentials are ignored
    Token(&'a str),
    /// Username and password, with an optional one-time password
    Basic {
        /// Account name
        username: &'a str,
        /// Account password
        password: &'a str,
        /// One-time password, if one was supplied
        otp: Option<&'a str>,
    },
    /// No credentials configured
    Anonymous,
}

impl AuthConfig {
    /// Resolve which credentials apply. A token always wins.
    pub fn method(&self) -> AuthMethod<'_> {
        if !self.access_token.is_empty() {
            return AuthMethod::Token(&self.access_token);
        }
        if self.username.is_empty() {
            return AuthMethod::Anonymous;
        }
        AuthMethod::Basic {
            username: &self.username,
            password: &self.password,
            otp: (!self.otp.is_empty()).then_some(self.otp.as_str()),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &mask(&self.password))
            .field("otp", &mask(&self.otp))
            .field("access_token", &mask(&self.access_token))
            .finish()
    }
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        REDACTED.to_string()
    }
}
