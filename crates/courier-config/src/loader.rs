//! Loading and validating [`ClientConfig`] from TOML.

use crate::ClientConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Pattern for env references: {env:VAR}
const ENV_REF_PREFIX: &str = "{env:";
const ENV_REF_SUFFIX: &str = "}";

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("IO error reading {path}: {source}")]
    Io {
        /// Path to the file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for [`ClientConfig`].
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A header value references an unset environment variable.
    #[error("Environment variable not found: {var_name} (referenced as {{env:{var_name}}})")]
    EnvVarNotFound {
        /// Name of the environment variable
        var_name: String,
    },

    /// The configuration parsed but holds unusable values.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ClientConfig {
    /// Parse configuration from a TOML string.
    ///
    /// Environment references in header values are resolved and the result
    /// is validated before it is returned.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: ClientConfig = toml::from_str(content)?;
        config.resolve_env_refs()?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub async fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), "loading client configuration");
        Self::from_toml_str(&content)
    }

    /// Check that timeouts are non-zero and header names are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeouts.connect_timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "timeouts.connect_timeout_seconds must be greater than zero".to_string(),
            ));
        }
        if self.timeouts.request_timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "timeouts.request_timeout_seconds must be greater than zero".to_string(),
            ));
        }
        if let Some(name) = self
            .http
            .headers
            .keys()
            .find(|name| name.trim().is_empty() || name.chars().any(char::is_whitespace))
        {
            return Err(ConfigError::Invalid(format!(
                "invalid header name {:?} in http.headers",
                name
            )));
        }
        Ok(())
    }

    /// Replace `{env:NAME}` header values with the variable's contents.
    pub fn resolve_env_refs(&mut self) -> Result<(), ConfigError> {
        for value in self.http.headers.values_mut() {
            if let Some(var_name) = extract_env_var(value) {
                let resolved =
                    std::env::var(var_name).map_err(|_| ConfigError::EnvVarNotFound {
                        var_name: var_name.to_string(),
                    })?;
                *value = resolved;
            }
        }
        Ok(())
    }
}

fn extract_env_var(s: &str) -> Option<&str> {
    s.strip_prefix(ENV_REF_PREFIX)?.strip_suffix(ENV_REF_SUFFIX)
}
