//! Client configuration components
//!
//! Every section falls back to its defaults, so a config file only needs to
//! mention the values it changes.

use courier_protocol::DispatchMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Default `User-Agent` sent by the HTTP transport.
pub const DEFAULT_USER_AGENT: &str = concat!("courier/", env!("CARGO_PKG_VERSION"));

/// Top-level client configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// How `error` and `result` members of a response are tested.
    pub dispatch: DispatchMode,

    /// HTTP request settings.
    pub http: HttpConfig,

    /// Transport timeouts.
    pub timeouts: TimeoutConfig,
}

/// HTTP request settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Value of the `User-Agent` header.
    pub user_agent: String,

    /// Extra headers sent with every request.
    ///
    /// Values may reference environment variables as `{env:NAME}`; the
    /// reference is replaced when the configuration is loaded.
    pub headers: BTreeMap<String, String>,
}

/// Transport timeouts, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Time allowed to establish a connection.
    pub connect_timeout_seconds: u64,

    /// Time allowed for the whole request, including reading the body.
    pub request_timeout_seconds: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: BTreeMap::new(),
        }
    }
}

impl HttpConfig {
    /// Add a header, replacing any previous value for the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: 60,
            request_timeout_seconds: 120,
        }
    }
}

impl TimeoutConfig {
    /// Connection timeout as a [`Duration`].
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}
