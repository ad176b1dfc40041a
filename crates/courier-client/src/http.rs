//! reqwest-backed transport

use crate::transport::{Transport, TransportError};
use async_trait::async_trait;
use courier_config::ClientConfig;
use courier_protocol::Envelope;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use tracing::trace;

const APPLICATION_JSON: &str = "application/json";

/// POSTs envelopes as `application/json` and decodes JSON replies
///
/// A blank body is returned as `None`. Non-2xx statuses and bodies that are
/// not JSON are errors.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    headers: HeaderMap,
}

impl HttpTransport {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
        }
    }

    /// Build a transport with the timeouts, user agent and extra headers
    /// from `config`
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(config.http.user_agent.as_str())
            .connect_timeout(config.timeouts.connect_timeout())
            .timeout(config.timeouts.request_timeout())
            .build()?;

        config
            .http
            .headers
            .iter()
            .try_fold(Self::new(client), |transport, (name, value)| {
                transport.with_header(name, value)
            })
    }

    /// Add a header sent with every request
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, TransportError> {
        let invalid = |reason: String| TransportError::InvalidHeader {
            name: name.to_string(),
            reason,
        };
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
        let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;

        self.headers.insert(header_name, header_value);
        Ok(self)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &str, envelope: &Envelope) -> Result<Option<Value>, TransportError> {
        let body = serde_json::to_vec(envelope).map_err(TransportError::Serialize)?;

        let response = self
            .client
            .post(url)
            .headers(self.headers.clone())
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        trace!(url, status = status.as_u16(), bytes = text.len(), "received response body");

        if text.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&text)
            .map(Some)
            .map_err(TransportError::InvalidJson)
    }
}
