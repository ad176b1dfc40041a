//! Transport seam between the client and the network

use async_trait::async_trait;
use courier_protocol::Envelope;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while exchanging an envelope with a server
#[derive(Error, Debug)]
pub enum TransportError {
    /// Envelope could not be encoded as JSON
    #[error("Failed to serialize request: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Connection, timeout or protocol failure below JSON-RPC
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server responded with HTTP status {0}")]
    Status(u16),

    /// Response body was not JSON text
    #[error("Response body is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// A configured header name or value is unusable
    #[error("Invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// Failure reported by a custom transport
    #[error("{0}")]
    Other(String),
}

/// Performs the network exchange for one envelope
///
/// Implementations POST the envelope to `url` and return the decoded JSON
/// body, or `None` when the server answered with an empty body. Any failure
/// to get a JSON body back is an error; the client reports it as fatal.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, url: &str, envelope: &Envelope) -> Result<Option<Value>, TransportError>;
}

#[async_trait]
impl<T> Transport for Arc<T>
where
    T: Transport + ?Sized,
{
    async fn post(&self, url: &str, envelope: &Envelope) -> Result<Option<Value>, TransportError> {
        (**self).post(url, envelope).await
    }
}
