use crate::transport::TransportError;
use courier_protocol::RpcError;
use thiserror::Error;

/// Errors returned by [`RpcClient`](crate::RpcClient)
///
/// `NoTransport`, `Transport` and `InvalidResponse` are fatal: they are also
/// handed to the registry's fatal-error reporter and the caller's callbacks
/// are never invoked. `Rpc` and `Decode` only come out of the typed
/// [`invoke`](crate::RpcClient::invoke) path.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("No registered transport hook")]
    NoTransport,

    #[error("Call failed to {url}::{method}: {source}")]
    Transport {
        url: String,
        method: String,
        source: TransportError,
    },

    #[error("Call failed to {url}::{method}: {reason}")]
    InvalidResponse {
        url: String,
        method: String,
        reason: String,
    },

    #[error("{method} returned an error: {error}")]
    Rpc { method: String, error: RpcError },

    #[error("Failed to decode result of {method}: {source}")]
    Decode {
        method: String,
        source: serde_json::Error,
    },
}

impl ClientError {
    pub(crate) fn invalid_response(
        url: impl Into<String>,
        method: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidResponse {
            url: url.into(),
            method: method.into(),
            reason: reason.into(),
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ClientError::NoTransport
                | ClientError::Transport { .. }
                | ClientError::InvalidResponse { .. }
        )
    }

    /// Protocol-level error object, if the server rejected the call
    pub fn rpc_error(&self) -> Option<&RpcError> {
        match self {
            ClientError::Rpc { error, .. } => Some(error),
            _ => None,
        }
    }
}
