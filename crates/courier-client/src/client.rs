//! JSON-RPC call and notify facade

use crate::bound::{CallFunction, NotifyFunction};
use crate::error::ClientError;
use crate::http::HttpTransport;
use crate::registry::Registry;
use crate::transport::{Transport, TransportError};
use courier_config::ClientConfig;
use courier_protocol::{Envelope, Outcome, RequestId, Response, RpcError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Issues JSON-RPC calls and notifications through the registered transport
///
/// Cloning is cheap; clones share the same [`Registry`], and so the same
/// transport, reporter and id sequence.
#[derive(Debug, Clone, Default)]
pub struct RpcClient {
    registry: Arc<Registry>,
}

impl RpcClient {
    /// Client with an empty registry; register a transport before use
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn with_transport<T>(transport: T) -> Self
    where
        T: Transport + 'static,
    {
        let registry = Registry::new();
        registry.register_transport(transport);
        Self::with_registry(registry)
    }

    /// Client backed by an [`HttpTransport`] built from `config`
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        let registry = Registry::new().with_dispatch_mode(config.dispatch);
        registry.register_transport(HttpTransport::from_config(config)?);
        Ok(Self::with_registry(registry))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn next_id(&self) -> u64 {
        self.registry.next_id()
    }

    /// Send a call with a caller-chosen `id` and route the response
    ///
    /// Exactly one of `on_success` / `on_failure` runs when a response is
    /// received. On a fatal error neither runs; the error is reported and
    /// returned.
    pub async fn call<S, F>(
        &self,
        url: &str,
        method: &str,
        id: u64,
        params: Value,
        on_success: S,
        on_failure: F,
    ) -> Result<(), ClientError>
    where
        S: FnOnce(Option<RequestId>, Option<Value>),
        F: FnOnce(Option<RequestId>, Value),
    {
        let envelope = Envelope::call(method, id, params);
        if let Some(outcome) = self.send(url, envelope).await? {
            outcome.dispatch(on_success, on_failure);
        }
        Ok(())
    }

    /// Send a notification
    ///
    /// Servers normally answer notifications with an empty body, in which
    /// case no callback runs. A JSON body, if one comes back, is routed the
    /// same way as for a call.
    pub async fn notify<S, F>(
        &self,
        url: &str,
        method: &str,
        params: Value,
        on_success: S,
        on_failure: F,
    ) -> Result<(), ClientError>
    where
        S: FnOnce(Option<RequestId>, Option<Value>),
        F: FnOnce(Option<RequestId>, Value),
    {
        let envelope = Envelope::notification(method, params);
        if let Some(outcome) = self.send(url, envelope).await? {
            outcome.dispatch(on_success, on_failure);
        }
        Ok(())
    }

    pub fn create_call_function(
        &self,
        url: impl Into<String>,
        method: impl Into<String>,
    ) -> CallFunction {
        CallFunction::new(self.clone(), url.into(), method.into())
    }

    pub fn create_notify_function(
        &self,
        url: impl Into<String>,
        method: impl Into<String>,
    ) -> NotifyFunction {
        NotifyFunction::new(self.clone(), url.into(), method.into())
    }

    /// Send a call with a generated id and return the classified outcome
    pub async fn request(
        &self,
        url: &str,
        method: &str,
        params: Value,
    ) -> Result<Outcome, ClientError> {
        let envelope = Envelope::call(method, self.next_id(), params);
        let outcome = self.send(url, envelope).await?;
        // send() already rejects an empty body for a call; kept as a fallback
        outcome.ok_or_else(|| {
            self.fatal(ClientError::invalid_response(
                url,
                method,
                "empty response body",
            ))
        })
    }

    /// Call `method` and decode its result as `T`
    ///
    /// A void success decodes from `null`, so `T` may be `()` or an
    /// `Option`. An `error` member becomes [`ClientError::Rpc`].
    pub async fn invoke<T>(&self, url: &str, method: &str, params: Value) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        match self.request(url, method, params).await? {
            Outcome::Failure { id, error } => {
                let error = RpcError::from_value(&error);
                warn!(url, method, id = ?id, code = error.code, "remote procedure returned an error");
                Err(ClientError::Rpc {
                    method: method.to_string(),
                    error,
                })
            }
            Outcome::Success { result, .. } => serde_json::from_value(result.unwrap_or(Value::Null))
                .map_err(|source| ClientError::Decode {
                    method: method.to_string(),
                    source,
                }),
        }
    }

    async fn send(&self, url: &str, envelope: Envelope) -> Result<Option<Outcome>, ClientError> {
        let Some(transport) = self.registry.transport() else {
            return Err(self.fatal(ClientError::NoTransport));
        };

        if let Some(listener) = self.registry.listener() {
            listener.on_request(url, &envelope);
        }

        debug!(url, method = %envelope.method, id = ?envelope.id, "posting JSON-RPC envelope");

        let posted = transport.post(url, &envelope).await;
        let body = match posted {
            Ok(body) => body,
            Err(source) => {
                return Err(self.fatal(ClientError::Transport {
                    url: url.to_string(),
                    method: envelope.method,
                    source,
                }))
            }
        };

        let Some(body) = body else {
            if envelope.is_call() {
                return Err(self.fatal(ClientError::invalid_response(
                    url,
                    envelope.method,
                    "empty response body",
                )));
            }
            return Ok(None);
        };

        if let Some(listener) = self.registry.listener() {
            listener.on_response(url, &body);
        }

        let response = Response::from_value(body).map_err(|e| {
            self.fatal(ClientError::invalid_response(
                url,
                envelope.method.as_str(),
                format!("not a JSON-RPC response object: {}", e),
            ))
        })?;

        Ok(Some(Outcome::classify(
            response,
            self.registry.dispatch_mode(),
        )))
    }

    fn fatal(&self, error: ClientError) -> ClientError {
        self.registry.reporter().report(&error);
        error
    }
}
