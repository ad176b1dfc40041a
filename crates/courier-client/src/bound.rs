//! Reusable call and notify functions bound to a fixed URL and method

use crate::client::RpcClient;
use crate::error::ClientError;
use courier_protocol::{Outcome, RequestId};
use serde_json::Value;
use tokio::task::JoinHandle;

/// Calls one remote method, generating a fresh id for every invocation
///
/// Created by [`RpcClient::create_call_function`]. Ids come from the
/// client's registry, so every function created from the same client shares
/// one increasing sequence.
#[derive(Debug, Clone)]
pub struct CallFunction {
    client: RpcClient,
    url: String,
    method: String,
}

impl CallFunction {
    pub(crate) fn new(client: RpcClient, url: String, method: String) -> Self {
        Self {
            client,
            url,
            method,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub async fn invoke<S, F>(
        &self,
        params: Value,
        on_success: S,
        on_failure: F,
    ) -> Result<(), ClientError>
    where
        S: FnOnce(Option<RequestId>, Option<Value>),
        F: FnOnce(Option<RequestId>, Value),
    {
        let id = self.client.next_id();
        self.client
            .call(&self.url, &self.method, id, params, on_success, on_failure)
            .await
    }

    /// Run [`invoke`](Self::invoke) on the tokio runtime and return at once
    pub fn spawn<S, F>(
        &self,
        params: Value,
        on_success: S,
        on_failure: F,
    ) -> JoinHandle<Result<(), ClientError>>
    where
        S: FnOnce(Option<RequestId>, Option<Value>) + Send + 'static,
        F: FnOnce(Option<RequestId>, Value) + Send + 'static,
    {
        let function = self.clone();
        tokio::spawn(async move { function.invoke(params, on_success, on_failure).await })
    }

    pub async fn request(&self, params: Value) -> Result<Outcome, ClientError> {
        self.client.request(&self.url, &self.method, params).await
    }
}

/// Sends notifications to one remote method
///
/// Created by [`RpcClient::create_notify_function`].
#[derive(Debug, Clone)]
pub struct NotifyFunction {
    client: RpcClient,
    url: String,
    method: String,
}

impl NotifyFunction {
    pub(crate) fn new(client: RpcClient, url: String, method: String) -> Self {
        Self {
            client,
            url,
            method,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub async fn invoke<S, F>(
        &self,
        params: Value,
        on_success: S,
        on_failure: F,
    ) -> Result<(), ClientError>
    where
        S: FnOnce(Option<RequestId>, Option<Value>),
        F: FnOnce(Option<RequestId>, Value),
    {
        self.client
            .notify(&self.url, &self.method, params, on_success, on_failure)
            .await
    }

    pub fn spawn<S, F>(
        &self,
        params: Value,
        on_success: S,
        on_failure: F,
    ) -> JoinHandle<Result<(), ClientError>>
    where
        S: FnOnce(Option<RequestId>, Option<Value>) + Send + 'static,
        F: FnOnce(Option<RequestId>, Value) + Send + 'static,
    {
        let function = self.clone();
        tokio::spawn(async move { function.invoke(params, on_success, on_failure).await })
    }
}
