//! In-memory transport and callback recorders for unit tests

use crate::transport::{Transport, TransportError};
use async_trait::async_trait;
use courier_protocol::{Envelope, RequestId};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Arc;

/// Transport that replays queued replies and records what was sent
///
/// With nothing queued it answers `{"id": <envelope id>}`, a void success.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<Option<Value>, TransportError>>>,
    sent: Mutex<Vec<(String, Envelope)>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn reply(&self, body: Value) {
        self.replies.lock().push_back(Ok(Some(body)));
    }

    pub(crate) fn reply_empty(&self) {
        self.replies.lock().push_back(Ok(None));
    }

    pub(crate) fn fail(&self, error: TransportError) {
        self.replies.lock().push_back(Err(error));
    }

    pub(crate) fn sent(&self) -> Vec<(String, Envelope)> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn post(&self, url: &str, envelope: &Envelope) -> Result<Option<Value>, TransportError> {
        self.sent.lock().push((url.to_string(), envelope.clone()));
        let next = self.replies.lock().pop_front();
        next.unwrap_or_else(|| Ok(Some(json!({ "id": envelope.id }))))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Event {
    Success(Option<RequestId>, Option<Value>),
    Failure(Option<RequestId>, Value),
}

/// Collects callback invocations in order
#[derive(Clone, Default)]
pub(crate) struct Events(Arc<Mutex<Vec<Event>>>);

impl Events {
    pub(crate) fn on_success(
        &self,
    ) -> impl FnOnce(Option<RequestId>, Option<Value>) + Send + 'static {
        let events = self.clone();
        move |id: Option<RequestId>, result: Option<Value>| {
            events.0.lock().push(Event::Success(id, result))
        }
    }

    pub(crate) fn on_failure(&self) -> impl FnOnce(Option<RequestId>, Value) + Send + 'static {
        let events = self.clone();
        move |id: Option<RequestId>, error: Value| {
            events.0.lock().push(Event::Failure(id, error))
        }
    }

    pub(crate) fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.0.lock())
    }
}

/// Collects fatal error messages
#[derive(Clone, Default)]
pub(crate) struct Reports(Arc<Mutex<Vec<String>>>);

impl Reports {
    pub(crate) fn reporter(&self) -> impl Fn(&crate::ClientError) + Send + Sync + 'static {
        let reports = self.clone();
        move |error: &crate::ClientError| reports.0.lock().push(error.to_string())
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.0.lock().clone()
    }
}
