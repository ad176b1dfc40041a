//! Per-client hook slots and call id state

use crate::hooks::{FatalErrorReporter, LogReporter, RequestListener};
use crate::transport::Transport;
use courier_protocol::{DispatchMode, IdGenerator};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Configuration registry owned by one [`RpcClient`](crate::RpcClient)
///
/// Holds the transport and fatal-error reporter slots, an optional request
/// listener, the client's id generator and its dispatch mode. Registering a
/// hook replaces the previous one; hooks are never chained.
///
/// A fresh registry has no transport, so every call fails with
/// [`ClientError::NoTransport`](crate::ClientError::NoTransport) until one
/// is registered.
pub struct Registry {
    transport: RwLock<Option<Arc<dyn Transport>>>,
    reporter: RwLock<Arc<dyn FatalErrorReporter>>,
    listener: RwLock<Option<Arc<dyn RequestListener>>>,
    ids: IdGenerator,
    dispatch_mode: DispatchMode,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            transport: RwLock::new(None),
            reporter: RwLock::new(Arc::new(LogReporter)),
            listener: RwLock::new(None),
            ids: IdGenerator::new(),
            dispatch_mode: DispatchMode::default(),
        }
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dispatch_mode(mut self, mode: DispatchMode) -> Self {
        self.dispatch_mode = mode;
        self
    }

    pub fn register_transport<T>(&self, transport: T)
    where
        T: Transport + 'static,
    {
        let previous = self.transport.write().replace(Arc::new(transport));
        debug!(replaced = previous.is_some(), "registered transport hook");
    }

    pub fn has_transport(&self) -> bool {
        self.transport.read().is_some()
    }

    pub fn transport(&self) -> Option<Arc<dyn Transport>> {
        self.transport.read().clone()
    }

    pub fn set_fatal_error_reporter<R>(&self, reporter: R)
    where
        R: FatalErrorReporter + 'static,
    {
        let reporter: Arc<dyn FatalErrorReporter> = Arc::new(reporter);
        *self.reporter.write() = reporter;
    }

    pub fn reporter(&self) -> Arc<dyn FatalErrorReporter> {
        self.reporter.read().clone()
    }

    pub fn set_request_listener<L>(&self, listener: L)
    where
        L: RequestListener + 'static,
    {
        let listener: Arc<dyn RequestListener> = Arc::new(listener);
        *self.listener.write() = Some(listener);
    }

    pub fn listener(&self) -> Option<Arc<dyn RequestListener>> {
        self.listener.read().clone()
    }

    pub fn next_id(&self) -> u64 {
        self.ids.next_id()
    }

    pub fn last_id(&self) -> u64 {
        self.ids.last_id()
    }

    pub fn dispatch_mode(&self) -> DispatchMode {
        self.dispatch_mode
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("has_transport", &self.has_transport())
            .field("has_listener", &self.listener.read().is_some())
            .field("last_id", &self.ids.last_id())
            .field("dispatch_mode", &self.dispatch_mode)
            .finish()
    }
}
