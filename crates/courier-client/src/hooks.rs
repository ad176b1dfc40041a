//! Replaceable hooks installed in the [`Registry`](crate::Registry)

use crate::error::ClientError;
use courier_protocol::Envelope;
use serde_json::Value;
use tracing::error;

/// Receives every fatal client error
///
/// Reporting does not stop the error from being returned to the caller; the
/// reporter only decides how it is surfaced (log, metrics, dialog...).
pub trait FatalErrorReporter: Send + Sync {
    fn report(&self, error: &ClientError);
}

impl<F> FatalErrorReporter for F
where
    F: Fn(&ClientError) + Send + Sync,
{
    fn report(&self, error: &ClientError) {
        self(error)
    }
}

/// Default reporter: logs the error through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl FatalErrorReporter for LogReporter {
    fn report(&self, err: &ClientError) {
        error!(error = %err, "JSON-RPC client failure");
    }
}

/// Observes envelopes before they are sent and responses before dispatch
pub trait RequestListener: Send + Sync {
    fn on_request(&self, _url: &str, _envelope: &Envelope) {}

    fn on_response(&self, _url: &str, _response: &Value) {}
}
