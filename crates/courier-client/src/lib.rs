//! Client for calling remote procedures over JSON-RPC 2.0
//!
//! An [`RpcClient`] builds request envelopes, hands them to a [`Transport`]
//! and routes each response to a success or failure callback:
//!
//! - `error` present -> failure callback with `(id, error)`
//! - `result` present -> success callback with `(id, Some(result))`
//! - neither -> success callback with `(id, None)`
//!
//! Configuration and transport problems never reach the callbacks. They go to
//! the registry's [`FatalErrorReporter`] and are returned as a [`ClientError`].
//!
//! ```rust,no_run
//! use courier_client::{ClientConfig, RpcClient};
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RpcClient::from_config(&ClientConfig::default())?;
//! let add = client.create_call_function("http://localhost:8080/api", "add");
//!
//! add.invoke(
//!     json!([1, 2]),
//!     |id, result| println!("{:?} -> {:?}", id, result),
//!     |id, error| eprintln!("{:?} failed: {}", id, error),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

mod bound;
mod client;
mod error;
mod hooks;
mod http;
mod registry;
mod transport;

#[cfg(test)]
mod testing;

pub use bound::{CallFunction, NotifyFunction};
pub use client::RpcClient;
pub use error::ClientError;
pub use hooks::{FatalErrorReporter, LogReporter, RequestListener};
pub use http::HttpTransport;
pub use registry::Registry;
pub use transport::{Transport, TransportError};

pub use courier_config::ClientConfig;
pub use courier_protocol::{
    DispatchMode, Envelope, IdGenerator, Outcome, RequestId, Response, RpcError,
};
