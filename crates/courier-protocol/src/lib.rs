//! JSON-RPC 2.0 wire types for the courier client
//!
//! - [`Envelope`] builds calls (with an id) and notifications (without)
//! - [`IdGenerator`] hands out strictly increasing call ids
//! - [`Response`] and [`Outcome`] decode and route what the server sends back

mod dispatch;
mod id;
mod protocol;

pub use dispatch::{dispatch, is_truthy, DispatchMode, Outcome};
pub use id::IdGenerator;
pub use protocol::{
    Envelope, RequestId, Response, RpcError, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST,
    JSONRPC_VERSION, METHOD_NOT_FOUND, PARSE_ERROR,
};
