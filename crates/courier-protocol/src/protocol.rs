use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

/// Response correlation id
///
/// Calls always go out with a positive integer id, but a server may echo
/// anything back. Ids that are neither an unsigned integer nor a string are
/// kept as raw JSON so the rest of the response still decodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Number(u64),
    String(String),
    Other(Value),
}

impl From<u64> for RequestId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

/// Request or notification as it goes out on the wire
///
/// An envelope carrying an `id` is a call and expects a correlated response.
/// Without one it is a notification and the server is not supposed to answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub jsonrpc: &'static str,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub params: Value,
}

impl Envelope {
    pub fn call(method: impl Into<String>, id: u64, params: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method: method.into(),
            id: Some(id),
            params,
        }
    }

    pub fn notification(method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method: method.into(),
            id: None,
            params,
        }
    }

    pub fn is_call(&self) -> bool {
        self.id.is_some()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Decoded response object
///
/// `error` and `result` holding JSON `null` deserialize to `None`, the same
/// as when the field is missing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub id: Option<RequestId>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl Response {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// Typed view of a JSON-RPC error object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    /// Interpret an `error` member. Servers that send a bare string or number
    /// instead of an error object get wrapped as an internal error.
    pub fn from_value(value: &Value) -> Self {
        match serde_json::from_value::<RpcError>(value.clone()) {
            Ok(error) => error,
            Err(_) => Self {
                code: INTERNAL_ERROR,
                message: match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                },
                data: None,
            },
        }
    }
}

impl std::fmt::Display for RpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for RpcError {}

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;
