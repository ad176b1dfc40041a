//! Routing of decoded responses to success and failure handlers

use crate::protocol::{RequestId, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How `error` and `result` members are tested when routing a response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// A member counts when it holds any non-null value, so `0`, `false` and
    /// `""` are delivered as results.
    #[default]
    Presence,
    /// A member counts only when it is truthy in the JavaScript sense. Falsy
    /// results (`0`, `false`, `""`) come back as a void success.
    Truthy,
}

impl DispatchMode {
    fn holds(self, member: Option<&Value>) -> bool {
        match (self, member) {
            (_, None) => false,
            (DispatchMode::Presence, Some(value)) => !value.is_null(),
            (DispatchMode::Truthy, Some(value)) => is_truthy(value),
        }
    }
}

/// JavaScript truthiness for a JSON value. Objects and arrays are always
/// truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Result of classifying one response
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Failure {
        id: Option<RequestId>,
        error: Value,
    },
    /// `result` is `None` for a void success
    Success {
        id: Option<RequestId>,
        result: Option<Value>,
    },
}

impl Outcome {
    /// Error wins over result; a response with neither is a void success.
    pub fn classify(response: Response, mode: DispatchMode) -> Self {
        let Response { id, result, error } = response;

        if mode.holds(error.as_ref()) {
            return Outcome::Failure {
                id,
                error: error.unwrap_or(Value::Null),
            };
        }

        if mode.holds(result.as_ref()) {
            return Outcome::Success { id, result };
        }

        Outcome::Success { id, result: None }
    }

    pub fn id(&self) -> Option<&RequestId> {
        match self {
            Outcome::Failure { id, .. } | Outcome::Success { id, .. } => id.as_ref(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure { .. })
    }

    /// Invoke exactly one of the two handlers
    pub fn dispatch<S, F>(self, on_success: S, on_failure: F)
    where
        S: FnOnce(Option<RequestId>, Option<Value>),
        F: FnOnce(Option<RequestId>, Value),
    {
        match self {
            Outcome::Failure { id, error } => on_failure(id, error),
            Outcome::Success { id, result } => on_success(id, result),
        }
    }
}

pub fn dispatch<S, F>(response: Response, mode: DispatchMode, on_success: S, on_failure: F)
where
    S: FnOnce(Option<RequestId>, Option<Value>),
    F: FnOnce(Option<RequestId>, Value),
{
    Outcome::classify(response, mode).dispatch(on_success, on_failure);
}
