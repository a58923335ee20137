//! Response resolution.
//!
//! A decoded reply carries either a `result` or an `error`. Whether the
//! `error` member counts as present is decided exactly once, in
//! [`Outcome::from_raw`]; everything downstream matches on [`Outcome`].
//!
//! An `error` member counts as absent when it is missing, `null`, `false`,
//! `0`, `""`, `[]` or `{}`.

use serde::Deserialize;
use serde_json::Value;

use crate::Error;

/// A decoded reply, before interpretation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawResponse {
    /// Success payload.
    #[serde(default)]
    pub result: Option<Value>,
    /// Failure payload, `{code, message}`-shaped or message-only.
    #[serde(default)]
    pub error: Option<Value>,
}

impl RawResponse {
    /// Interprets one element of a batch reply.
    ///
    /// Elements that are not JSON objects cannot carry either member; they
    /// are kept as an error payload so the slot still reports a failure.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut object) => Self {
                result: object.remove("result").filter(|v| !v.is_null()),
                error: object.remove("error").filter(|v| !v.is_null()),
            },
            other => Self {
                result: None,
                error: Some(serde_json::json!({
                    "message": "malformed batch reply item",
                    "item": other,
                })),
            },
        }
    }
}

/// A failure reported by the remote service for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteFault {
    message: String,
    code: Option<i64>,
    payload: Value,
}

impl RemoteFault {
    /// Builds a fault from the raw `error` payload.
    pub fn from_payload(payload: Value) -> Self {
        let message = match &payload {
            Value::String(message) => message.clone(),
            Value::Object(object) => object
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .unwrap_or_else(|| payload.to_string()),
            other => other.to_string(),
        };
        let code = payload.get("code").and_then(|code| match code {
            Value::Number(number) => number.as_i64(),
            Value::String(text) => text.parse().ok(),
            _ => None,
        });

        Self {
            message,
            code,
            payload,
        }
    }

    /// The service-supplied message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The service-supplied code, if any.
    pub fn code(&self) -> Option<i64> {
        self.code
    }

    /// The raw `error` payload, unchanged.
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Converts the fault into a [`ErrorKind::Remote`](crate::ErrorKind::Remote) error.
    pub fn into_error(self) -> Error {
        Error::remote(self.message, self.code)
    }
}

/// The resolved value of one call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The call succeeded; holds the `result` payload unchanged
    /// (`Null` if the reply had none).
    Success(Value),
    /// The service reported an error for this call.
    Failure(RemoteFault),
}

impl Outcome {
    /// Decides between success and failure for a decoded reply.
    pub fn from_raw(raw: RawResponse) -> Self {
        match raw.error {
            Some(error) if is_truthy(&error) => Outcome::Failure(RemoteFault::from_payload(error)),
            _ => Outcome::Success(raw.result.unwrap_or(Value::Null)),
        }
    }

    /// Returns `true` if the call succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if the service reported an error.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Returns the result payload on success, or the error payload on failure.
    pub fn payload(&self) -> &Value {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(fault) => fault.payload(),
        }
    }

    /// Returns the fault, if the call failed.
    pub fn fault(&self) -> Option<&RemoteFault> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(fault) => Some(fault),
        }
    }

    /// Converts into a `Result`, turning a failure into a `Remote` error.
    pub fn into_result(self) -> Result<Value, Error> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(fault) => Err(fault.into_error()),
        }
    }
}

/// Resolves a single-call reply.
///
/// # Errors
///
/// Returns a `Remote` error with the exact `error.message` when the reply
/// carries an error.
///
/// # Example
///
/// ```rust
/// use getresponse::{resolve_single, ErrorKind, RawResponse};
/// use serde_json::json;
///
/// let ok: RawResponse = serde_json::from_value(json!({"result": {"ping": "pong"}})).unwrap();
/// assert_eq!(resolve_single(ok).unwrap(), json!({"ping": "pong"}));
///
/// let failed: RawResponse =
///     serde_json::from_value(json!({"error": {"message": "Invalid API key", "code": 101}})).unwrap();
/// let err = resolve_single(failed).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Remote);
/// assert_eq!(err.message(), "Invalid API key");
/// ```
pub fn resolve_single(raw: RawResponse) -> Result<Value, Error> {
    Outcome::from_raw(raw).into_result()
}

/// Resolves one element of a batch reply. Never fails: a remote error is
/// kept in its slot as [`Outcome::Failure`].
pub fn resolve_batch_item(raw: RawResponse) -> Outcome {
    Outcome::from_raw(raw)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty() && text != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(members) => !members.is_empty(),
    }
}
