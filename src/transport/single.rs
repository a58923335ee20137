//! Single-call transport: one HTTP exchange per call.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::traits::{Dispatch, Wire};
use crate::Error;
use crate::envelope::Envelope;
use crate::resolve::{RawResponse, resolve_single};

/// Sends every call immediately and resolves its reply.
///
/// Calls are independent: nothing survives from one call to the next.
///
/// | Condition                          | Result                     |
/// |------------------------------------|----------------------------|
/// | Exchange failed                    | `Err(Transport)`           |
/// | Status not 200/204                 | `Err(Protocol)`            |
/// | Body is not JSON                   | `Err(InvalidResponse)`     |
/// | Empty body (204)                   | `Ok(Value::Null)`          |
/// | `error` populated                  | `Err(Remote)`              |
/// | Otherwise                          | `Ok(result)`               |
#[derive(Clone)]
pub struct SingleCall {
    wire: Arc<dyn Wire>,
}

impl SingleCall {
    /// Creates a single-call transport over the given wire.
    pub fn new(wire: Arc<dyn Wire>) -> Self {
        Self { wire }
    }

    /// Returns the endpoint calls are sent to.
    pub fn endpoint(&self) -> &str {
        self.wire.endpoint()
    }
}

impl std::fmt::Debug for SingleCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SingleCall")
            .field("endpoint", &self.wire.endpoint())
            .finish()
    }
}

impl Dispatch for SingleCall {
    type Output = Value;

    fn issue(&self, envelope: Envelope) -> Result<Value, Error> {
        debug!(method = envelope.method(), arity = envelope.arity(), "dispatching call");

        let body = serde_json::to_vec(&envelope).map_err(|e| {
            Error::invalid_argument(format!("Failed to encode request: {}", e)).with_source(e)
        })?;

        let reply = self.wire.post(body)?;
        reply.accept(self.wire.endpoint())?;

        match reply.decode::<RawResponse>()? {
            Some(raw) => resolve_single(raw),
            None => Ok(Value::Null),
        }
    }
}
