//! Batched transport: deferred calls sent together in one exchange.
//!
//! ## State machine
//!
//! ```text
//!            open()                 call()
//! Closed ───────────▶ Open ◀──────────────┐
//!   ▲                  │  └────────────────┘
//!   └──── flush() ─────┘   (success or failure)
//!
//! Closed ── call() / flush() ──▶ Err(State)
//! ```
//!
//! A flush never raises for exchange failures: it returns `Ok(None)` and
//! records the failure for [`Batched::last_error`]. Per-call remote errors
//! stay in their slot as [`Outcome::Failure`].

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tracing::{debug, warn};

use super::traits::{Dispatch, Wire};
use crate::Error;
use crate::envelope::Envelope;
use crate::resolve::{Outcome, RawResponse, resolve_batch_item};

/// Position of a deferred call inside the open batch.
///
/// The outcome of the call is at this index in the list returned by
/// [`Batched::flush`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deferred {
    position: usize,
}

impl Deferred {
    /// Index of the call's outcome in the flushed list.
    pub fn position(&self) -> usize {
        self.position
    }
}

#[derive(Debug, Default)]
struct BatchState {
    open: bool,
    pending: Vec<Envelope>,
    last_error: Option<String>,
}

/// Accumulates calls and sends them as one JSON array.
///
/// The batch state sits behind a mutex so the transport can be shared, but
/// interleaving `call()` and `flush()` from several threads on one batch is
/// left to the caller to order.
pub struct Batched {
    wire: Arc<dyn Wire>,
    state: Mutex<BatchState>,
}

impl Batched {
    /// Creates a batched transport over the given wire. The batch starts
    /// closed.
    pub fn new(wire: Arc<dyn Wire>) -> Self {
        Self {
            wire,
            state: Mutex::new(BatchState::default()),
        }
    }

    /// Returns the endpoint batches are sent to.
    pub fn endpoint(&self) -> &str {
        self.wire.endpoint()
    }

    /// Opens a batch, discarding any pending calls and the last error.
    pub fn open(&self) {
        let mut state = self.state.lock();
        if !state.pending.is_empty() {
            debug!(discarded = state.pending.len(), "reopening batch");
        }
        state.open = true;
        state.pending.clear();
        state.last_error = None;
    }

    /// Registers a call. No I/O happens until [`flush`](Self::flush).
    ///
    /// # Errors
    ///
    /// Returns a `State` error if no batch is open.
    pub fn call(&self, envelope: Envelope) -> Result<Deferred, Error> {
        let mut state = self.state.lock();
        if !state.open {
            return Err(Error::state(format!(
                "cannot register `{}`: no batch is open",
                envelope.method()
            )));
        }

        let position = state.pending.len();
        debug!(method = envelope.method(), position, "deferring call");
        state.pending.push(envelope);
        Ok(Deferred { position })
    }

    /// Sends every pending call in one exchange and closes the batch.
    ///
    /// Returns `Ok(Some(outcomes))` with one outcome per registered call,
    /// in registration order, or `Ok(None)` if the exchange failed; the
    /// failure is then available from [`last_error`](Self::last_error).
    /// The batch is closed afterwards in every case.
    ///
    /// An empty batch is closed without touching the network.
    ///
    /// # Errors
    ///
    /// Returns a `State` error if no batch is open.
    pub fn flush(&self) -> Result<Option<Vec<Outcome>>, Error> {
        let mut state = self.state.lock();
        if !state.open {
            return Err(Error::state("cannot flush: no batch is open"));
        }

        state.open = false;
        let pending = std::mem::take(&mut state.pending);
        if pending.is_empty() {
            debug!("flushing empty batch");
            return Ok(Some(Vec::new()));
        }

        debug!(calls = pending.len(), "flushing batch");
        match self.exchange(&pending) {
            Ok(outcomes) => Ok(Some(outcomes)),
            Err(err) => {
                warn!(calls = pending.len(), error = %err, "batch exchange failed");
                state.last_error = Some(err.to_string());
                Ok(None)
            }
        }
    }

    /// Returns the failure recorded by the last flush, if it failed.
    pub fn last_error(&self) -> Option<String> {
        self.state.lock().last_error.clone()
    }

    /// Returns `true` while a batch is open.
    pub fn is_open(&self) -> bool {
        self.state.lock().open
    }

    /// Number of calls registered in the open batch.
    pub fn pending(&self) -> usize {
        self.state.lock().pending.len()
    }

    fn exchange(&self, pending: &[Envelope]) -> Result<Vec<Outcome>, Error> {
        let body = serde_json::to_vec(pending).map_err(|e| {
            Error::invalid_argument(format!("Failed to encode batch: {}", e)).with_source(e)
        })?;

        let reply = self.wire.post(body)?;
        reply.accept(self.wire.endpoint())?;

        let items: Vec<Value> = reply
            .decode()?
            .ok_or_else(|| Error::invalid_response("empty reply to a batch request"))?;

        if items.len() != pending.len() {
            return Err(Error::invalid_response(format!(
                "batch reply has {} items for {} calls",
                items.len(),
                pending.len()
            )));
        }

        Ok(items
            .into_iter()
            .map(|item| resolve_batch_item(RawResponse::from_value(item)))
            .collect())
    }
}

impl std::fmt::Debug for Batched {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Batched")
            .field("endpoint", &self.wire.endpoint())
            .field("open", &state.open)
            .field("pending", &state.pending.len())
            .finish()
    }
}

impl Dispatch for Batched {
    type Output = Deferred;

    fn issue(&self, envelope: Envelope) -> Result<Deferred, Error> {
        self.call(envelope)
    }
}
