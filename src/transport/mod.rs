//! Transport layer for GetResponse communication.
//!
//! Two strategies share the [`Dispatch`] contract:
//!
//! - [`SingleCall`]: one blocking HTTP exchange per call; resolves the reply
//!   into the `result` payload or an error.
//! - [`Batched`]: defers calls while a batch is open and sends them together
//!   as one JSON array on flush.
//!
//! Both sit on a [`Wire`], the blocking POST primitive. [`HttpWire`] talks to
//! the real endpoint; [`MockWire`](crate::testing::MockWire) replays scripted
//! replies for tests.
//!
//! Users normally reach these through [`Client`](crate::Client) rather than
//! directly.

mod batch;
mod http;
mod single;
mod traits;

pub use batch::{Batched, Deferred};
pub use http::HttpWire;
pub use single::SingleCall;
pub use traits::{ACCEPTED_STATUSES, Dispatch, Wire, WireReply};
