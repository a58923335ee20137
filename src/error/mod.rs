//! Error types for the GetResponse client.
//!
//! Every operation returns [`Result<T>`], whose error side is [`Error`]
//! categorized by [`ErrorKind`]:
//!
//! - `Transport`: the HTTP exchange failed
//! - `Protocol`: the endpoint answered with an unexpected status
//! - `Remote`: the service reported an error in its reply
//! - `State`: the batch state machine was misused
//!
//! ## Key Invariant
//!
//! Per-call remote failures inside a flushed batch are *not* errors: they come
//! back as [`Outcome::Failure`](crate::Outcome::Failure) in their slot.
//! Only the single-call transport turns a remote failure into `Err`.

mod core;
mod kind;

pub use self::core::Error;
pub use self::kind::ErrorKind;

/// A specialized `Result` type for GetResponse operations.
pub type Result<T> = std::result::Result<T, Error>;
