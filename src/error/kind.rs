//! Error kind enumeration for categorizing client errors.

/// Categorization of client errors.
///
/// None of these are retried by the client; retry policy belongs to the
/// caller.
///
/// | ErrorKind         | Raised by                      | Meaning                          |
/// |-------------------|--------------------------------|----------------------------------|
/// | `Transport`       | HTTP exchange                  | Connect, DNS, TLS, timeout       |
/// | `Protocol`        | HTTP exchange                  | Status other than 200 / 204      |
/// | `Remote`          | Response resolver              | Service reported an `error`      |
/// | `State`           | Batched transport              | Batch state machine misuse       |
/// | `InvalidResponse` | Reply decoding                 | Reply body is not usable JSON    |
/// | `InvalidArgument` | Convenience operations         | Bad filter operator or input     |
/// | `Configuration`   | Client construction            | Bad endpoint, TLS material, etc. |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The network exchange itself failed (connection refused, timeout,
    /// DNS failure, TLS failure, truncated body).
    #[error("transport error")]
    Transport,

    /// The endpoint answered with a status outside the accepted set
    /// (200 OK and 204 No Content).
    ///
    /// The observed status is available via [`Error::status()`](crate::Error::status).
    #[error("protocol error")]
    Protocol,

    /// The remote service explicitly reported an error inside an otherwise
    /// well-formed reply. The message is surfaced verbatim.
    #[error("remote error")]
    Remote,

    /// The batched transport was used outside its state machine, e.g.
    /// registering a call or flushing while no batch is open.
    ///
    /// This is a programming error and is never suppressed.
    #[error("invalid batch state")]
    State,

    /// The reply could not be decoded.
    #[error("invalid response")]
    InvalidResponse,

    /// A caller-supplied argument was rejected before any I/O.
    #[error("invalid argument")]
    InvalidArgument,

    /// Configuration error (invalid endpoint, unreadable certificate).
    #[error("configuration error")]
    Configuration,
}

impl ErrorKind {
    /// Returns `true` if this error describes a failed wire exchange
    /// (as opposed to a remote-reported failure or caller misuse).
    ///
    /// # Example
    ///
    /// ```rust
    /// use getresponse::ErrorKind;
    ///
    /// assert!(ErrorKind::Transport.is_exchange_failure());
    /// assert!(ErrorKind::Protocol.is_exchange_failure());
    /// assert!(!ErrorKind::Remote.is_exchange_failure());
    /// ```
    pub fn is_exchange_failure(&self) -> bool {
        matches!(
            self,
            ErrorKind::Transport | ErrorKind::Protocol | ErrorKind::InvalidResponse
        )
    }

    /// Returns `true` if this error was caused by the caller rather than by
    /// the network or the remote service.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::State | ErrorKind::InvalidArgument | ErrorKind::Configuration
        )
    }
}
