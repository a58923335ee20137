//! Main error type for the GetResponse client.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use super::ErrorKind;

/// The primary error type for client operations.
///
/// `Error` carries a [`kind()`](Error::kind) for `match` statements plus the
/// context that belongs to that kind:
///
/// ```text
/// Error
/// ├── kind: ErrorKind          (category for matching)
/// ├── message: String          (human-readable description)
/// ├── status: Option           (HTTP status, Protocol errors)
/// ├── endpoint: Option         (endpoint URL, Protocol errors)
/// ├── code: Option             (remote error code, Remote errors)
/// └── source: Option           (underlying cause)
/// ```
///
/// ## Example
///
/// ```rust
/// use getresponse::{Error, ErrorKind};
///
/// fn report(err: &Error) {
///     match err.kind() {
///         ErrorKind::Remote => {
///             eprintln!("service said: {} (code {:?})", err.message(), err.code());
///         }
///         ErrorKind::Protocol => {
///             eprintln!("unexpected status {:?} from {:?}", err.status(), err.endpoint());
///         }
///         _ => eprintln!("{}", err),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Cow<'static, str>,
    status: Option<u16>,
    endpoint: Option<String>,
    code: Option<i64>,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use getresponse::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::InvalidArgument, "unknown operator");
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// ```
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            endpoint: None,
            code: None,
            source: None,
        }
    }

    /// Creates an error from a kind with a default message.
    pub fn from_kind(kind: ErrorKind) -> Self {
        let message = match kind {
            ErrorKind::Transport => "HTTP exchange failed",
            ErrorKind::Protocol => "unexpected HTTP status",
            ErrorKind::Remote => "the service reported an error",
            ErrorKind::State => "no batch is open",
            ErrorKind::InvalidResponse => "reply could not be decoded",
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::Configuration => "configuration error",
        };
        Self::new(kind, message)
    }

    /// Returns the error kind for categorization.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the human-readable message.
    ///
    /// For [`ErrorKind::Remote`] this is the service-supplied message,
    /// unchanged.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the observed HTTP status, for protocol errors.
    #[inline]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns the endpoint the failed exchange was sent to, if recorded.
    #[inline]
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Returns the remote error code, if the service supplied one.
    #[inline]
    pub fn code(&self) -> Option<i64> {
        self.code
    }

    /// Sets the HTTP status for this error.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the endpoint URL for this error.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the remote error code for this error.
    #[must_use]
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    /// Sets the source error for this error.
    #[must_use]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors for common error types

    /// Creates a transport error.
    pub fn transport(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Creates a protocol error for a rejected HTTP status.
    ///
    /// ```rust
    /// use getresponse::{Error, ErrorKind};
    ///
    /// let err = Error::protocol(500, "http://api2.getresponse.com");
    /// assert_eq!(err.kind(), ErrorKind::Protocol);
    /// assert_eq!(err.status(), Some(500));
    /// assert!(err.to_string().contains("500"));
    /// ```
    pub fn protocol(status: u16, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        Self::new(
            ErrorKind::Protocol,
            format!(
                "API call to {} failed, server returned status code {}",
                endpoint, status
            ),
        )
        .with_status(status)
        .with_endpoint(endpoint)
    }

    /// Creates a remote error carrying the service-supplied message.
    pub fn remote(message: impl Into<Cow<'static, str>>, code: Option<i64>) -> Self {
        let mut err = Self::new(ErrorKind::Remote, message);
        err.code = code;
        err
    }

    /// Creates a batch state error.
    pub fn state(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::State, message)
    }

    /// Creates an invalid response error.
    pub fn invalid_response(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidResponse, message)
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;

        if let Some(code) = self.code {
            write!(f, " (code: {})", code)?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::configuration(format!("invalid endpoint URL: {}", err)).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::invalid_response(format!("JSON error: {}", err)).with_source(err)
    }
}
