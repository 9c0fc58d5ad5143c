//! Error types for courier.

use derive_more::{Display, Error, From};

/// Main error type for courier operations.
///
/// Every failure a request can produce surfaces as one of these variants;
/// there is no internal retry or fallback. Transport-level failures
/// ([`Error::Connection`], [`Error::Tls`], [`Error::Timeout`]) are passed
/// through from the transport unchanged rather than reclassified.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The endpoint base URL (or a URL built from it) is not a valid URL.
    ///
    /// Raised before any network I/O is attempted.
    #[display("invalid URL: {_0}")]
    #[from(skip)]
    InvalidUrl(#[error(not(source))] String),

    /// The transport returned something that is not a usable HTTP response.
    #[display("no usable HTTP response")]
    #[from(skip)]
    NoResponse,

    /// The server answered with status 401.
    #[display("unauthorized (HTTP 401)")]
    #[from(skip)]
    Unauthorized,

    /// The server answered with a status outside 200-299 that is not 401.
    #[display("unexpected status code {status}")]
    #[from(skip)]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, if available.
        #[error(not(source))]
        body: Option<bytes::Bytes>,
    },

    /// A 2xx response body did not match the expected shape.
    #[display("JSON decode error at '{path}': {message}")]
    #[from(skip)]
    Decode {
        /// JSON path to the error (e.g., "user.address.city").
        path: String,
        /// Error message.
        message: String,
    },

    /// Endpoint parameters could not be serialized into a JSON body.
    #[display("JSON serialization error: {_0}")]
    #[from]
    Serialize(serde_json::Error),

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl Error {
    /// Create an invalid-URL error.
    #[must_use]
    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::InvalidUrl(message.into())
    }

    /// Create an unexpected-status error from status code and body.
    #[must_use]
    pub fn unexpected_status(status: u16, body: Option<bytes::Bytes>) -> Self {
        Self::UnexpectedStatus { status, body }
    }

    /// Create a decode error with path context.
    #[must_use]
    pub fn decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if the server rejected the request with 401.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Returns the HTTP status code the failure was derived from, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the response body if this failure carries one.
    #[must_use]
    pub const fn body(&self) -> Option<&bytes::Bytes> {
        match self {
            Self::UnexpectedStatus { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}
