//! Error types for request construction and execution.
//!
//! Everything that can go wrong falls into two buckets: the request could not
//! be constructed or dispatched (bad URL, bad header material, transport
//! failure), or the exchange itself succeeded but the response body could not
//! be drained. The latter keeps the response metadata that was already
//! obtained, so callers can still see the status and headers.

use http::{HeaderMap, StatusCode};

/// The error type for building and sending a request.
///
/// Variants carry whatever debugging context exists at the point of failure.
/// Note that a non-2xx status is *not* an error: if the server answered, the
/// exchange succeeded and the caller receives a [`Response`](crate::Response)
/// with that status.
///
/// # Examples
///
/// ```no_run
/// use outbound::Error;
///
/// # async fn example() {
/// match outbound::get("http://localhost:9/unreachable").send().await {
///     Ok(response) => println!("status {}", response.status),
///     Err(Error::Transport(e)) => eprintln!("transport failure: {e}"),
///     Err(Error::Read { status, source, .. }) => {
///         eprintln!("body read failed after status {status}: {source}");
///     }
///     Err(e) => eprintln!("request could not be built: {e}"),
/// }
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The target URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A configured header or cookie contains characters the wire format
    /// does not allow.
    ///
    /// Header and cookie names/values are accepted as plain strings while
    /// chaining and validated only when the request is sent, so this surfaces
    /// from [`send`](crate::Request::send) rather than from the mutator that
    /// introduced the bad value.
    #[error("Invalid header {name:?}: {source}")]
    Header {
        /// The offending header name.
        name: String,
        /// The underlying validation error.
        source: http::Error,
    },

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// A network-level error occurred while dispatching the request
    /// (connection refused, DNS failure, protocol error, etc.).
    ///
    /// This wraps the underlying `reqwest::Error`. No response metadata is
    /// available because no exchange completed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The exchange completed but reading the response body failed.
    ///
    /// The response metadata obtained before the failure is preserved.
    ///
    /// # Fields
    ///
    /// * `status` - The HTTP status code of the response
    /// * `headers` - The response headers
    /// * `source` - The underlying read error
    #[error("Failed to read response body (status {status}): {source}")]
    Read {
        /// The HTTP status code.
        status: StatusCode,
        /// The response headers.
        headers: HeaderMap,
        /// The underlying read error.
        source: reqwest::Error,
    },
}

impl Error {
    /// Returns the HTTP status code if an exchange got far enough to have one.
    ///
    /// Only [`Error::Read`] carries a status; every other variant happened
    /// before a response existed.
    ///
    /// # Examples
    ///
    /// ```
    /// use outbound::Error;
    ///
    /// let err = Error::Url(url::Url::parse("no scheme").unwrap_err());
    /// assert_eq!(err.status(), None);
    /// ```
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Read { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the response headers if an exchange got far enough to have any.
    pub fn headers(&self) -> Option<&HeaderMap> {
        match self {
            Error::Read { headers, .. } => Some(headers),
            _ => None,
        }
    }
}

/// A specialized `Result` type for request construction and execution.
pub type Result<T> = std::result::Result<T, Error>;
