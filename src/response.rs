//! Response wrapper that hands back the raw response details.
//!
//! The [`Response`] type carries the status code, headers, raw body bytes,
//! and timing of a completed request. Nothing is parsed on the caller's
//! behalf; interpreting the body is deliberately left to the caller.

use std::borrow::Cow;
use std::time::Duration;

use bytes::Bytes;
use http::{HeaderMap, StatusCode};

/// The outcome of a successfully dispatched request.
///
/// A response is returned whenever the exchange completed, regardless of
/// status code: a `404` or `500` is still a `Response`, not an error, so
/// callers decide for themselves which statuses matter.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> Result<(), outbound::Error> {
/// let response = outbound::get("https://api.example.com/users/123")
///     .send()
///     .await?;
///
/// println!("Status: {}", response.status);
/// println!("Request took {:?}", response.latency);
///
/// if response.status.is_success() {
///     println!("Body: {}", response.text());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// The raw response body.
    ///
    /// This is the exact byte sequence the server sent, useful for
    /// debugging, logging, or handing off to a parser.
    pub body: Bytes,

    /// The total latency of the request.
    ///
    /// This measures the time from when the request was dispatched until
    /// the body was fully read.
    pub latency: Duration,
}

impl Response {
    /// Creates a new `Response`.
    ///
    /// This is typically called internally after the response body has been
    /// read in full.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes, latency: Duration) -> Self {
        Self {
            status,
            headers,
            body,
            latency,
        }
    }

    /// Returns a reference to a header value by name.
    ///
    /// # Examples
    ///
    /// ```
    /// # use outbound::Response;
    /// # use bytes::Bytes;
    /// # use http::{HeaderMap, HeaderValue, StatusCode};
    /// # use std::time::Duration;
    /// let mut headers = HeaderMap::new();
    /// headers.insert("content-type", HeaderValue::from_static("application/json"));
    ///
    /// let response = Response::new(
    ///     StatusCode::OK,
    ///     headers,
    ///     Bytes::new(),
    ///     Duration::from_millis(100),
    /// );
    ///
    /// assert_eq!(
    ///     response.header("content-type").unwrap(),
    ///     "application/json"
    /// );
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    /// Returns the body as text, replacing invalid UTF-8 with `U+FFFD`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use outbound::Response;
    /// # use bytes::Bytes;
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let response = Response::new(
    ///     StatusCode::OK,
    ///     HeaderMap::new(),
    ///     Bytes::from_static(b"{\"id\":42}"),
    ///     Duration::from_millis(100),
    /// );
    ///
    /// assert_eq!(response.text(), "{\"id\":42}");
    /// ```
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
