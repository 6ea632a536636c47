//! # Outbound - a fluent builder for one-shot HTTP requests
//!
//! Outbound is a thin, chainable layer over `reqwest` for code that wants to
//! fire a single HTTP request without composing transport calls by hand.
//! Chain the configuration, call [`send`](Request::send), and get the raw
//! response back: status, headers, body bytes, and timing.
//!
//! ## Quick Start
//!
//! ```no_run
//! use outbound::{ContentType, Payload};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), outbound::Error> {
//!     // Look someone up.
//!     let response = outbound::get("https://api.example.com/users/123")
//!         .header("Accept", "application/json")
//!         .query([("expand", "profile")])
//!         .send()
//!         .await?;
//!     println!("Status: {}", response.status);
//!     println!("Body: {}", response.text());
//!
//!     // Create someone.
//!     let created = outbound::post(
//!         "https://api.example.com/users",
//!         ContentType::Json,
//!         Payload::fields([("name", "Alice"), ("role", "admin")]),
//!     )
//!     .basic_auth("service", "hunter2")
//!     .send()
//!     .await?;
//!     println!("Created: {}", created.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Fluent one-shot builders** - Chain configuration calls, send, done; no client object to manage
//! - **Four body strategies** - JSON, XML, plain text, and URL-encoded forms, selected by a declared [`ContentType`]
//! - **Typed payloads** - Structured records, key/value mappings, or raw text via the [`Payload`] union
//! - **Status-agnostic responses** - A `404` is data, not an error; you decide which statuses matter
//! - **Raw response bodies** - Bytes come back untouched, parsing stays your choice
//! - **Automatic logging** - Structured `tracing` events on dispatch and response
//! - **Shared transport** - One process-wide `reqwest` client and its connection pool behind the scenes
//!
//! ## Body Payloads
//!
//! Three payload shapes cover the common cases; the declared [`ContentType`]
//! decides how the accumulated body state reaches the wire:
//!
//! ```no_run
//! use outbound::{ContentType, Payload};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Login {
//!     user: String,
//! }
//!
//! # async fn example() -> Result<(), outbound::Error> {
//! // A structured record, flattened into body fields and sent as JSON.
//! outbound::post(
//!     "https://api.example.com/login",
//!     ContentType::Json,
//!     Payload::record(&Login { user: "alice".into() }),
//! )
//! .send()
//! .await?;
//!
//! // Pre-formatted XML, transmitted verbatim.
//! outbound::put(
//!     "https://api.example.com/config",
//!     ContentType::Xml,
//!     "<config><language>rust</language></config>",
//! )
//! .send()
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Errors divide into request assembly, dispatch, and body reading; responses
//! that arrived intact are never errors, whatever their status:
//!
//! ```no_run
//! use outbound::Error;
//!
//! # async fn example() {
//! match outbound::get("https://api.example.com/endpoint").send().await {
//!     Ok(response) => {
//!         println!("{}: {} bytes", response.status, response.body.len());
//!     }
//!     Err(Error::Read { status, .. }) => {
//!         eprintln!("Exchange completed (status {status}) but the body could not be read");
//!     }
//!     Err(Error::Transport(e)) => {
//!         eprintln!("Dispatch failed: {e}");
//!     }
//!     Err(e) => {
//!         eprintln!("Invalid request state: {e}");
//!     }
//! }
//! # }
//! ```

mod body;
mod error;
mod request;
mod response;

pub use body::{ContentType, Payload};
pub use error::{Error, Result};
pub use request::Request;
pub use response::Response;

pub use http::Method;

/// Starts a GET request for the given URL.
///
/// GET requests never transmit a body, whatever body state is configured.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> Result<(), outbound::Error> {
/// let response = outbound::get("https://api.example.com/health").send().await?;
/// assert!(response.status.is_success());
/// # Ok(())
/// # }
/// ```
pub fn get(url: impl Into<String>) -> Request {
    Request::new(Method::GET).url(url)
}

/// Starts a HEAD request for the given URL.
pub fn head(url: impl Into<String>) -> Request {
    Request::new(Method::HEAD).url(url)
}

/// Starts a DELETE request for the given URL.
///
/// Like GET, DELETE never transmits a body.
pub fn delete(url: impl Into<String>) -> Request {
    Request::new(Method::DELETE).url(url)
}

/// Starts an OPTIONS request for the given URL.
pub fn options(url: impl Into<String>) -> Request {
    Request::new(Method::OPTIONS).url(url)
}

/// Starts a POST request carrying `payload`, serialized per `content_type`.
///
/// # Examples
///
/// ```no_run
/// use outbound::{ContentType, Payload};
///
/// # async fn example() -> Result<(), outbound::Error> {
/// let response = outbound::post(
///     "https://api.example.com/sessions",
///     ContentType::Form,
///     Payload::fields([("user", "alice"), ("password", "secret")]),
/// )
/// .send()
/// .await?;
/// println!("{}", response.status);
/// # Ok(())
/// # }
/// ```
pub fn post(
    url: impl Into<String>,
    content_type: ContentType,
    payload: impl Into<Payload>,
) -> Request {
    Request::new(Method::POST)
        .url(url)
        .with_content_type(content_type)
        .body(payload)
}

/// Starts a PUT request carrying `payload`, serialized per `content_type`.
pub fn put(
    url: impl Into<String>,
    content_type: ContentType,
    payload: impl Into<Payload>,
) -> Request {
    Request::new(Method::PUT)
        .url(url)
        .with_content_type(content_type)
        .body(payload)
}

/// Starts a PATCH request carrying `payload`, serialized per `content_type`.
pub fn patch(
    url: impl Into<String>,
    content_type: ContentType,
    payload: impl Into<Payload>,
) -> Request {
    Request::new(Method::PATCH)
        .url(url)
        .with_content_type(content_type)
        .body(payload)
}
