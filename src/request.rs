//! The fluent request builder and its one-shot execution.
//!
//! A [`Request`] accumulates configuration through chained mutator calls and
//! is consumed by [`Request::send`], which performs exactly one HTTP
//! exchange. All validation that could fail (URL parsing, header material)
//! is deferred to `send` so the mutators stay infallible and chainable.

use std::collections::BTreeMap;
use std::sync::OnceLock;
use std::time::Instant;

use http::header::{CONTENT_TYPE, COOKIE};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde_json::{Map, Value};
use url::Url;

use crate::body::{self, ContentType, Payload};
use crate::{Error, Response, Result};

static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// The process-wide transport client. Initialized on first use; every
/// request in the process shares its connection pool.
fn shared_client() -> &'static reqwest::Client {
    CLIENT.get_or_init(reqwest::Client::new)
}

/// A single outbound HTTP request, configured by chaining and consumed by
/// [`send`](Request::send).
///
/// Builders are one-shot: `send` takes the request by value, so a builder
/// describes exactly one exchange. Clone it first if you need to issue the
/// same request twice.
///
/// Most requests start from the free constructors ([`get`](crate::get),
/// [`post`](crate::post), and friends); `Request::new` covers any method the
/// shorthands do not.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> Result<(), outbound::Error> {
/// let response = outbound::get("https://api.example.com/search")
///     .query([("q", "rust"), ("limit", "10")])
///     .header("Accept", "application/json")
///     .send()
///     .await?;
///
/// println!("{}: {}", response.status, response.text());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: String,
    content_type: ContentType,
    headers: BTreeMap<String, String>,
    cookies: BTreeMap<String, String>,
    query: BTreeMap<String, String>,
    fields: Map<String, Value>,
    raw: String,
    basic_auth: Option<(String, String)>,
}

impl Request {
    /// Creates an empty request for the given method.
    ///
    /// The URL starts empty and everything else disabled; chain mutators to
    /// fill the request in. Body serialization defaults to
    /// [`ContentType::Json`]; the body-bearing constructors
    /// ([`post`](crate::post), [`put`](crate::put), [`patch`](crate::patch))
    /// are the way to pick a different strategy.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            url: String::new(),
            content_type: ContentType::default(),
            headers: BTreeMap::new(),
            cookies: BTreeMap::new(),
            query: BTreeMap::new(),
            fields: Map::new(),
            raw: String::new(),
            basic_auth: None,
        }
    }

    pub(crate) fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Sets the target URL, replacing any previous value.
    ///
    /// The URL is parsed only when the request is sent; an invalid URL
    /// surfaces there as [`Error::Url`](crate::Error::Url).
    pub fn url(mut self, target: impl Into<String>) -> Self {
        self.url = target.into();
        self
    }

    /// Sets a header, overwriting any previous value for the same name.
    ///
    /// Names and values are validated at send time so that chaining never
    /// fails mid-expression.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Merges key/value pairs into the query string.
    ///
    /// Pairs accumulate across calls; a later value for an existing key
    /// overrides the earlier one. Query parameters already embedded in the
    /// URL are left in place, with configured pairs appended after them.
    ///
    /// # Examples
    ///
    /// ```
    /// let request = outbound::get("https://api.example.com/search")
    ///     .query([("q", "rust")])
    ///     .query([("page", "2")]);
    /// # let _ = request;
    /// ```
    pub fn query<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.query.insert(key.into(), value.into());
        }
        self
    }

    /// Sets a cookie, overwriting any previous value for the same name.
    ///
    /// At send time all cookies are joined into a single `Cookie` header,
    /// appended after any value set directly via [`header`](Request::header).
    pub fn cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    /// Enables HTTP basic authentication with the given credentials.
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some((username.into(), password.into()));
        self
    }

    /// Supplies a body payload, routed by its shape.
    ///
    /// Textual payloads replace the raw body (sent verbatim under
    /// [`ContentType::Xml`]/[`ContentType::Text`]). Records flatten their
    /// named fields into the body fields; field mappings merge into them
    /// as-is. See [`Payload`] for the exact rules.
    ///
    /// The configured body is ignored for GET and DELETE, which never
    /// transmit one.
    ///
    /// # Examples
    ///
    /// ```
    /// use outbound::Payload;
    ///
    /// let request = outbound::post(
    ///     "https://api.example.com/users",
    ///     outbound::ContentType::Json,
    ///     Payload::fields([("name", "alice")]),
    /// )
    /// .body(Payload::fields([("role", "admin")]));
    /// # let _ = request;
    /// ```
    pub fn body(mut self, payload: impl Into<Payload>) -> Self {
        match payload.into() {
            Payload::Text(text) => self.raw = text,
            Payload::Record(value) => body::flatten_record(value, &mut self.fields),
            Payload::Fields(map) => self.fields.extend(map),
        }
        self
    }

    /// Sends the request and reads the response body in full.
    ///
    /// This performs exactly one exchange: no retries, no redirect or
    /// timeout configuration beyond the transport's defaults. Any response
    /// from the server, whatever its status code, is a success; inspect
    /// [`Response::status`](crate::Response::status) to react to non-2xx
    /// outcomes.
    ///
    /// # Errors
    ///
    /// * [`Error::Url`](crate::Error::Url) / [`Error::Header`](crate::Error::Header) /
    ///   [`Error::Encode`](crate::Error::Encode) when the accumulated state
    ///   cannot be assembled into a transport request.
    /// * [`Error::Transport`](crate::Error::Transport) when dispatch fails
    ///   before a response arrives.
    /// * [`Error::Read`](crate::Error::Read) when the exchange succeeded but
    ///   the body could not be drained; the status and headers received so
    ///   far ride along in the error.
    pub async fn send(self) -> Result<Response> {
        let mut url = Url::parse(&self.url)?;

        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            insert_header(&mut headers, name, value)?;
        }

        // GET and DELETE never carry a body; every other method sends the
        // encoded body state, and the serializer's Content-Type wins over a
        // caller-set header of the same name.
        let body = if self.method != Method::GET && self.method != Method::DELETE {
            let bytes = body::encode(self.content_type, &self.fields, &self.raw)?;
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_static(self.content_type.header_value()),
            );
            Some(bytes)
        } else {
            None
        };

        for (key, value) in &self.query {
            url.query_pairs_mut().append_pair(key, value);
        }

        if !self.cookies.is_empty() {
            let value = self.assemble_cookie_header(&headers)?;
            headers.insert(COOKIE, value);
        }

        tracing::debug!(
            method = %self.method,
            url = %url,
            "Dispatching HTTP request"
        );

        let mut request = shared_client()
            .request(self.method, url)
            .headers(headers);

        if let Some((username, password)) = &self.basic_auth {
            request = request.basic_auth(username, Some(password));
        }

        if let Some(bytes) = body {
            request = request.body(bytes);
        }

        let started = Instant::now();
        let response = request.send().await?;

        let status = response.status();
        let response_headers = response.headers().clone();

        let body = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(source) => {
                return Err(Error::Read {
                    status,
                    headers: response_headers,
                    source,
                });
            }
        };
        let latency = started.elapsed();

        tracing::debug!(
            status = status.as_u16(),
            latency_ms = latency.as_millis() as u64,
            bytes = body.len(),
            "Received HTTP response"
        );

        Ok(Response::new(status, response_headers, body, latency))
    }

    /// Joins the configured cookies into one `Cookie` header value,
    /// appending them after any caller-set `Cookie` header.
    fn assemble_cookie_header(&self, headers: &HeaderMap) -> Result<HeaderValue> {
        let joined = self
            .cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ");

        let merged = match headers.get(COOKIE).and_then(|value| value.to_str().ok()) {
            Some(existing) if !existing.is_empty() => format!("{existing}; {joined}"),
            _ => joined,
        };

        HeaderValue::try_from(merged).map_err(|error| Error::Header {
            name: COOKIE.as_str().to_owned(),
            source: error.into(),
        })
    }
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) -> Result<()> {
    let header_name = HeaderName::try_from(name).map_err(|error| Error::Header {
        name: name.to_owned(),
        source: error.into(),
    })?;
    let header_value = HeaderValue::try_from(value).map_err(|error| Error::Header {
        name: name.to_owned(),
        source: error.into(),
    })?;
    headers.insert(header_name, header_value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn header_overwrites_same_name() {
        let request = Request::new(Method::GET)
            .header("Accept", "text/plain")
            .header("Accept", "application/json");

        assert_eq!(
            request.headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(request.headers.len(), 1);
    }

    #[test]
    fn query_merges_additively_and_overrides_per_key() {
        let request = Request::new(Method::GET)
            .query([("a", "1"), ("b", "2")])
            .query([("b", "3"), ("c", "4")]);

        assert_eq!(request.query.get("a").map(String::as_str), Some("1"));
        assert_eq!(request.query.get("b").map(String::as_str), Some("3"));
        assert_eq!(request.query.get("c").map(String::as_str), Some("4"));
    }

    #[test]
    fn cookie_overwrites_same_name() {
        let request = Request::new(Method::GET)
            .cookie("session", "old")
            .cookie("session", "new")
            .cookie("theme", "dark");

        assert_eq!(
            request.cookies.get("session").map(String::as_str),
            Some("new")
        );
        assert_eq!(request.cookies.len(), 2);
    }

    #[test]
    fn text_payload_lands_in_raw_body_only() {
        let request = Request::new(Method::POST).body("<status>ok</status>");

        assert_eq!(request.raw, "<status>ok</status>");
        assert!(request.fields.is_empty());
    }

    #[test]
    fn record_payload_flattens_into_fields() {
        #[derive(serde::Serialize)]
        struct Record {
            #[serde(rename = "Name")]
            name: &'static str,
        }

        let request = Request::new(Method::POST).body(Payload::record(&Record { name: "x" }));

        assert_eq!(request.fields.get("name"), Some(&json!("x")));
        assert!(request.raw.is_empty());
    }

    #[test]
    fn field_payloads_merge_with_later_keys_winning() {
        let request = Request::new(Method::POST)
            .body(Payload::fields([("a", "1"), ("b", "2")]))
            .body(Payload::fields([("b", "override")]));

        assert_eq!(request.fields.get("a"), Some(&json!("1")));
        assert_eq!(request.fields.get("b"), Some(&json!("override")));
    }

    #[test]
    fn cookie_header_joins_in_name_order() {
        let request = Request::new(Method::GET)
            .cookie("b", "2")
            .cookie("a", "1");

        let value = request.assemble_cookie_header(&HeaderMap::new()).unwrap();
        assert_eq!(value, "a=1; b=2");
    }

    #[test]
    fn cookie_header_appends_after_caller_set_value() {
        let request = Request::new(Method::GET).cookie("extra", "1");

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("first=0"));

        let value = request.assemble_cookie_header(&headers).unwrap();
        assert_eq!(value, "first=0; extra=1");
    }

    #[test]
    fn url_mutator_replaces_target() {
        let request = Request::new(Method::GET)
            .url("https://old.example.com")
            .url("https://new.example.com");

        assert_eq!(request.url, "https://new.example.com");
    }
}
