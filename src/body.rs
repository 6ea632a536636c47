//! Body payloads and the content-type driven encoding strategies.
//!
//! A request accumulates body state in two places: a set of named fields
//! (used by the structured strategies, [`ContentType::Json`] and
//! [`ContentType::Form`]) and a raw string (used by the passthrough
//! strategies, [`ContentType::Xml`] and [`ContentType::Text`]). Callers feed
//! that state through [`Payload`], a tagged union with one variant per
//! payload shape, and the declared [`ContentType`] decides at send time which
//! of the two stores becomes the wire body.

use serde::Serialize;
use serde_json::{Map, Value};
use url::form_urlencoded;

/// The body serialization strategy for a request.
///
/// Selecting a content type picks both the encoding algorithm and the
/// `Content-Type` header stamped on the outgoing request:
///
/// | Variant | Bytes | Header |
/// |---|---|---|
/// | `Json` | JSON object built from the body fields | `application/json` |
/// | `Xml`  | the raw body string, verbatim | `application/xml` |
/// | `Text` | the raw body string, verbatim | `text/plain` |
/// | `Form` | URL-encoded form of the body fields | `application/x-www-form-urlencoded` |
///
/// The content type is irrelevant for GET and DELETE, which never send a
/// body. `Json` is the default for requests built through
/// [`Request::new`](crate::Request::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    /// Serialize the body fields as a JSON object.
    #[default]
    Json,
    /// Send the raw body string verbatim as `application/xml`. The caller is
    /// responsible for producing valid XML beforehand.
    Xml,
    /// Send the raw body string verbatim as `text/plain`.
    Text,
    /// URL-encode the body fields as `application/x-www-form-urlencoded`.
    Form,
}

impl ContentType {
    /// The `Content-Type` header value this strategy stamps on the request.
    pub fn header_value(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::Xml => "application/xml",
            ContentType::Text => "text/plain",
            ContentType::Form => "application/x-www-form-urlencoded",
        }
    }
}

/// A body payload, one variant per shape the builder accepts.
///
/// [`Request::body`](crate::Request::body) routes each variant differently:
/// text lands in the raw body store, records are flattened field-by-field
/// into the body fields (names lower-cased, values rendered as text), and
/// field mappings are merged into the body fields as-is. Later keys override
/// earlier ones; text and fields never populate each other.
///
/// # Examples
///
/// ```
/// use outbound::Payload;
/// use serde::Serialize;
///
/// // Textual payloads convert directly, so `.body("...")` works unannotated.
/// let _ = Payload::from("<status>ok</status>");
///
/// // Records flatten their named fields.
/// #[derive(Serialize)]
/// struct Login {
///     user: String,
///     attempts: u32,
/// }
/// let _ = Payload::record(&Login { user: "alice".into(), attempts: 3 });
///
/// // Field mappings merge as-is, values staying arbitrary JSON.
/// let _ = Payload::fields([("user", "alice"), ("role", "admin")]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A pre-formatted text body, stored verbatim as the raw body.
    Text(String),
    /// A structured record; its named fields are flattened into the body
    /// fields with lower-cased names and text-rendered values.
    Record(Value),
    /// A generic key/value mapping, merged into the body fields unchanged.
    Fields(Map<String, Value>),
}

impl Payload {
    /// Creates a textual payload.
    pub fn text(text: impl Into<String>) -> Self {
        Payload::Text(text.into())
    }

    /// Creates a record payload from any serializable value.
    ///
    /// The value is expected to serialize to an object (a struct with named
    /// fields, a map, `serde_json::json!({..})`). Anything else is silently
    /// dropped when the payload is applied; that permissiveness is inherited
    /// behavior, not an error path.
    pub fn record<T: Serialize>(record: &T) -> Self {
        match serde_json::to_value(record) {
            Ok(value) => Payload::Record(value),
            Err(error) => {
                tracing::debug!(%error, "record payload failed to serialize and will be dropped");
                Payload::Record(Value::Null)
            }
        }
    }

    /// Creates a field-mapping payload from key/value pairs.
    ///
    /// Values may be anything convertible to a JSON value; strings, numbers
    /// and booleans all convert via `Into`.
    pub fn fields<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Payload::Fields(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_owned())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(fields: Map<String, Value>) -> Self {
        Payload::Fields(fields)
    }
}

/// Flattens a record value into the body fields.
///
/// Field names are lower-cased and values rendered as text, so a record with
/// field `Foo = "bar"` contributes `foo -> "bar"`. Values that did not
/// serialize to an object contribute nothing.
pub(crate) fn flatten_record(value: Value, fields: &mut Map<String, Value>) {
    match value {
        Value::Object(record) => {
            for (name, value) in record {
                fields.insert(name.to_lowercase(), Value::String(render_text(&value)));
            }
        }
        _ => {
            tracing::debug!("record payload did not serialize to an object; dropping it");
        }
    }
}

/// Renders a field value as text.
///
/// This is the formatting contract for record flattening and form encoding:
/// strings render verbatim, numbers and booleans in canonical form, null as
/// the empty string, and nested arrays/objects as compact JSON.
pub(crate) fn render_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        nested => nested.to_string(),
    }
}

/// Encodes the accumulated body state under the declared content type.
///
/// Json serializes the fields even when empty, producing `{}`. Xml and Text
/// pass the raw string through untouched. Form renders every field value as
/// text and URL-encodes the pairs.
pub(crate) fn encode(
    content_type: ContentType,
    fields: &Map<String, Value>,
    raw: &str,
) -> crate::Result<Vec<u8>> {
    let bytes = match content_type {
        ContentType::Json => serde_json::to_vec(fields)?,
        ContentType::Xml | ContentType::Text => raw.as_bytes().to_vec(),
        ContentType::Form => {
            let mut form = form_urlencoded::Serializer::new(String::new());
            for (name, value) in fields {
                form.append_pair(name, &render_text(value));
            }
            form.finish().into_bytes()
        }
    };
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields_of(payload: Payload) -> Map<String, Value> {
        let mut fields = Map::new();
        let mut raw = String::new();
        apply(payload, &mut fields, &mut raw);
        fields
    }

    fn apply(payload: Payload, fields: &mut Map<String, Value>, raw: &mut String) {
        match payload {
            Payload::Text(text) => *raw = text,
            Payload::Record(value) => flatten_record(value, fields),
            Payload::Fields(map) => fields.extend(map),
        }
    }

    #[test]
    fn header_values() {
        assert_eq!(ContentType::Json.header_value(), "application/json");
        assert_eq!(ContentType::Xml.header_value(), "application/xml");
        assert_eq!(ContentType::Text.header_value(), "text/plain");
        assert_eq!(
            ContentType::Form.header_value(),
            "application/x-www-form-urlencoded"
        );
    }

    #[test]
    fn json_of_fields() {
        let mut fields = Map::new();
        fields.insert("foo".to_owned(), json!("bar"));

        let bytes = encode(ContentType::Json, &fields, "").unwrap();
        assert_eq!(bytes, br#"{"foo":"bar"}"#);
    }

    #[test]
    fn json_of_empty_fields_is_empty_object() {
        let bytes = encode(ContentType::Json, &Map::new(), "ignored raw").unwrap();
        assert_eq!(bytes, b"{}");
    }

    #[test]
    fn xml_and_text_pass_raw_through() {
        let fields = Map::new();
        let raw = "<language>rust</language>";

        let xml = encode(ContentType::Xml, &fields, raw).unwrap();
        assert_eq!(xml, raw.as_bytes());

        let text = encode(ContentType::Text, &fields, "plain words").unwrap();
        assert_eq!(text, b"plain words");
    }

    #[test]
    fn form_renders_and_encodes_fields() {
        let mut fields = Map::new();
        fields.insert("name".to_owned(), json!("a b"));
        fields.insert("retries".to_owned(), json!(3));
        fields.insert("verbose".to_owned(), json!(true));

        let bytes = encode(ContentType::Form, &fields, "").unwrap();
        // serde_json::Map iterates in key order.
        assert_eq!(bytes, b"name=a+b&retries=3&verbose=true");
    }

    #[test]
    fn form_of_empty_fields_is_empty() {
        let bytes = encode(ContentType::Form, &Map::new(), "").unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn render_text_contract() {
        assert_eq!(render_text(&json!("verbatim")), "verbatim");
        assert_eq!(render_text(&json!(42)), "42");
        assert_eq!(render_text(&json!(1.5)), "1.5");
        assert_eq!(render_text(&json!(false)), "false");
        assert_eq!(render_text(&Value::Null), "");
        assert_eq!(render_text(&json!([1, 2])), "[1,2]");
        assert_eq!(render_text(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn record_flattens_with_lowercased_names() {
        #[derive(serde::Serialize)]
        struct Record {
            #[serde(rename = "Foo")]
            foo: &'static str,
            #[serde(rename = "Count")]
            count: u32,
        }

        let fields = fields_of(Payload::record(&Record {
            foo: "bar",
            count: 7,
        }));

        assert_eq!(fields.get("foo"), Some(&json!("bar")));
        // Record values are rendered as text during flattening.
        assert_eq!(fields.get("count"), Some(&json!("7")));
        assert!(!fields.contains_key("Foo"));
    }

    #[test]
    fn non_object_record_is_dropped() {
        let fields = fields_of(Payload::record(&"just a string"));
        assert!(fields.is_empty());

        let fields = fields_of(Payload::record(&17));
        assert!(fields.is_empty());
    }

    #[test]
    fn field_mapping_keeps_arbitrary_values() {
        let fields = fields_of(Payload::fields([("count", json!(7))]));
        // Unlike records, mapping values are not text-rendered.
        assert_eq!(fields.get("count"), Some(&json!(7)));
    }

    #[test]
    fn later_fields_override_earlier_ones() {
        let mut fields = Map::new();
        let mut raw = String::new();
        apply(Payload::fields([("k", "old")]), &mut fields, &mut raw);
        apply(Payload::fields([("k", "new")]), &mut fields, &mut raw);

        assert_eq!(fields.get("k"), Some(&json!("new")));
    }

    #[test]
    fn text_payload_converts_from_strings() {
        assert_eq!(
            Payload::from("raw"),
            Payload::Text("raw".to_owned())
        );
        assert_eq!(
            Payload::from(String::from("raw")),
            Payload::Text("raw".to_owned())
        );
        assert_eq!(Payload::text("raw"), Payload::Text("raw".to_owned()));
    }
}
