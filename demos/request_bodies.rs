//! Example demonstrating the four body serialization strategies.
//!
//! This example shows how to:
//! - POST a structured record as JSON
//! - POST the same record as a URL-encoded form
//! - PUT a pre-formatted XML document verbatim
//! - PATCH a plain text payload
//! - See how field mappings differ from records
//!
//! Run with: `cargo run --example request_bodies`

use outbound::{ContentType, Payload};
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Serialize)]
struct Review {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Stars")]
    stars: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("outbound=debug,request_bodies=info")
        .init();

    let review = Review {
        title: "Worth reading".to_string(),
        stars: 5,
    };

    println!("=== JSON: record flattened into body fields ===");
    // Field names are lower-cased and values rendered as text, so the wire
    // body is {"stars":"5","title":"Worth reading"}.
    let response = outbound::post(
        "https://httpbin.org/post",
        ContentType::Json,
        Payload::record(&review),
    )
    .send()
    .await?;

    let echo: serde_json::Value = serde_json::from_slice(&response.body)?;
    println!("Server saw JSON: {}", echo["json"]);
    println!();

    println!("=== Form: same record, URL-encoded ===");
    let response = outbound::post(
        "https://httpbin.org/post",
        ContentType::Form,
        Payload::record(&review),
    )
    .send()
    .await?;

    let echo: serde_json::Value = serde_json::from_slice(&response.body)?;
    println!("Server saw form fields: {}", echo["form"]);
    println!();

    println!("=== XML: pre-formatted document, transmitted verbatim ===");
    let response = outbound::put(
        "https://httpbin.org/put",
        ContentType::Xml,
        "<review><title>Worth reading</title><stars>5</stars></review>",
    )
    .send()
    .await?;

    let echo: serde_json::Value = serde_json::from_slice(&response.body)?;
    println!("Server saw raw data: {}", echo["data"]);
    println!();

    println!("=== Text: plain payload ===");
    let response = outbound::patch(
        "https://httpbin.org/patch",
        ContentType::Text,
        "five stars, would request again",
    )
    .send()
    .await?;

    let echo: serde_json::Value = serde_json::from_slice(&response.body)?;
    println!("Server saw raw data: {}", echo["data"]);
    println!();

    println!("=== Field mappings keep their value types ===");
    // Unlike records, mapping values are not rendered to text, so numbers
    // stay numbers in the JSON body.
    let response = outbound::post(
        "https://httpbin.org/post",
        ContentType::Json,
        Payload::fields([("title", json!("Worth reading")), ("stars", json!(5))]),
    )
    .send()
    .await?;

    let echo: serde_json::Value = serde_json::from_slice(&response.body)?;
    println!("Server saw JSON: {}", echo["json"]);

    Ok(())
}
