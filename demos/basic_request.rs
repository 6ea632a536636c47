//! Basic example demonstrating simple GET and POST requests.
//!
//! This example shows how to:
//! - Fire a GET request with query parameters and headers
//! - POST a JSON body built from key/value fields
//! - Access response status, headers, body, and timing
//!
//! Run with: `cargo run --example basic_request`

use outbound::{ContentType, Error, Payload};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("outbound=debug,basic_request=info")
        .init();

    println!("=== GET Request Example ===");
    // httpbin echoes the request back, so the body shows what was sent
    let response = outbound::get("https://httpbin.org/get")
        .query([("page", "1"), ("limit", "10")])
        .header("Accept", "application/json")
        .send()
        .await?;

    println!("Status code: {}", response.status);
    println!("Request latency: {:?}", response.latency);
    println!("Content-Type: {:?}", response.header("content-type"));
    println!("Echoed request:\n{}", response.text());
    println!();

    println!("=== POST Request Example ===");
    let response = outbound::post(
        "https://httpbin.org/post",
        ContentType::Json,
        Payload::fields([("title", "My New Post"), ("author", "alice")]),
    )
    .cookie("session", "abc123")
    .send()
    .await?;

    println!("Status code: {}", response.status);
    println!("Request latency: {:?}", response.latency);
    println!("Echoed request:\n{}", response.text());
    println!();

    println!("=== Response Metadata ===");
    println!("Raw body length: {} bytes", response.body.len());
    println!("Server header: {:?}", response.header("server"));

    Ok(())
}
