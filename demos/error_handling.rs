//! Example demonstrating error handling around `send`.
//!
//! This example shows how to:
//! - Treat non-2xx statuses as data instead of errors
//! - Catch request assembly failures before anything hits the network
//! - Distinguish dispatch failures from body-read failures
//! - Use the status()/headers() accessors on errors
//!
//! Run with: `cargo run --example error_handling`

use outbound::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("outbound=info")
        .init();

    println!("=== Example 1: Non-2xx Statuses Are Not Errors ===");
    let response = outbound::get("https://httpbin.org/status/404")
        .send()
        .await?;
    println!("Status: {}", response.status);
    println!("Is client error (4xx): {}", response.status.is_client_error());
    println!("Body length: {} bytes", response.body.len());
    println!();

    println!("=== Example 2: Invalid URL ===");
    match outbound::get("not a valid url").send().await {
        Ok(_) => println!("Unexpected success"),
        Err(Error::Url(e)) => {
            println!("URL rejected before dispatch!");
            println!("  Error: {e}");
        }
        Err(e) => println!("Other error: {e}"),
    }
    println!();

    println!("=== Example 3: Invalid Header Material ===");
    match outbound::get("https://httpbin.org/get")
        .header("X-Bad\nHeader", "value")
        .send()
        .await
    {
        Ok(_) => println!("Unexpected success"),
        Err(Error::Header { name, source }) => {
            println!("Header rejected before dispatch!");
            println!("  Name: {name:?}");
            println!("  Error: {source}");
        }
        Err(e) => println!("Other error: {e}"),
    }
    println!();

    println!("=== Example 4: Transport Failures ===");
    match outbound::get("https://this-domain-does-not-exist-12345.com/")
        .send()
        .await
    {
        Ok(_) => println!("Unexpected success"),
        Err(Error::Transport(e)) => {
            println!("Dispatch failed!");
            println!("  Error: {e}");
            println!("  Is timeout: {}", e.is_timeout());
            println!("  Is connect error: {}", e.is_connect());
        }
        Err(e) => println!("Other error: {e}"),
    }
    println!();

    println!("=== Example 5: Using Error Accessors ===");
    // A Read error carries the status and headers received before the body
    // failed; assembly and dispatch errors have neither.
    if let Err(error) = outbound::get("https://this-domain-does-not-exist-12345.com/")
        .send()
        .await
    {
        println!("Error occurred: {error}");
        match error.status() {
            Some(status) => println!("  HTTP status: {status}"),
            None => println!("  No response reached us (assembly or dispatch failure)"),
        }
        if let Some(headers) = error.headers() {
            println!("  Headers received: {}", headers.len());
        }
    }

    Ok(())
}
