// Dicebox - Main GraphQL Server
// Run with: cargo run --bin server

//! # Dicebox Main Server Binary
//!
//! This is the executable that starts the Dicebox HTTP server. It wires the
//! pieces together into a running GraphQL service:
//!
//! ```text
//! main() function
//!   ↓ builds
//! GraphQLServerBuilder
//!   ↓ creates
//! HTTP Server (Axum)
//!   ↓ serves
//! GraphQL Schema
//!   ↓ resolves via
//! Storage Layer (InMemoryStorage) + dice helpers
//! ```
//!
//! Once running, you can:
//! - Visit http://localhost:4000 for the GraphiQL interface
//! - Send GraphQL queries from any language
//! - Roll dice, fetch quotes, and create/read/update messages

use dicebox::GraphQLServerBuilder; // Import from our library crate
use dotenv::dotenv; // Environment variable loading
use std::env; // Environment variable access
use tracing::info; // For structured logging

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    // In production these would typically be set by the deployment system
    if let Err(e) = dotenv() {
        // Only warn if .env file is missing - it's optional
        eprintln!("Warning: Could not load .env file: {}", e);
    }

    // Initialize structured logging for the application
    tracing_subscriber::fmt::init();

    info!("🎲 Starting Dicebox Server...");
    info!("==============================");

    let server_port = env::var("SERVER_PORT")
        .unwrap_or_else(|_| "4000".to_string())
        .parse::<u16>()
        .unwrap_or(4000);

    info!("Server port: {}", server_port);

    GraphQLServerBuilder::new()
        .with_port(server_port)
        .build_and_run()
        .await?;

    // In practice the server runs indefinitely, so this line rarely executes
    Ok(())
}
