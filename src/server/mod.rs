// Dicebox server implementations
// This contains the HTTP server that exposes the GraphQL engine

//! # Dicebox Server Module
//!
//! This module contains the server implementation that exposes the Dicebox
//! engine to external clients. The server layer sits on top of the engine
//! layer and provides the network-accessible API.
//!
//! ## Server Architecture
//!
//! The server follows a **layered architecture**:
//! ```text
//! Client (Any Language)
//!        ↓ HTTP/GraphQL
//! Server Layer (this module) ← HTTP server, GraphQL endpoint
//!        ↓ Function calls
//! Engine Layer ← GraphQL schema, storage abstraction
//!        ↓ Function calls
//! Domain Layer ← Messages, dice
//! ```
//!
//! ## GraphQL Server (`graphql` module)
//! - HTTP server with GraphQL endpoint
//! - Built on the Axum web framework
//! - Provides a GraphiQL interface for development
//! - Handles CORS for browser access
//! - Integrates with any storage backend

/// GraphQL HTTP server implementation
///
/// Contains:
/// - Axum-based HTTP server
/// - GraphQL endpoint configuration
/// - CORS and middleware setup
/// - Builder pattern for server configuration
pub mod graphql;

/// Re-export GraphQL server types
///
/// These types enable HTTP server setup:
/// - GraphQLServer: The main server instance
/// - GraphQLServerConfig: Configuration options
/// - GraphQLServerBuilder: Builder pattern for easy setup
pub use graphql::{GraphQLServer, GraphQLServerBuilder, GraphQLServerConfig};
