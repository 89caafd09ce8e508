// Dicebox - Rust Edition
// A GraphQL server for dice rolling and an in-memory message store

//! # Dicebox Library
//!
//! This is the main library crate for Dicebox, a small GraphQL server that
//! exposes dice-rolling queries and CRUD mutations over an in-memory message
//! store. This file serves as the **library root** and defines the public API
//! that external crates (and the server binary) use.
//!
//! ## Core Components
//!
//! ### Domain Models
//! - [`Message`]: A stored message record (id, content, author)
//! - [`MessageDraft`]: The caller-supplied content/author pair for create/update
//! - [`RandomDie`]: A per-request die configured with a side count
//!
//! ### GraphQL Engine
//! The [`engine::graphql`] module defines the Query and Mutation roots and the
//! GraphQL representations of the domain models. The schema is built with
//! [`create_schema_with_storage`] so any [`MessageStorage`] backend can be
//! injected.
//!
//! ### Storage Layer
//! [`MessageStorage`] abstracts message persistence behind an async trait.
//! [`InMemoryStorage`] is the default backend: a lock-guarded map that lives
//! for the process lifetime only.
//!
//! ## Rust Learning Notes:
//!
//! ### Module System
//! Rust organizes code into modules. Each `mod` declaration tells Rust to
//! include code from either a `.rs` file or a directory with a `mod.rs` file.
//!
//! ### Re-exports
//! `pub use` statements create shortcuts so users don't need to know the
//! internal module structure. Instead of `use dicebox::models::message::Message`,
//! users can write `use dicebox::Message`.

// Core domain models (dice and messages)
pub mod models;

// Engine implementations (GraphQL schema, storage, dice logic)
pub mod engine;

// Server implementations
// This contains the HTTP server and GraphQL endpoint setup
pub mod server;

// Re-export core domain types for easy access
// This creates a "flat" API - users can import directly from the crate root
pub use models::{Message, MessageDraft, RandomDie, DEFAULT_SIDES};

// Re-export engine types for convenience
pub use engine::{
    dice::{quote_of_the_day, random_fraction, roll_dice, roll_three_dice},
    graphql::{
        create_schema, create_schema_with_storage, DiceboxSchema, MessageGQL, MessageInput,
        Mutation, Query,
    },
    storage::{InMemoryStorage, MessageStorage},
};

// Re-export server types for convenience
pub use server::graphql::{GraphQLServer, GraphQLServerBuilder, GraphQLServerConfig};

// Core error types
// Using the `thiserror` crate to make error handling easier
use thiserror::Error;

/// Custom error types for Dicebox operations
///
/// ## Rust Learning Notes:
///
/// ### Error Handling in Rust
/// Rust doesn't have exceptions. Instead, it uses `Result<T, E>` types where:
/// - `Ok(value)` represents success
/// - `Err(error)` represents failure
///
/// ### The `thiserror` Crate
/// - `#[derive(Error)]` implements the `std::error::Error` trait
/// - `#[error("...")]` provides human-readable error messages
/// - `{field}` in error messages allows string interpolation
#[derive(Error, Debug)]
pub enum DiceboxError {
    /// Error when a message cannot be found in the store
    /// Raised by lookups and updates on absent ids
    #[error("No message with that id: {id}")]
    MessageNotFound { id: String },

    /// Error when invalid input is provided
    /// e.g. a negative roll count or a negative side count
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for DiceboxError {
    fn from(err: std::io::Error) -> Self {
        DiceboxError::Internal(err.to_string())
    }
}

/// Type alias for Results that use our custom error type
///
/// Instead of writing `std::result::Result<Message, DiceboxError>` everywhere,
/// we can just write `Result<Message>`.
pub type Result<T> = std::result::Result<T, DiceboxError>;
