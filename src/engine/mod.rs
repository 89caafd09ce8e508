// Dicebox engine - GraphQL schema, storage abstraction, dice logic

//! # Engine Module
//!
//! This module contains the executable core of Dicebox, sitting between the
//! HTTP server layer and the domain models:
//!
//! ```text
//! Server Layer (axum HTTP)
//!        ↓ schema.execute()
//! Engine Layer (this module) ← GraphQL roots, storage abstraction, dice
//!        ↓ function calls
//! Domain Models ← Message, MessageDraft, RandomDie
//! ```
//!
//! ## Submodules
//!
//! - [`graphql`]: async-graphql Query/Mutation roots, GraphQL type wrappers,
//!   and schema construction helpers
//! - [`storage`]: the [`storage::MessageStorage`] trait and its in-memory
//!   implementation
//! - [`dice`]: free functions for the stateless dice/quote/random resolvers

/// GraphQL schema and resolver implementations
pub mod graphql;

/// Storage abstraction for the message store
pub mod storage;

/// Stateless dice-rolling helpers
pub mod dice;

// Re-export the main engine types for easy access
pub use graphql::{create_schema, create_schema_with_storage, DiceboxSchema};
pub use storage::{InMemoryStorage, MessageStorage};
