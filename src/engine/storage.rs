// Storage abstraction for the message store
// This defines the interface for persisting messages

//! # Storage Abstraction Layer
//!
//! This module provides a storage abstraction that lets the GraphQL engine
//! persist messages using different backends. The abstraction separates the
//! resolver logic from storage implementation details.
//!
//! ## Storage Architecture
//!
//! The storage layer follows the **Repository Pattern**:
//! - **MessageStorage trait**: Defines the interface for all storage operations
//! - **InMemoryStorage**: Default implementation for development/testing
//! - **Future implementations**: PostgreSQL, Redis, etc.
//!
//! ## Thread Safety
//!
//! The storage implementations must be thread-safe: axum serves requests on a
//! multithreaded runtime, so multiple async tasks can hit the store
//! concurrently. `InMemoryStorage` takes its lock for the whole
//! read-modify-write sequence of each operation, so the absence-check inside
//! `create_message` and `update_message` is atomic with the insert/replace
//! that follows it.
//!
//! ## Rust Learning Notes:
//!
//! ### Async Traits
//! Rust doesn't natively support async functions in trait objects yet.
//! The `async-trait` crate provides a macro to enable async trait methods.
//!
//! ### Trait Bounds
//! - `Send`: Type can be safely moved between threads
//! - `Sync`: Type can be safely shared between threads via references
//! These bounds are required for async trait objects.

use std::collections::HashMap; // Hash map for key-value storage

use rand::rngs::OsRng; // Cryptographically strong byte source for ids
use rand::RngCore;
use tracing::debug;

use crate::models::{Message, MessageDraft}; // Domain models
use crate::{DiceboxError, Result}; // Custom Result type with our error types

/// Number of random bytes in a message id (rendered as 20 hex characters)
const MESSAGE_ID_BYTES: usize = 10;

/// Storage trait for message persistence
///
/// This trait defines the interface that all storage backends must implement.
/// It covers the three operations the schema exposes: lookup, create, and
/// full-replace update. There is no delete and no expiry.
///
/// ## Design Principles
///
/// - **Async by Default**: All operations return futures so network-backed
///   implementations can slot in without changing the resolvers
/// - **Result-Based**: All operations can fail and return Result types
/// - **Thread-Safe**: Send + Sync bounds allow sharing across async tasks
#[async_trait::async_trait]
pub trait MessageStorage: Send + Sync {
    /// Get a message by id
    ///
    /// ## Return Value
    /// `Result<Option<Message>>` means:
    /// - `Ok(Some(message))`: Found the message
    /// - `Ok(None)`: No message with that id (not a storage failure - the
    ///   GraphQL layer decides how to surface it)
    /// - `Err(error)`: Operation failed (storage error, network issue, etc.)
    async fn get_message(&self, id: &str) -> Result<Option<Message>>;

    /// Create a new message from a draft
    ///
    /// The storage layer generates a fresh id that does not collide with any
    /// existing key, stores the draft under it, and returns the new message.
    async fn create_message(&self, draft: MessageDraft) -> Result<Message>;

    /// Replace an existing message's content/author wholesale
    ///
    /// The id stays fixed. Fails with [`DiceboxError::MessageNotFound`] when
    /// the id is absent, without creating an entry or mutating anything.
    async fn update_message(&self, id: &str, draft: MessageDraft) -> Result<Message>;
}

/// Generate a random message id: 20 lowercase hex characters
///
/// Drawn from the OS random source, the same construction as the original
/// API's ids. At 80 bits of entropy a collision is effectively impossible,
/// but `create_message` still re-draws on collision since the check is free
/// under the write lock it already holds.
fn generate_message_id() -> String {
    let mut bytes = [0u8; MESSAGE_ID_BYTES];
    OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// In-memory storage implementation for development and testing
///
/// This provides a simple in-memory implementation of the MessageStorage
/// trait. It's perfect for:
/// - Development and testing
/// - Demos and prototypes
/// - Single-process deployments
///
/// ## Limitations
///
/// - **Not persistent**: Data is lost when the process restarts
/// - **Not distributed**: Cannot share data across multiple processes
/// - **Unbounded**: No eviction, no size bound, no TTL
///
/// ## Rust Learning Notes:
///
/// ### Interior Mutability Pattern
/// Even though the struct field is not `mut`, we can still modify the data
/// inside through `RwLock`. Guards automatically unlock when dropped (RAII).
#[derive(Default)]
pub struct InMemoryStorage {
    /// Thread-safe storage for messages
    /// Key: message id (20 hex chars), Value: message
    messages: std::sync::RwLock<HashMap<String, Message>>,
}

#[async_trait::async_trait]
impl MessageStorage for InMemoryStorage {
    /// Retrieve a message by id
    async fn get_message(&self, id: &str) -> Result<Option<Message>> {
        // Read lock - allows multiple concurrent readers
        let messages = self.messages.read().unwrap();
        Ok(messages.get(id).cloned())
    }

    /// Generate an id and store a new message
    async fn create_message(&self, draft: MessageDraft) -> Result<Message> {
        // The write lock covers id generation, the collision check, and the
        // insert, so create is atomic relative to other operations
        let mut messages = self.messages.write().unwrap();

        let mut id = generate_message_id();
        while messages.contains_key(&id) {
            id = generate_message_id();
        }

        let message = Message::new(id.clone(), draft);
        messages.insert(id.clone(), message.clone());

        debug!("Created message {}", id);
        Ok(message)
    }

    /// Replace an existing message, failing without mutation when absent
    async fn update_message(&self, id: &str, draft: MessageDraft) -> Result<Message> {
        let mut messages = self.messages.write().unwrap();

        match messages.get_mut(id) {
            Some(message) => {
                message.apply(draft);
                debug!("Updated message {}", id);
                Ok(message.clone())
            }
            None => Err(DiceboxError::MessageNotFound { id: id.to_string() }),
        }
    }
}
