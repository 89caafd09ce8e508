// Core domain models for Dicebox
// These are plain data structures with no knowledge of GraphQL or HTTP

//! # Domain Models Module
//!
//! This module contains the core domain models for Dicebox. They are kept
//! deliberately free of GraphQL types so the same logic can be exercised from
//! unit tests or any future transport layer.
//!
//! ## Rust Learning Notes:
//!
//! ### Module Organization
//! This `mod.rs` file serves as the **module root** for the `models`
//! directory. Each `pub mod` declaration pulls in a sibling `.rs` file as a
//! publicly accessible submodule.
//!
//! ### Re-exports for Clean APIs
//! The `pub use` statements at the bottom create a flat API. Users can import
//! `use dicebox::models::Message` instead of
//! `use dicebox::models::message::Message`.

// Declares the `message` submodule from `message.rs`
// Contains Message and MessageDraft - the stored record and its input shape
pub mod message;

// Declares the `dice` submodule from `dice.rs`
// Contains RandomDie - a per-request die with a configured side count
pub mod dice;

/// Re-export the message types
/// - Message: a stored record with a generated id
/// - MessageDraft: the caller-supplied content/author pair
pub use message::{Message, MessageDraft};

/// Re-export the die type and its side-count default
pub use dice::{RandomDie, DEFAULT_SIDES};
