// Message domain model - the records held by the in-memory store

//! # Message Models
//!
//! This module defines the core types for the message store:
//! - `Message`: a stored record with a generated id
//! - `MessageDraft`: the caller-supplied fields for create/update
//!
//! A `Message` lives only for the process lifetime. Ids are generated by the
//! storage layer at create time; callers never supply them.

use serde::{Deserialize, Serialize};

/// The caller-supplied half of a message
///
/// Both fields are optional, matching the GraphQL `MessageInput` type where
/// content and author are nullable. An update replaces the stored record
/// with exactly this shape, so omitting a field clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDraft {
    /// Optional message body
    pub content: Option<String>,

    /// Optional author name
    pub author: Option<String>,
}

/// A stored message
///
/// ## Rust Learning Notes:
///
/// ### Option<T> for Nullable Fields
/// Using `Option<String>` means a field can be `None` (absent) or
/// `Some(text)`. This maps directly onto nullable GraphQL fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Opaque identifier, unique within the store, generated at create time
    pub id: String,

    /// Optional message body
    pub content: Option<String>,

    /// Optional author name
    pub author: Option<String>,
}

impl Message {
    /// Build a message from an id and a draft
    pub fn new(id: impl Into<String>, draft: MessageDraft) -> Self {
        Self {
            id: id.into(),
            content: draft.content,
            author: draft.author,
        }
    }

    /// Replace the caller-supplied fields wholesale, keeping the id
    pub fn apply(&mut self, draft: MessageDraft) {
        self.content = draft.content;
        self.author = draft.author;
    }
}
