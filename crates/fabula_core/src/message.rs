//! Message types sent to the completion provider.

use crate::Role;
use fabula_error::BuilderError;
use serde::{Deserialize, Serialize};

/// A role-tagged message, sent verbatim to the provider.
///
/// # Examples
///
/// ```
/// use fabula_core::{Message, MessageBuilder, Role};
///
/// let message = MessageBuilder::default()
///     .role(Role::User)
///     .content("Gere as histórias")
///     .build()
///     .unwrap();
///
/// assert_eq!(message, Message::user("Gere as histórias"));
///
/// let missing = MessageBuilder::default().content("sem papel").build();
/// assert!(missing.unwrap_err().to_string().contains("role is required"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into), build_fn(error = "BuilderError"))]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The message text
    pub content: String,
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}
