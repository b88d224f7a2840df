//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Role of a message sent to the completion provider.
///
/// Every call sends exactly one `System` message followed by one `User`
/// message. Roles serialize lowercase, as the chat-completions wire format
/// expects.
///
/// # Examples
///
/// ```
/// use fabula_core::Role;
///
/// assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
/// assert_eq!(format!("{}", Role::User), "user");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Persona and ground rules
    #[display("system")]
    System,
    /// The rendered task prompt
    #[display("user")]
    User,
}
