//! Completion provider selection.

use serde::{Deserialize, Serialize};

/// The closed set of supported completion providers.
///
/// Selected once when a client is constructed, never per call.
///
/// # Examples
///
/// ```
/// use fabula_core::Provider;
/// use std::str::FromStr;
///
/// assert_eq!(Provider::from_str("zello").unwrap(), Provider::Zello);
/// assert_eq!(Provider::from_str("OpenAI").unwrap(), Provider::OpenAi);
/// assert_eq!(Provider::OpenAi.as_ref(), "openai");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Provider {
    /// Zello MIND chat-completions gateway
    #[default]
    #[display("zello")]
    Zello,
    /// OpenAI chat-completions API
    #[display("openai")]
    OpenAi,
}

impl Provider {
    /// Static name used in logs, metrics and results.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Zello => "zello",
            Provider::OpenAi => "openai",
        }
    }
}
