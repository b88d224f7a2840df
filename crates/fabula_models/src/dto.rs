//! Chat-completions response data transfer objects.
//!
//! Parsing is permissive: a missing or null `choices` array, a missing message
//! or a null content all decode to an empty completion.

use derive_getters::Getters;
use fabula_error::{ProviderError, ProviderErrorKind, ProviderResult};
use serde::{Deserialize, Serialize};

/// Message inside a completion choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChoiceMessage {
    /// Generated text
    #[serde(default)]
    content: Option<String>,
}

/// One completion choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatChoice {
    /// The generated message
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

/// Chat-completions response body. Fields other than `choices` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatCompletionResponse {
    /// Completion choices, first one wins
    #[serde(default)]
    choices: Option<Vec<ChatChoice>>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, or an empty string.
    pub fn into_text(self) -> String {
        self.choices
            .into_iter()
            .flatten()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default()
    }
}

/// Extract the first choice's content from a raw response body.
///
/// # Errors
///
/// Returns a `Parse` error if the body is not a JSON object.
///
/// # Examples
///
/// ```
/// use fabula_models::parse_completion;
///
/// let body = r#"{"choices":[{"message":{"content":"Olá"}}]}"#;
/// assert_eq!(parse_completion(body).unwrap(), "Olá");
/// assert_eq!(parse_completion(r#"{"choices":[]}"#).unwrap(), "");
/// ```
pub fn parse_completion(body: &str) -> ProviderResult<String> {
    let response: ChatCompletionResponse = serde_json::from_str(body).map_err(|e| {
        ProviderError::new(ProviderErrorKind::Parse(format!(
            "Invalid chat-completions body: {}",
            e
        )))
    })?;
    Ok(response.into_text())
}
