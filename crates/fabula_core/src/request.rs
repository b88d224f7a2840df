//! Request types for chat completions.

use crate::Message;
use fabula_error::BuilderError;
use serde::{Deserialize, Serialize};

/// Call-level decoding constants.
///
/// These come from configuration and are never tuned per invocation.
///
/// # Examples
///
/// ```
/// use fabula_core::DecodingParams;
///
/// let params = DecodingParams::default();
/// assert_eq!(*params.model(), "gpt-4o-mini");
/// assert_eq!(*params.max_tokens(), 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct DecodingParams {
    /// Model identifier sent in the request body
    #[serde(default = "default_model")]
    model: String,
    /// Upper bound on generated tokens
    #[serde(default = "default_max_tokens")]
    max_tokens: u32,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    temperature: f32,
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for DecodingParams {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl DecodingParams {
    /// Create decoding parameters from explicit values.
    pub fn new(model: impl Into<String>, max_tokens: u32, temperature: f32) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            temperature,
        }
    }
}

/// Chat-completions request body.
///
/// Serializes to `{"messages": [...], "model": ..., "max_tokens": ...,
/// "temperature": ...}`.
///
/// # Examples
///
/// ```
/// use fabula_core::{CompletionRequest, DecodingParams, Message};
///
/// let request = CompletionRequest::new(
///     vec![Message::system("persona"), Message::user("prompt")],
///     &DecodingParams::default(),
/// );
///
/// let body = serde_json::to_value(&request).unwrap();
/// assert_eq!(body["messages"][0]["role"], "system");
/// assert_eq!(body["max_tokens"], 2000);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(
    setter(into),
    build_fn(error = "BuilderError", validate = "Self::validate")
)]
pub struct CompletionRequest {
    /// The ordered messages to send
    messages: Vec<Message>,
    /// Model identifier
    model: String,
    /// Maximum number of tokens to generate
    max_tokens: u32,
    /// Sampling temperature
    temperature: f32,
}

impl CompletionRequest {
    /// Build a request from messages and the configured decoding constants.
    pub fn new(messages: Vec<Message>, params: &DecodingParams) -> Self {
        Self {
            messages,
            model: params.model.clone(),
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        }
    }

    /// Creates a new request builder.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}

impl CompletionRequestBuilder {
    fn validate(&self) -> Result<(), BuilderError> {
        if self.messages.as_ref().is_some_and(Vec::is_empty) {
            return Err(BuilderError::invalid("messages", "at least one message is required"));
        }
        if self.temperature.is_some_and(|temperature| temperature < 0.0) {
            return Err(BuilderError::invalid("temperature", "must not be negative"));
        }
        Ok(())
    }
}
