//! Capability traits for completion providers and critique classifiers.

use async_trait::async_trait;
use fabula_core::{Message, Verdict};
use fabula_error::ProviderResult;
use std::sync::Arc;

/// Core trait every completion provider implements.
///
/// Exchanges an ordered message sequence for generated text. Retries and
/// backoff happen behind this call; a returned error is final.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Send `messages` and return the first choice's text.
    async fn complete(&self, messages: &[Message]) -> ProviderResult<String>;

    /// Provider name (e.g., "zello", "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier sent with each request.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: CompletionDriver + ?Sized> CompletionDriver for Arc<T> {
    async fn complete(&self, messages: &[Message]) -> ProviderResult<String> {
        (**self).complete(messages).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Turns a free-text critique into a verdict.
///
/// Implementations must be deterministic: the same critique always yields
/// the same verdict.
pub trait Classifier: Send + Sync {
    /// Classify `critique`. Never fails; any input yields a verdict.
    fn classify(&self, critique: &str) -> Verdict;
}
