//! OpenAI chat-completions client.

use crate::{AuthScheme, ChatCompletionsTransport};
use async_trait::async_trait;
use fabula_config::{FabulaConfig, HttpSettings, ProviderSettings};
use fabula_core::{DecodingParams, Message, Provider};
use fabula_error::{ProviderError, ProviderErrorKind, ProviderResult};
use fabula_interface::CompletionDriver;
use tracing::instrument;

/// Chat-completions path on the OpenAI API.
pub const OPENAI_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// OpenAI completion client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    transport: ChatCompletionsTransport,
}

impl OpenAiClient {
    /// Create a client from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationMissing` if the credential or base URL is absent.
    #[instrument(skip_all)]
    pub fn new(
        settings: &ProviderSettings,
        http: &HttpSettings,
        decoding: &DecodingParams,
    ) -> ProviderResult<Self> {
        let api_key = settings.credential().ok_or_else(|| {
            ProviderError::new(ProviderErrorKind::ConfigurationMissing(
                "OPENAI_API_KEY not set".to_string(),
            ))
        })?;

        let transport = ChatCompletionsTransport::new(
            Provider::OpenAi,
            OPENAI_COMPLETIONS_PATH,
            AuthScheme::Bearer(api_key.to_string()),
            settings,
            http,
            decoding,
        )?;

        Ok(Self { transport })
    }

    /// Create a client from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationMissing` if the credential or base URL is absent.
    pub fn from_config(config: &FabulaConfig) -> ProviderResult<Self> {
        Self::new(&config.providers.openai, &config.http, &config.decoding)
    }

    /// The underlying transport.
    pub fn transport(&self) -> &ChatCompletionsTransport {
        &self.transport
    }
}

#[async_trait]
impl CompletionDriver for OpenAiClient {
    async fn complete(&self, messages: &[Message]) -> ProviderResult<String> {
        self.transport.complete(messages).await
    }

    fn provider_name(&self) -> &'static str {
        Provider::OpenAi.name()
    }

    fn model_name(&self) -> &str {
        self.transport.model()
    }
}
