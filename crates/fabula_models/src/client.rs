//! Closed provider dispatch.

use crate::{OpenAiClient, ZelloClient};
use async_trait::async_trait;
use fabula_config::FabulaConfig;
use fabula_core::{Message, Provider};
use fabula_error::ProviderResult;
use fabula_interface::CompletionDriver;
use tracing::{debug, instrument};

/// A completion client for exactly one provider, chosen at construction.
#[derive(Debug, Clone)]
pub enum CompletionClient {
    /// Zello MIND gateway
    Zello(ZelloClient),
    /// OpenAI API
    OpenAi(OpenAiClient),
}

impl CompletionClient {
    /// Build the client for `provider` from configuration.
    ///
    /// Fails before any network call when the provider's credential or base
    /// URL is missing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationMissing` if the provider is not configured.
    #[instrument(skip(config))]
    pub fn from_config(config: &FabulaConfig, provider: Provider) -> ProviderResult<Self> {
        let client = match provider {
            Provider::Zello => CompletionClient::Zello(ZelloClient::from_config(config)?),
            Provider::OpenAi => CompletionClient::OpenAi(OpenAiClient::from_config(config)?),
        };
        debug!(provider = %provider, model = client.model_name(), "Completion client ready");
        Ok(client)
    }

    /// Build the client for the configured default provider.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationMissing` if the provider is not configured.
    pub fn from_default(config: &FabulaConfig) -> ProviderResult<Self> {
        Self::from_config(config, config.default_provider)
    }

    /// The provider behind this client.
    pub fn provider(&self) -> Provider {
        match self {
            CompletionClient::Zello(_) => Provider::Zello,
            CompletionClient::OpenAi(_) => Provider::OpenAi,
        }
    }
}

#[async_trait]
impl CompletionDriver for CompletionClient {
    async fn complete(&self, messages: &[Message]) -> ProviderResult<String> {
        match self {
            CompletionClient::Zello(client) => client.complete(messages).await,
            CompletionClient::OpenAi(client) => client.complete(messages).await,
        }
    }

    fn provider_name(&self) -> &'static str {
        self.provider().name()
    }

    fn model_name(&self) -> &str {
        match self {
            CompletionClient::Zello(client) => client.model_name(),
            CompletionClient::OpenAi(client) => client.model_name(),
        }
    }
}
