//! Shared chat-completions HTTP transport.

use crate::{CompletionMetrics, parse_completion, with_retry};
use fabula_config::{HttpSettings, ProviderSettings};
use fabula_core::{CompletionRequest, DecodingParams, Message, Provider};
use fabula_error::{ProviderError, ProviderErrorKind, ProviderResult};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// How the credential is attached to each request.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthScheme {
    /// Credential sent verbatim in a named header
    Header {
        /// Header name
        name: &'static str,
        /// Credential
        value: String,
    },
    /// `Authorization: Bearer <token>`
    Bearer(String),
}

impl std::fmt::Debug for AuthScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthScheme::Header { name, .. } => write!(f, "Header({}: <redacted>)", name),
            AuthScheme::Bearer(_) => write!(f, "Bearer(<redacted>)"),
        }
    }
}

/// Posts chat-completions requests to one endpoint with bounded retries.
///
/// Timeouts and transport faults are retried, as are the statuses 408, 429,
/// 500, 502, 503 and 504. Any other non-success status fails immediately.
#[derive(Debug, Clone)]
pub struct ChatCompletionsTransport {
    http: Client,
    provider: Provider,
    endpoint: String,
    auth: AuthScheme,
    decoding: DecodingParams,
    schedule: Vec<Duration>,
}

impl ChatCompletionsTransport {
    /// Build a transport posting to `{base_url}{path}`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationMissing` if the provider has no base URL, or
    /// `Transport` if the HTTP client cannot be built.
    #[instrument(skip_all, fields(provider = %provider))]
    pub fn new(
        provider: Provider,
        path: &str,
        auth: AuthScheme,
        settings: &ProviderSettings,
        http: &HttpSettings,
        decoding: &DecodingParams,
    ) -> ProviderResult<Self> {
        let base_url = settings.endpoint_base().ok_or_else(|| {
            ProviderError::new(ProviderErrorKind::ConfigurationMissing(format!(
                "{} base URL not set",
                provider
            )))
        })?;
        let endpoint = format!("{}{}", base_url, path);

        let client = Client::builder()
            .connect_timeout(http.connect_timeout())
            .timeout(http.read_timeout())
            .build()
            .map_err(|e| {
                ProviderError::new(ProviderErrorKind::Transport(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        let schedule = crate::backoff_schedule(settings.base_delay(), *http.max_retries());
        debug!(endpoint = %endpoint, attempts = schedule.len() + 1, "Created chat-completions transport");

        Ok(Self {
            http: client,
            provider,
            endpoint,
            auth,
            decoding: decoding.clone(),
            schedule,
        })
    }

    /// Full endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Provider this transport talks to.
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Model identifier sent with each request.
    pub fn model(&self) -> &str {
        self.decoding.model()
    }

    /// Delays slept between attempts.
    pub fn schedule(&self) -> &[Duration] {
        &self.schedule
    }

    /// Send `messages` with retries and return the first choice's text.
    ///
    /// # Errors
    ///
    /// Returns `Unavailable` once transient failures exhaust the schedule,
    /// or the first permanent failure (`Status`, `Parse`).
    #[instrument(skip(self, messages), fields(provider = %self.provider, model = %self.decoding.model(), message_count = messages.len()))]
    pub async fn complete(&self, messages: &[Message]) -> ProviderResult<String> {
        let request = CompletionRequest::new(messages.to_vec(), &self.decoding);
        let start = Instant::now();
        let metrics = CompletionMetrics::get();

        let result = with_retry(self.provider.name(), self.schedule.clone(), || {
            self.send_once(&request)
        })
        .await;

        match &result {
            Ok(text) => {
                let duration = start.elapsed().as_secs_f64();
                metrics.record_request(self.provider.name(), self.model(), duration);
                debug!(chars = text.len(), duration_secs = duration, "Completion received");
            }
            Err(e) => metrics.record_error(self.provider.name(), self.model(), e.kind.label()),
        }

        result
    }

    async fn send_once(&self, request: &CompletionRequest) -> ProviderResult<String> {
        let builder = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json");
        let builder = match &self.auth {
            AuthScheme::Header { name, value } => builder.header(*name, value),
            AuthScheme::Bearer(token) => builder.bearer_auth(token),
        };

        let response = builder.json(request).send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::new(ProviderErrorKind::Status {
                status_code: status.as_u16(),
                message,
            }));
        }

        let body = response.text().await.map_err(transport_error)?;
        parse_completion(&body)
    }
}

fn transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::new(ProviderErrorKind::Timeout(e.to_string()))
    } else {
        ProviderError::new(ProviderErrorKind::Transport(e.to_string()))
    }
}
