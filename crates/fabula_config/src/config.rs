//! Configuration structures and loaders.

use config::{Config, Environment, File, FileFormat};
use fabula_core::{DecodingParams, Provider};
use fabula_error::{ConfigError, FabulaError, FabulaResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../fabula.toml");

/// Endpoint, credential and backoff for one provider.
///
/// `Debug` redacts the credential so settings can be logged.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
pub struct ProviderSettings {
    /// Base URL; the provider path is appended to it
    #[serde(default)]
    base_url: Option<String>,

    /// API credential
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,

    /// Base delay of the exponential backoff, in milliseconds
    #[serde(default = "default_base_delay_ms")]
    base_delay_ms: u64,
}

fn default_base_delay_ms() -> u64 {
    2000
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_delay_ms", &self.base_delay_ms)
            .finish()
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            base_delay_ms: default_base_delay_ms(),
        }
    }
}

impl ProviderSettings {
    /// Create settings from explicit values.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        base_delay_ms: u64,
    ) -> Self {
        Self {
            base_url: Some(base_url.into()),
            api_key,
            base_delay_ms,
        }
    }

    /// The credential, ignoring blank values.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// The base URL without trailing slashes, ignoring blank values.
    pub fn endpoint_base(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
    }

    /// Backoff base delay.
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }
}

/// Settings for every supported provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct ProvidersConfig {
    /// Zello MIND gateway
    #[serde(default)]
    pub zello: ProviderSettings,

    /// OpenAI API
    #[serde(default)]
    pub openai: ProviderSettings,
}

/// Per-request HTTP behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
pub struct HttpSettings {
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    connect_timeout_secs: u64,

    /// Read timeout in seconds
    #[serde(default = "default_read_timeout_secs")]
    read_timeout_secs: u64,

    /// Total attempts per completion call, first try included
    #[serde(default = "default_max_retries")]
    max_retries: usize,
}

fn default_connect_timeout_secs() -> u64 {
    30
}

fn default_read_timeout_secs() -> u64 {
    60
}

fn default_max_retries() -> usize {
    3
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: default_read_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

impl HttpSettings {
    /// Create HTTP settings from explicit values.
    pub fn new(connect_timeout_secs: u64, read_timeout_secs: u64, max_retries: usize) -> Self {
        Self {
            connect_timeout_secs,
            read_timeout_secs,
            max_retries,
        }
    }

    /// Connect timeout.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Read timeout.
    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}

/// Auto-correction loop settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
pub struct PipelineSettings {
    /// Generate/validate cycles before giving up
    #[serde(default = "default_max_attempts")]
    max_attempts: usize,
}

fn default_max_attempts() -> usize {
    3
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
        }
    }
}

impl PipelineSettings {
    /// Create pipeline settings with an explicit attempt ceiling.
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }
}

/// Prompt template settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
pub struct PromptSettings {
    /// System the generated user stories are written for
    #[serde(default = "default_product_name")]
    product_name: String,
}

fn default_product_name() -> String {
    "ProgressoGov".to_string()
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            product_name: default_product_name(),
        }
    }
}

impl PromptSettings {
    /// Create prompt settings for a product.
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
        }
    }
}

/// Top-level fabula configuration.
///
/// # Example
///
/// ```no_run
/// use fabula_config::FabulaConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = FabulaConfig::load()?;
/// println!("max attempts: {}", config.pipeline.max_attempts());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct FabulaConfig {
    /// Provider used when none is requested explicitly
    #[serde(default)]
    pub default_provider: Provider,

    /// Provider endpoints and credentials
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Decoding constants sent with every request
    #[serde(default)]
    pub decoding: DecodingParams,

    /// HTTP timeouts and retry budget
    #[serde(default)]
    pub http: HttpSettings,

    /// Auto-correction loop settings
    #[serde(default)]
    pub pipeline: PipelineSettings,

    /// Prompt template settings
    #[serde(default)]
    pub prompts: PromptSettings,
}

impl FabulaConfig {
    /// Bundled defaults only, ignoring files and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled defaults fail to parse.
    pub fn bundled() -> FabulaResult<Self> {
        Self::from_builder(
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)),
        )
    }

    /// Load configuration from a specific file path, layered over the
    /// bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> FabulaResult<Self> {
        debug!("Loading configuration from file");

        Self::from_builder(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref())),
        )
    }

    /// Load configuration with every source layered by precedence.
    ///
    /// User config files are optional and skipped when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source fails to parse.
    #[instrument]
    pub fn load() -> FabulaResult<Self> {
        debug!("Loading configuration: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/fabula/fabula.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("fabula").required(false))
            .add_source(
                Environment::with_prefix("FABULA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        for (key, var) in [
            ("providers.zello.api_key", "ZELLO_API_KEY"),
            ("providers.zello.base_url", "ZELLO_BASE_URL"),
            ("providers.openai.api_key", "OPENAI_API_KEY"),
            ("providers.openai.base_url", "OPENAI_BASE_URL"),
        ] {
            builder = builder
                .set_override_option(key, std::env::var(var).ok())
                .map_err(|e| FabulaError::from(ConfigError::load(var, e)))?;
        }

        Self::from_builder(builder)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> FabulaResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| FabulaError::from(ConfigError::load("configuration sources", e)))?
            .try_deserialize()
            .map_err(|e| FabulaError::from(ConfigError::load("merged configuration", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Check the invariants no source may violate.
    ///
    /// Missing credentials are not an error here: they surface when a client
    /// for that provider is built, before any network call.
    ///
    /// # Errors
    ///
    /// Returns an error if an attempt budget is zero or the temperature is
    /// negative.
    pub fn validate(&self) -> FabulaResult<()> {
        if self.pipeline.max_attempts < 1 {
            return Err(ConfigError::invalid(
                "pipeline.max_attempts",
                format!("must be at least 1, got {}", self.pipeline.max_attempts),
            )
            .into());
        }
        if self.http.max_retries < 1 {
            return Err(ConfigError::invalid(
                "http.max_retries",
                format!("must be at least 1, got {}", self.http.max_retries),
            )
            .into());
        }
        if *self.decoding.temperature() < 0.0 {
            return Err(ConfigError::invalid(
                "decoding.temperature",
                format!("must not be negative, got {}", self.decoding.temperature()),
            )
            .into());
        }
        Ok(())
    }

    /// Settings for `provider`.
    pub fn provider(&self, provider: Provider) -> &ProviderSettings {
        match provider {
            Provider::Zello => &self.providers.zello,
            Provider::OpenAi => &self.providers.openai,
        }
    }

    /// Providers whose credential is absent.
    pub fn missing_credentials(&self) -> Vec<Provider> {
        [Provider::Zello, Provider::OpenAi]
            .into_iter()
            .filter(|provider| self.provider(*provider).credential().is_none())
            .collect()
    }
}
