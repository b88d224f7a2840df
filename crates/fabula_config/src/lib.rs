//! Layered configuration for fabula.
//!
//! Configuration is an explicit value built once at startup and handed to
//! constructors by reference. Sources, lowest precedence first:
//! - Bundled defaults (`include_str!` of `fabula.toml`)
//! - `~/.config/fabula/fabula.toml`
//! - `./fabula.toml`
//! - `FABULA__SECTION__KEY` environment variables
//! - `ZELLO_API_KEY`, `ZELLO_BASE_URL`, `OPENAI_API_KEY`, `OPENAI_BASE_URL`

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{
    FabulaConfig, HttpSettings, PipelineSettings, PromptSettings, ProviderSettings,
    ProvidersConfig,
};
