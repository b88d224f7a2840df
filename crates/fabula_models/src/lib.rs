//! Completion provider clients for fabula.
//!
//! Every supported provider speaks the chat-completions wire format, so the
//! clients share one transport and differ only in endpoint path and
//! credential header.
//!
//! | Provider | Path | Credential |
//! |----------|------|------------|
//! | Zello MIND | `/api/v1/chat/completions` | `zello_mind_key` header |
//! | OpenAI | `/v1/chat/completions` | `Authorization: Bearer` |
//!
//! # Example
//!
//! ```no_run
//! use fabula_config::FabulaConfig;
//! use fabula_core::{Message, Provider};
//! use fabula_interface::CompletionDriver;
//! use fabula_models::CompletionClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FabulaConfig::load()?;
//! let client = CompletionClient::from_config(&config, Provider::Zello)?;
//! let text = client
//!     .complete(&[Message::system("persona"), Message::user("prompt")])
//!     .await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod dto;
mod metrics;
mod openai;
mod retry;
mod transport;
mod zello;

pub use client::CompletionClient;
pub use dto::{ChatChoice, ChatCompletionResponse, ChoiceMessage, parse_completion};
pub use metrics::CompletionMetrics;
pub use openai::{OPENAI_COMPLETIONS_PATH, OpenAiClient};
pub use retry::{backoff_schedule, with_retry};
pub use transport::{AuthScheme, ChatCompletionsTransport};
pub use zello::{ZELLO_AUTH_HEADER, ZELLO_COMPLETIONS_PATH, ZelloClient};
