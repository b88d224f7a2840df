//! Fabula - user stories from raw requirements, validated by the model that
//! wrote them.
//!
//! Fabula turns meeting transcripts and requirement notes into agile user
//! stories. A generation call drafts the stories, a second call critiques
//! them, and a keyword classifier reads the critique. Rejected drafts are
//! regenerated with the critique folded back into the source text until the
//! draft is approved or the attempt budget runs out.
//!
//! # Quick Start
//!
//! ```no_run
//! use fabula::{AutoCorrectionOrchestrator, CompletionClient, FabulaConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FabulaConfig::load()?;
//!     let client = CompletionClient::from_default(&config)?;
//!     let orchestrator = AutoCorrectionOrchestrator::from_config(client, &config)?;
//!
//!     let result = orchestrator
//!         .run("O gestor precisa aprovar pedidos de compra.", None)
//!         .await;
//!     println!("{:?}", result.content());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `fabula_error` - Error types
//! - `fabula_core` - Messages, verdicts, attempt records and results
//! - `fabula_interface` - `CompletionDriver`, `Classifier` and collaborator traits
//! - `fabula_config` - Layered configuration
//! - `fabula_models` - Zello and OpenAI chat-completions clients
//! - `fabula_pipeline` - Prompts, classifier, orchestrator and workflow
//!
//! This crate re-exports everything for convenience and ships the `fabula`
//! binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;

pub use fabula_error::{
    BuilderError, BuilderErrorKind, ConfigError, ConfigErrorKind, FabulaError, FabulaErrorKind,
    FabulaResult, JsonError, PipelineError, PipelineErrorKind, PipelineResult, ProviderError,
    ProviderErrorKind, ProviderResult, RetryableError,
};

pub use fabula_core::{
    Attempt, CompletionRequest, CompletionRequestBuilder, DecodingParams, FailureKind,
    GenerationResult, Message, MessageBuilder, ObservabilityConfig, Provider, Role, TaskResult,
    Verdict, init_observability, init_observability_with_config,
};

pub use fabula_interface::{
    Classifier, CompletionDriver, DeliveryResult, DocumentFormat, DocumentRenderer, EmailSender,
    ExtractionResult, RenderResult, TextExtractor,
};

pub use fabula_config::{
    FabulaConfig, HttpSettings, PipelineSettings, PromptSettings, ProviderSettings,
    ProvidersConfig,
};

pub use fabula_models::{CompletionClient, OpenAiClient, ZelloClient};

pub use fabula_pipeline::{
    AutoCorrectionOrchestrator, Delivery, FEEDBACK_SEPARATOR, KeywordClassifier,
    PlainTextExtractor, PromptComposer, PromptKind, Workflow, WorkflowReport, WorkflowRequest,
    WorkflowTask,
};
