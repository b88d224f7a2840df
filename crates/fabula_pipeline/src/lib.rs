//! Generation, validation and auto-correction pipeline.
//!
//! The pipeline renders prompts, asks a [`CompletionDriver`] for content,
//! asks it again to critique that content, classifies the critique and,
//! on rejection, folds the feedback into the working text and retries.
//!
//! # Example
//!
//! ```no_run
//! use fabula_config::FabulaConfig;
//! use fabula_models::CompletionClient;
//! use fabula_pipeline::AutoCorrectionOrchestrator;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FabulaConfig::load()?;
//! let client = CompletionClient::from_default(&config)?;
//! let orchestrator = AutoCorrectionOrchestrator::from_config(client, &config)?;
//!
//! let result = orchestrator.run("Transcrição da reunião...", None).await;
//! if let Some(content) = result.content() {
//!     println!("{}", content);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`CompletionDriver`]: fabula_interface::CompletionDriver

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classifier;
mod extractor;
mod orchestrator;
mod prompts;
mod workflow;

pub use classifier::{
    APPROVAL_KEYWORDS, FEEDBACK_FALLBACK_CHARS, IMPROVEMENT_INDICATORS, KeywordClassifier,
    NEGATIVE_PATTERNS, POSITIVE_PATTERNS, REJECTION_KEYWORDS,
};
pub use extractor::PlainTextExtractor;
pub use orchestrator::{AutoCorrectionOrchestrator, FEEDBACK_SEPARATOR};
pub use prompts::{PromptComposer, PromptKind};
pub use workflow::{
    Delivery, Workflow, WorkflowReport, WorkflowRequest, WorkflowRequestBuilder, WorkflowTask,
};
