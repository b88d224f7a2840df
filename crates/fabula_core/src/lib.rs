//! Core data types for the fabula story generation pipeline.
//!
//! This crate provides the data model shared by the completion clients, the
//! classifier and the auto-correction orchestrator.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attempt;
mod message;
mod observability;
mod provider;
mod request;
mod result;
mod role;
mod verdict;

pub use attempt::Attempt;
pub use message::{Message, MessageBuilder};
pub use observability::{ObservabilityConfig, init_observability, init_observability_with_config};
pub use provider::Provider;
pub use request::{CompletionRequest, CompletionRequestBuilder, DecodingParams};
pub use result::{FailureKind, GenerationResult, TaskResult};
pub use role::Role;
pub use verdict::Verdict;
