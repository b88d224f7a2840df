//! Trait definitions for the fabula pipeline.
//!
//! This crate provides the capability traits the orchestrator is written
//! against (`CompletionDriver`, `Classifier`) and the contracts of the
//! external collaborators it hands results to.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod collaborators;
mod traits;

pub use collaborators::{
    DeliveryResult, DocumentFormat, DocumentRenderer, EmailSender, ExtractionResult, RenderResult,
    TextExtractor,
};
pub use traits::{Classifier, CompletionDriver};
