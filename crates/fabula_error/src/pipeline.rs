//! Generation pipeline errors.

use crate::ProviderErrorKind;

/// Pipeline-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PipelineErrorKind {
    /// Attempt ceiling below one
    #[display("max_attempts must be at least 1, got {}", _0)]
    InvalidMaxAttempts(usize),

    /// The generation completion call failed
    #[display("Generation failed: {}", _0)]
    Generation(ProviderErrorKind),

    /// The validation completion call failed, so no verdict exists
    #[display("Validation unavailable: {}", _0)]
    ValidationUnavailable(ProviderErrorKind),

    /// A single-pass task completion call failed
    #[display("Task failed: {}", _0)]
    Task(ProviderErrorKind),
}

impl PipelineErrorKind {
    /// The provider failure underneath this error, if any.
    pub fn provider_kind(&self) -> Option<&ProviderErrorKind> {
        match self {
            PipelineErrorKind::InvalidMaxAttempts(_) => None,
            PipelineErrorKind::Generation(kind)
            | PipelineErrorKind::ValidationUnavailable(kind)
            | PipelineErrorKind::Task(kind) => Some(kind),
        }
    }
}

/// Pipeline error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at {}:{}", kind, file, line)]
pub struct PipelineError {
    /// The specific error kind
    pub kind: PipelineErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new pipeline error.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PipelineErrorKind {
        &self.kind
    }
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
