//! Terminal results handed to the boundary.

use crate::{Attempt, Verdict};
use serde::{Deserialize, Serialize};

/// Why a run ended without usable content.
///
/// Lets the boundary map failures to status codes without parsing the error
/// string.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FailureKind {
    /// Credential or endpoint absent
    #[display("configuration missing")]
    ConfigurationMissing,
    /// Transient failures exhausted the retry budget
    #[display("provider unavailable")]
    ProviderUnavailable,
    /// Provider answered with a permanent error
    #[display("provider error")]
    ProviderError,
    /// The validation call failed, so no verdict was produced
    #[display("validation unavailable")]
    ValidationUnavailable,
    /// Every attempt was rejected
    #[display("attempts exhausted")]
    Exhausted,
}

/// Outcome of an auto-correction run.
///
/// Constructed once by the orchestrator and immutable afterwards. The attempt
/// history is always present, whatever the terminal state.
///
/// # Examples
///
/// ```
/// use fabula_core::{Attempt, GenerationResult, Verdict};
///
/// let attempts = vec![
///     Attempt::new(1, "v1", "Há problemas.", Verdict::rejected("problemas.")),
///     Attempt::new(2, "v2", "Está aprovado.", Verdict::approved("aprovado.")),
/// ];
/// let result = GenerationResult::approved("zello", attempts);
///
/// assert!(result.success());
/// assert_eq!(result.content(), Some("v2"));
/// assert!(result.auto_correction_used());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    success: bool,
    content: Option<String>,
    provider: String,
    attempts: Vec<Attempt>,
    auto_correction_used: bool,
    error: Option<String>,
    failure: Option<FailureKind>,
}

impl GenerationResult {
    /// The last attempt was approved.
    ///
    /// Content is taken from the last attempt; auto-correction was used when
    /// more than one attempt was needed.
    pub fn approved(provider: impl Into<String>, attempts: Vec<Attempt>) -> Self {
        let content = attempts
            .last()
            .map(|attempt| attempt.generated_content().clone());
        let auto_correction_used = attempts.len() > 1;
        Self {
            success: true,
            content,
            provider: provider.into(),
            attempts,
            auto_correction_used,
            error: None,
            failure: None,
        }
    }

    /// Every attempt was rejected.
    pub fn exhausted(provider: impl Into<String>, attempts: Vec<Attempt>) -> Self {
        let error = format!(
            "Could not produce approved content after {} attempts",
            attempts.len()
        );
        Self {
            success: false,
            content: None,
            provider: provider.into(),
            auto_correction_used: attempts.len() > 1,
            attempts,
            error: Some(error),
            failure: Some(FailureKind::Exhausted),
        }
    }

    /// A hard failure stopped the run before a verdict could be produced.
    ///
    /// Attempts completed before the failure are kept for audit.
    pub fn hard_failure(
        provider: impl Into<String>,
        attempts: Vec<Attempt>,
        failure: FailureKind,
        error: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            content: None,
            provider: provider.into(),
            auto_correction_used: !attempts.is_empty(),
            attempts,
            error: Some(error.into()),
            failure: Some(failure),
        }
    }

    /// Whether approved content was produced.
    pub fn success(&self) -> bool {
        self.success
    }

    /// The approved content, if any.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Name of the provider that served the run.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Every recorded attempt, in order.
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Whether feedback from an earlier attempt was folded into a retry.
    pub fn auto_correction_used(&self) -> bool {
        self.auto_correction_used
    }

    /// Human-readable failure description.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Failure classification.
    pub fn failure(&self) -> Option<FailureKind> {
        self.failure
    }

    /// Verdict of the last recorded attempt.
    pub fn final_verdict(&self) -> Option<&Verdict> {
        self.attempts.last().map(|attempt| attempt.verdict())
    }
}

/// Outcome of a single-pass task that is not validated (summaries and the
/// prompt catalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResult {
    success: bool,
    content: Option<String>,
    provider: String,
    error: Option<String>,
    failure: Option<FailureKind>,
}

impl TaskResult {
    /// The completion returned content.
    pub fn completed(provider: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            success: true,
            content: Some(content.into()),
            provider: provider.into(),
            error: None,
            failure: None,
        }
    }

    /// The completion failed.
    pub fn failed(
        provider: impl Into<String>,
        failure: FailureKind,
        error: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            content: None,
            provider: provider.into(),
            error: Some(error.into()),
            failure: Some(failure),
        }
    }

    /// Whether content was produced.
    pub fn success(&self) -> bool {
        self.success
    }

    /// The generated content, if any.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Name of the provider that served the task.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Human-readable failure description.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Failure classification.
    pub fn failure(&self) -> Option<FailureKind> {
        self.failure
    }
}
