//! Generate-then-validate attempt records.

use crate::Verdict;
use serde::{Deserialize, Serialize};

/// One full generate + validate cycle.
///
/// Attempts are appended to the run's history and never mutated afterwards,
/// so the fields are only reachable through getters.
///
/// # Examples
///
/// ```
/// use fabula_core::{Attempt, Verdict};
///
/// let attempt = Attempt::new(1, "História 1", "Está aprovado.", Verdict::approved("aprovado."));
/// assert_eq!(*attempt.index(), 1);
/// assert_eq!(attempt.feedback(), "aprovado.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Attempt {
    /// 1-based position in the run
    index: usize,
    /// Content returned by the generation call
    generated_content: String,
    /// Raw critique returned by the validation call
    critique: String,
    /// Classifier output for the critique
    verdict: Verdict,
    /// Feedback excerpt carried into the next working text
    feedback: String,
}

impl Attempt {
    /// Record an attempt. The feedback excerpt is taken from the verdict.
    pub fn new(
        index: usize,
        generated_content: impl Into<String>,
        critique: impl Into<String>,
        verdict: Verdict,
    ) -> Self {
        let feedback = verdict.feedback.clone();
        Self {
            index,
            generated_content: generated_content.into(),
            critique: critique.into(),
            verdict,
            feedback,
        }
    }

    /// Whether this attempt's verdict approved the content.
    pub fn is_approved(&self) -> bool {
        self.verdict.approved
    }
}
