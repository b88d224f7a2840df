//! Classifier verdicts.

use serde::{Deserialize, Serialize};

/// Approved/rejected outcome of a critique plus the extracted feedback.
///
/// A verdict has no identity of its own; it is derived purely from the
/// critique text it classifies.
///
/// # Examples
///
/// ```
/// use fabula_core::Verdict;
///
/// let verdict = Verdict::rejected("Faltam critérios de aceitação");
/// assert!(!verdict.approved);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the critique approves the candidate
    pub approved: bool,
    /// Short excerpt of the critique backing the decision
    pub feedback: String,
}

impl Verdict {
    /// An approving verdict.
    pub fn approved(feedback: impl Into<String>) -> Self {
        Self {
            approved: true,
            feedback: feedback.into(),
        }
    }

    /// A rejecting verdict.
    pub fn rejected(feedback: impl Into<String>) -> Self {
        Self {
            approved: false,
            feedback: feedback.into(),
        }
    }
}
