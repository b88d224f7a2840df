//! Report encoding errors.

/// A value could not be encoded as JSON.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: cannot encode {} ({}) at line {} in {}", subject, reason, line, file)]
pub struct JsonError {
    /// What was being encoded
    pub subject: &'static str,
    /// Serializer message
    pub reason: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Encoding `subject` failed with `reason`.
    #[track_caller]
    pub fn encode(subject: &'static str, reason: impl std::fmt::Display) -> Self {
        let location = std::panic::Location::caller();
        Self {
            subject,
            reason: reason.to_string(),
            line: location.line(),
            file: location.file(),
        }
    }
}
