//! Errors raised while assembling messages, requests and workflow runs.

use derive_builder::UninitializedFieldError;

/// Why a builder refused to produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BuilderErrorKind {
    /// A required field was never set
    #[display("{} is required", _0)]
    MissingField(&'static str),

    /// A field was set to a value the type cannot hold
    #[display("{} is invalid: {}", field, reason)]
    InvalidField {
        /// Field name
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Builder error with location tracking.
///
/// Every `derive_builder` builder in fabula declares
/// `build_fn(error = "BuilderError")`, so unset fields arrive here through
/// the `UninitializedFieldError` conversion.
///
/// # Examples
///
/// ```
/// use fabula_error::{BuilderError, BuilderErrorKind};
///
/// let err = BuilderError::new(BuilderErrorKind::MissingField("source"));
/// assert_eq!(err.kind(), &BuilderErrorKind::MissingField("source"));
/// assert!(err.to_string().contains("source is required"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at line {} in {}", kind, line, file)]
pub struct BuilderError {
    kind: BuilderErrorKind,
    line: u32,
    file: &'static str,
}

impl BuilderError {
    /// Create a new builder error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BuilderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Reject `field` with a reason.
    #[track_caller]
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::new(BuilderErrorKind::InvalidField {
            field,
            reason: reason.into(),
        })
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BuilderErrorKind {
        &self.kind
    }
}

impl From<UninitializedFieldError> for BuilderError {
    #[track_caller]
    fn from(err: UninitializedFieldError) -> Self {
        Self::new(BuilderErrorKind::MissingField(err.field_name()))
    }
}
