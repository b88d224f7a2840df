//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, JsonError, PipelineError, ProviderError};

/// Every error condition a fabula crate can surface.
///
/// # Examples
///
/// ```
/// use fabula_error::{ConfigError, FabulaError};
///
/// let err: FabulaError = ConfigError::invalid("http.max_retries", "must be at least 1").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FabulaErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Completion provider error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Generation pipeline error
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// Fabula error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fabula_error::{FabulaErrorKind, FabulaResult, PipelineError, PipelineErrorKind};
///
/// fn run() -> FabulaResult<()> {
///     Err(PipelineError::new(PipelineErrorKind::InvalidMaxAttempts(0)))?
/// }
///
/// let err = run().unwrap_err();
/// assert!(matches!(err.kind(), FabulaErrorKind::Pipeline(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fabula Error: {}", _0)]
pub struct FabulaError(Box<FabulaErrorKind>);

impl FabulaError {
    /// Create a new error from a kind.
    pub fn new(kind: FabulaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FabulaErrorKind {
        &self.0
    }
}

impl<T> From<T> for FabulaError
where
    T: Into<FabulaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for fabula operations.
pub type FabulaResult<T> = std::result::Result<T, FabulaError>;
