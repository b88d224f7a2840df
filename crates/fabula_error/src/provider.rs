//! Completion provider errors and retry classification.

/// Completion provider error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// Credential or endpoint absent; detected before any network call
    #[display("Provider configuration missing: {}", _0)]
    ConfigurationMissing(String),
    /// Connect or read timeout
    #[display("Request timed out: {}", _0)]
    Timeout(String),
    /// Connection refused, reset, DNS failure or any other transport fault
    #[display("Transport error: {}", _0)]
    Transport(String),
    /// Provider answered with a non-success status code
    #[display("HTTP {} error: {}", status_code, message)]
    Status {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason phrase
        message: String,
    },
    /// Response body could not be decoded
    #[display("Failed to parse provider response: {}", _0)]
    Parse(String),
    /// Every attempt failed with a transient error
    #[display("Provider unavailable after {} attempts: {}", attempts, last_error)]
    Unavailable {
        /// Number of attempts made
        attempts: usize,
        /// Rendering of the last underlying error
        last_error: String,
    },
}

impl ProviderErrorKind {
    /// Check if this error type should be retried.
    ///
    /// Timeouts and transport faults are transient, as are the status codes
    /// 408, 429, 500, 502, 503 and 504. Every other status is permanent.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderErrorKind::Timeout(_) | ProviderErrorKind::Transport(_) => true,
            ProviderErrorKind::Status { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            _ => false,
        }
    }

    /// Short label used for metrics and log fields.
    pub fn label(&self) -> &'static str {
        match self {
            ProviderErrorKind::ConfigurationMissing(_) => "configuration_missing",
            ProviderErrorKind::Timeout(_) => "timeout",
            ProviderErrorKind::Transport(_) => "network",
            ProviderErrorKind::Status { status_code, .. } => match *status_code {
                429 => "rate_limit",
                401 | 403 => "auth",
                400..=499 => "invalid_request",
                _ => "server",
            },
            ProviderErrorKind::Parse(_) => "parse",
            ProviderErrorKind::Unavailable { .. } => "unavailable",
        }
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use fabula_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::ConfigurationMissing(
///     "ZELLO_API_KEY not set".to_string(),
/// ));
/// assert!(format!("{}", err).contains("ZELLO_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ProviderErrorKind {
        &self.kind
    }
}

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use fabula_error::{ProviderError, ProviderErrorKind, RetryableError};
///
/// let err = ProviderError::new(ProviderErrorKind::Status {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
/// assert!(err.is_retryable());
///
/// let err = ProviderError::new(ProviderErrorKind::Status {
///     status_code: 401,
///     message: "Unauthorized".to_string(),
/// });
/// assert!(!err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for ProviderError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
