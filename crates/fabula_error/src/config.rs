//! Configuration loading errors.

/// Configuration failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A layer could not be read, merged or deserialized
    #[display("cannot load {}: {}", layer, reason)]
    Load {
        /// The layer or variable being applied
        layer: String,
        /// Underlying failure
        reason: String,
    },

    /// A loaded value breaks an invariant
    #[display("{} {}", key, reason)]
    Invalid {
        /// Dotted configuration key
        key: &'static str,
        /// The violated constraint
        reason: String,
    },
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use fabula_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::invalid("pipeline.max_attempts", "must be at least 1, got 0");
/// assert!(matches!(err.kind, ConfigErrorKind::Invalid { key: "pipeline.max_attempts", .. }));
/// assert!(err.to_string().contains("pipeline.max_attempts must be at least 1"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The specific failure
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new error at the caller's location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// A layer failed to load.
    #[track_caller]
    pub fn load(layer: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::new(ConfigErrorKind::Load {
            layer: layer.into(),
            reason: reason.to_string(),
        })
    }

    /// A value violates a constraint.
    #[track_caller]
    pub fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Invalid {
            key,
            reason: reason.into(),
        })
    }
}
