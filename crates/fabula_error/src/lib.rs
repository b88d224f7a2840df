//! Error types for the fabula pipeline.
//!
//! This crate provides the error types shared by every fabula crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fabula_error::{FabulaResult, ProviderError, ProviderErrorKind};
//!
//! fn call_provider() -> FabulaResult<String> {
//!     Err(ProviderError::new(ProviderErrorKind::Timeout(
//!         "read timed out".to_string(),
//!     )))?
//! }
//!
//! match call_provider() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod json;
mod pipeline;
mod provider;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{FabulaError, FabulaErrorKind, FabulaResult};
pub use json::JsonError;
pub use pipeline::{PipelineError, PipelineErrorKind, PipelineResult};
pub use provider::{ProviderError, ProviderErrorKind, ProviderResult, RetryableError};
