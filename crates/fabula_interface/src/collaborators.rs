//! Contracts of the collaborators around the pipeline.
//!
//! Text extraction, document rendering and email delivery live outside the
//! core. Each reports a structured result instead of an error so the caller
//! can surface every stage's outcome uniformly.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output of a text extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Whether text was extracted
    pub success: bool,
    /// Extracted text (empty on failure)
    pub text: String,
    /// Failure description
    pub error: Option<String>,
}

impl ExtractionResult {
    /// Successful extraction.
    pub fn extracted(text: impl Into<String>) -> Self {
        Self {
            success: true,
            text: text.into(),
            error: None,
        }
    }

    /// Failed extraction.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            text: String::new(),
            error: Some(error.into()),
        }
    }
}

/// Output formats a renderer may produce.
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
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DocumentFormat {
    /// Portable Document Format
    #[display("pdf")]
    Pdf,
    /// Office Open XML document
    #[display("docx")]
    Docx,
    /// Markdown text
    #[display("markdown")]
    Markdown,
}

/// Output of a document render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderResult {
    /// Whether the document was written
    pub success: bool,
    /// Path of the rendered file
    pub file_path: Option<PathBuf>,
    /// Failure description
    pub error: Option<String>,
}

impl RenderResult {
    /// Successful render.
    pub fn rendered(file_path: impl Into<PathBuf>) -> Self {
        Self {
            success: true,
            file_path: Some(file_path.into()),
            error: None,
        }
    }

    /// Failed render.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            file_path: None,
            error: Some(error.into()),
        }
    }
}

/// Output of an email delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryResult {
    /// Whether the message was accepted for delivery
    pub success: bool,
    /// Failure description
    pub error: Option<String>,
}

impl DeliveryResult {
    /// Accepted for delivery.
    pub fn delivered() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// Delivery failed.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Extracts plain text from a file, document or recording.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract the text behind `source`.
    async fn extract_text(&self, source: &Path) -> ExtractionResult;
}

/// Renders final content to a document file.
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    /// Render `content` in `format`.
    async fn render_document(&self, content: &str, format: DocumentFormat) -> RenderResult;
}

/// Delivers final content by email.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send `body` to `recipients`, attaching the given files.
    async fn send_email(
        &self,
        recipients: &[String],
        subject: &str,
        body: &str,
        attachments: &[PathBuf],
    ) -> DeliveryResult;
}
