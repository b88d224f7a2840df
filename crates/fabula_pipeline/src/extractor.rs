//! Plain-text extraction for `.txt` and `.md` sources.

use async_trait::async_trait;
use fabula_interface::{ExtractionResult, TextExtractor};
use std::path::Path;
use tracing::{debug, instrument};

/// Reads UTF-8 text and Markdown files.
///
/// PDF, DOCX and audio need external extractors.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    /// Extensions this extractor accepts, lower-case.
    pub const EXTENSIONS: &'static [&'static str] = &["txt", "md", "markdown"];

    /// Whether `source` has a supported extension.
    pub fn supports(source: &Path) -> bool {
        source
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                Self::EXTENSIONS
                    .iter()
                    .any(|supported| ext.eq_ignore_ascii_case(supported))
            })
    }
}

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    #[instrument(skip(self), fields(source = %source.display()))]
    async fn extract_text(&self, source: &Path) -> ExtractionResult {
        if !Self::supports(source) {
            return ExtractionResult::failed(format!(
                "Unsupported file type: {}",
                source.display()
            ));
        }

        match tokio::fs::read_to_string(source).await {
            Ok(text) if text.trim().is_empty() => {
                ExtractionResult::failed(format!("No text found in {}", source.display()))
            }
            Ok(text) => {
                debug!(chars = text.len(), "Extracted text");
                ExtractionResult::extracted(text)
            }
            Err(e) => ExtractionResult::failed(format!(
                "Failed to read {}: {}",
                source.display(),
                e
            )),
        }
    }
}
