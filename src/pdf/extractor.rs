//! Primary/secondary extraction with fallback

use crate::config::ParserConfig;
use crate::error::Result;
use crate::pdf::{PdfExtractProvider, PdfiumProvider, TextProvider};
use serde::Serialize;
use std::path::Path;

/// Which provider produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Primary,
    Secondary,
}

/// Document text together with the strategy that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub strategy: Strategy,
}

/// Runs the primary provider and, on any error from it, the secondary one.
///
/// A primary failure is never surfaced. A secondary failure is returned as is.
pub struct FallbackExtractor {
    primary: Box<dyn TextProvider>,
    secondary: Box<dyn TextProvider>,
}

impl Default for FallbackExtractor {
    fn default() -> Self {
        Self::from_config(&ParserConfig::default())
    }
}

impl FallbackExtractor {
    pub fn new(primary: Box<dyn TextProvider>, secondary: Box<dyn TextProvider>) -> Self {
        Self { primary, secondary }
    }

    /// PDFium first, pdf-extract second.
    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new(
            Box::new(PdfiumProvider::new(config.pdfium_library_dirs.clone())),
            Box::new(PdfExtractProvider::new()),
        )
    }

    /// Extract the full document text.
    pub fn extract_text(&self, path: &Path) -> Result<ExtractedText> {
        let (text, strategy) = match self.primary.extract_text(path) {
            Ok(text) => (text, Strategy::Primary),
            Err(e) => {
                tracing::debug!(
                    provider = self.primary.name(),
                    error = %e,
                    "primary text extraction failed, falling back to {}",
                    self.secondary.name()
                );
                (self.secondary.extract_text(path)?, Strategy::Secondary)
            }
        };

        tracing::debug!(
            path = %path.display(),
            ?strategy,
            chars = text.chars().count(),
            "extracted document text"
        );

        Ok(ExtractedText { text, strategy })
    }

    /// Count pages, independently of any earlier text extraction.
    pub fn count_pages(&self, path: &Path) -> Result<usize> {
        match self.primary.page_count(path) {
            Ok(count) => Ok(count),
            Err(e) => {
                tracing::debug!(
                    provider = self.primary.name(),
                    error = %e,
                    "primary page count failed, falling back to {}",
                    self.secondary.name()
                );
                self.secondary.page_count(path)
            }
        }
    }
}
