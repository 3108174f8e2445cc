//! Secondary text provider backed by pdf-extract and lopdf

use crate::error::{Error, Result};
use crate::pdf::TextProvider;
use std::path::Path;

/// [`TextProvider`] that interprets page content streams directly.
///
/// Text is rendered by `pdf-extract` into its in-memory plain-text sink;
/// page enumeration goes through `lopdf`. Handles CID fonts and ToUnicode
/// CMaps, so it often succeeds where PDFium is missing or refuses a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractProvider;

impl PdfExtractProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TextProvider for PdfExtractProvider {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract_text(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)?;
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| Error::Extraction {
            reason: e.to_string(),
        })
    }

    fn page_count(&self, path: &Path) -> Result<usize> {
        let document = lopdf::Document::load(path).map_err(|e| Error::InvalidPdf {
            reason: e.to_string(),
        })?;
        Ok(document.get_pages().len())
    }
}
