//! Primary text provider backed by PDFium

use crate::error::{Error, Result};
use crate::pdf::TextProvider;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};

/// Bind PDFium, trying each directory in turn and then the system library.
///
/// A new instance is created on every call; PDFium is not thread-safe.
fn create_pdfium(library_dirs: &[PathBuf]) -> Result<Pdfium> {
    let bindings = library_dirs.iter().find_map(|dir| {
        let dir = dir.to_string_lossy();
        Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&*dir)).ok()
    });

    let bindings = match bindings {
        Some(bindings) => bindings,
        None => Pdfium::bind_to_system_library().map_err(|e| Error::PdfiumUnavailable {
            reason: format!("Failed to initialize PDFium: {}", e),
        })?,
    };

    Ok(Pdfium::new(bindings))
}

fn map_pdfium_error(err: PdfiumError) -> Error {
    Error::Pdfium {
        reason: format!("{}", err),
    }
}

/// Read the document bytes, rejecting anything without a PDF header.
fn read_pdf_bytes(path: &Path) -> Result<Vec<u8>> {
    let data = std::fs::read(path)?;
    if data.len() < 4 || &data[0..4] != b"%PDF" {
        return Err(Error::Pdfium {
            reason: "Not a valid PDF file".to_string(),
        });
    }
    Ok(data)
}

/// [`TextProvider`] that walks pages through PDFium and concatenates their text.
#[derive(Debug, Clone)]
pub struct PdfiumProvider {
    library_dirs: Vec<PathBuf>,
}

impl Default for PdfiumProvider {
    fn default() -> Self {
        Self::new(crate::ParserConfig::default().pdfium_library_dirs)
    }
}

impl PdfiumProvider {
    pub fn new(library_dirs: Vec<PathBuf>) -> Self {
        Self { library_dirs }
    }

    /// Directories searched for the PDFium library
    pub fn library_dirs(&self) -> &[PathBuf] {
        &self.library_dirs
    }
}

impl TextProvider for PdfiumProvider {
    fn name(&self) -> &'static str {
        "pdfium"
    }

    fn extract_text(&self, path: &Path) -> Result<String> {
        let data = read_pdf_bytes(path)?;
        let pdfium = create_pdfium(&self.library_dirs)?;
        let document = pdfium
            .load_pdf_from_byte_slice(&data, None)
            .map_err(map_pdfium_error)?;

        let pages = document.pages();
        let mut text = String::new();

        for index in 0..pages.len() {
            let page = pages.get(index).map_err(|e| Error::Pdfium {
                reason: format!("Failed to get page {}: {}", index + 1, e),
            })?;
            let page_text = page.text().map_err(map_pdfium_error)?;
            text.push_str(&page_text.all());
        }

        Ok(text)
    }

    fn page_count(&self, path: &Path) -> Result<usize> {
        let data = read_pdf_bytes(path)?;
        let pdfium = create_pdfium(&self.library_dirs)?;
        let document = pdfium
            .load_pdf_from_byte_slice(&data, None)
            .map_err(map_pdfium_error)?;

        Ok(document.pages().len() as usize)
    }
}
