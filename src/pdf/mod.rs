//! PDF processing layer
//!
//! Text extraction goes through a [`TextProvider`]: PDFium is tried first and
//! pdf-extract/lopdf take over whenever PDFium fails for any reason.

mod extractor;
mod fallback;
mod pdfium;
mod provider;

#[cfg(test)]
pub(crate) use extractor::mock;
pub use extractor::{ExtractedText, FallbackExtractor, Strategy};
pub use fallback::PdfExtractProvider;
pub use pdfium::PdfiumProvider;
pub use provider::TextProvider;
