//! Error types for the resume parser

use thiserror::Error;

/// Result type alias for the resume parser
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the resume parser
#[derive(Error, Debug)]
pub enum Error {
    /// The PDFium library could not be bound
    #[error("PDFium library unavailable: {reason}")]
    PdfiumUnavailable { reason: String },

    /// PDFium error while opening or reading a document
    #[error("PDFium error: {reason}")]
    Pdfium { reason: String },

    /// Invalid PDF file (rejected by the structural parser)
    #[error("Invalid PDF file: {reason}")]
    InvalidPdf { reason: String },

    /// Text interpretation failed in the fallback extractor
    #[error("Text extraction failed: {reason}")]
    Extraction { reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error came from the primary (PDFium) provider.
    pub fn is_pdfium(&self) -> bool {
        matches!(self, Error::Pdfium { .. } | Error::PdfiumUnavailable { .. })
    }
}
