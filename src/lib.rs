//! Resume Parser Library
//!
//! Extracts contact and skill information from PDF resumes:
//! - document text, via PDFium with a pdf-extract fallback
//! - candidate name, email address and phone number
//! - up to ten recognized skill keywords
//! - page count

pub mod config;
pub mod error;
pub mod fields;
pub mod parser;
pub mod pdf;

pub use config::ParserConfig;
pub use error::{Error, Result};
pub use parser::{ExtractionResult, ResumeParser, NOT_FOUND, UNKNOWN_NAME};
pub use pdf::{FallbackExtractor, Strategy, TextProvider};
