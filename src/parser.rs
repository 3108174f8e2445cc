//! Resume parser: cached document text plus field assembly

use crate::config::ParserConfig;
use crate::error::Result;
use crate::fields;
use crate::pdf::{FallbackExtractor, Strategy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Used when the name extractor yields nothing.
pub const UNKNOWN_NAME: &str = "Unknown";
/// Used when no email or phone number is found.
pub const NOT_FOUND: &str = "Not found";

/// Fields extracted from a resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    /// At most ten title-cased skill keywords
    pub skills: Vec<String>,
    pub no_of_pages: usize,
}

/// Parser over a single PDF resume.
///
/// The document text is extracted once, at construction, and cached for the
/// lifetime of the parser. Page counting re-opens the document on every call.
pub struct ResumeParser {
    path: PathBuf,
    text: String,
    strategy: Strategy,
    extractor: FallbackExtractor,
}

impl ResumeParser {
    /// Open a resume with the default configuration
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, &ParserConfig::default())
    }

    /// Open a resume with a custom configuration
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: &ParserConfig) -> Result<Self> {
        Self::with_extractor(path, FallbackExtractor::from_config(config))
    }

    /// Open a resume using the given extractor.
    ///
    /// Fails only when both of the extractor's providers fail.
    pub fn with_extractor<P: AsRef<Path>>(path: P, extractor: FallbackExtractor) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let extracted = extractor.extract_text(&path)?;

        Ok(Self {
            path,
            text: extracted.text,
            strategy: extracted.strategy,
            extractor,
        })
    }

    /// Path of the source document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The cached document text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Which provider produced the cached text
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Count the document's pages.
    ///
    /// The count comes from a fresh open and may disagree with the pages that
    /// went into [`ResumeParser::text`] if the two used different providers.
    pub fn count_pages(&self) -> Result<usize> {
        self.extractor.count_pages(&self.path)
    }

    /// Run every field extractor and assemble the result.
    pub fn get_extracted_data(&self) -> Result<ExtractionResult> {
        let name = fields::extract_name(&self.text);
        let email = fields::extract_email(&self.text);
        let mobile = fields::extract_mobile(&self.text);
        let skills = fields::extract_skills(&self.text);
        let no_of_pages = self.count_pages()?;

        Ok(ExtractionResult {
            name: non_empty_or(Some(name), UNKNOWN_NAME),
            email: non_empty_or(email, NOT_FOUND),
            mobile_number: non_empty_or(mobile, NOT_FOUND),
            skills,
            no_of_pages,
        })
    }
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
