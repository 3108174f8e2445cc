//! Parser configuration

use std::path::PathBuf;

/// Configuration for the resume parser
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Directories searched for the PDFium dynamic library, in order,
    /// before falling back to the system library path
    pub pdfium_library_dirs: Vec<PathBuf>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            pdfium_library_dirs: vec![PathBuf::from("./"), PathBuf::from("/opt/pdfium/lib")],
        }
    }
}

impl ParserConfig {
    /// Append an extra PDFium search directory, searched after the existing ones.
    pub fn with_pdfium_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.pdfium_library_dirs.push(dir.into());
        self
    }
}
