use std::path::Path;

use crate::error::Result;

/// A PDF text extraction capability.
///
/// Implementors open the document at `path` themselves and must release every
/// handle they acquire before returning, on success and on error alike.
pub trait TextProvider: Send + Sync {
    /// Short identifier used in log output.
    fn name(&self) -> &'static str;

    /// Extract the text of every page, concatenated in document order.
    ///
    /// Pages without extractable text contribute an empty string.
    fn extract_text(&self, path: &Path) -> Result<String>;

    /// Count the pages of the document.
    fn page_count(&self, path: &Path) -> Result<usize>;
}
