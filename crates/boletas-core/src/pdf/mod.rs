//! PDF text extraction module.

mod extractor;

pub use extractor::PdfTextSource;

use std::path::Path;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Source of recognized text for a document.
///
/// Implementations yield one string per page, in page order.
#[allow(async_fn_in_trait)]
pub trait TextSource {
    /// Read the document at `path` and return the text of each page.
    async fn page_texts(&self, path: &Path) -> crate::Result<Vec<String>>;
}

/// Join per-page text into a single blob, one newline between pages.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut text = String::new();
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(page.as_ref());
    }
    text
}
