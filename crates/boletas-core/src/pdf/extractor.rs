//! PDF text extraction using lopdf and pdf-extract.

use std::borrow::Cow;
use std::path::Path;

use lopdf::Document;
use tracing::{debug, trace};

use super::{Result, TextSource};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Reads page text from PDF files.
///
/// Pages are extracted one by one with lopdf; when that yields no text at
/// all the whole document is handed to pdf-extract and returned as a single
/// page.
#[derive(Debug, Clone)]
pub struct PdfTextSource {
    max_pages: usize,
    decrypt_empty_password: bool,
}

impl PdfTextSource {
    /// Create a text source with default settings.
    pub fn new() -> Self {
        Self::from_config(&PdfConfig::default())
    }

    /// Create a text source from PDF settings.
    pub fn from_config(config: &PdfConfig) -> Self {
        Self {
            max_pages: config.max_pages,
            decrypt_empty_password: config.decrypt_empty_password,
        }
    }

    /// Extract page text from an in-memory PDF.
    pub fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // pdf-extract needs the decrypted bytes
        let raw: Cow<'_, [u8]> = if doc.is_encrypted() {
            if !self.decrypt_empty_password || doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            Cow::Owned(decrypted)
        } else {
            Cow::Borrowed(data)
        };

        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        if page_numbers.is_empty() {
            return Err(PdfError::NoPages);
        }

        let limit = match self.max_pages {
            0 => page_numbers.len(),
            n => n.min(page_numbers.len()),
        };

        let mut pages = Vec::with_capacity(limit);
        for &number in &page_numbers[..limit] {
            match doc.extract_text(&[number]) {
                Ok(text) => pages.push(text),
                Err(e) => {
                    trace!("lopdf could not read page {}: {}", number, e);
                    pages.push(String::new());
                }
            }
        }

        if pages.iter().all(|p| p.trim().is_empty()) {
            debug!("No page text from lopdf, falling back to pdf-extract");
            let text = pdf_extract::extract_text_from_mem(&raw)
                .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
            return Ok(vec![text]);
        }

        debug!("Extracted text from {} of {} pages", pages.len(), page_numbers.len());
        Ok(pages)
    }
}

impl Default for PdfTextSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSource for PdfTextSource {
    async fn page_texts(&self, path: &Path) -> crate::Result<Vec<String>> {
        let data = tokio::fs::read(path).await?;

        // Parsing is CPU-bound and may panic on malformed font data.
        let source = self.clone();
        let pages = tokio::task::spawn_blocking(move || source.extract_pages(&data))
            .await
            .map_err(|e| PdfError::TextExtraction(format!("text extraction aborted: {}", e)))??;

        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoletasError;

    #[test]
    fn test_rejects_non_pdf() {
        let source = PdfTextSource::new();
        let err = source.extract_pages(b"not a pdf").unwrap_err();
        assert!(matches!(err, PdfError::Parse(_)));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = PdfTextSource::new();
        let err = source
            .page_texts(Path::new("/nonexistent/print-BOL 0000000000.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, BoletasError::Io(_)));
    }

    #[tokio::test]
    async fn test_unparseable_file_is_pdf_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("print-BOL 0000000000.pdf");
        std::fs::write(&path, b"%PDF-1.4 truncated").unwrap();

        let err = PdfTextSource::new().page_texts(&path).await.unwrap_err();
        assert!(matches!(err, BoletasError::Pdf(PdfError::Parse(_))));
    }
}
