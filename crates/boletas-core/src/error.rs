//! Error types for the boletas-core library.

use thiserror::Error;

/// Main error type for the boletas library.
#[derive(Error, Debug)]
pub enum BoletasError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Tabular export error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors raised by a settlement parser.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The requested layout family has no parser.
    #[error("no parser available for layout: {0}")]
    UnsupportedLayout(String),

    /// The parser rejected the document text.
    #[error("unreadable document {file}: {reason}")]
    Unreadable { file: String, reason: String },
}

/// Errors related to CSV and XLSX export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Delimited-text writer failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet container failure.
    #[error("XLSX container error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The configured delimiter cannot be written as a single byte.
    #[error("delimiter must be a single ASCII character, got {0:?}")]
    Delimiter(char),

    /// I/O error while assembling the payload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the boletas library.
pub type Result<T> = std::result::Result<T, BoletasError>;
