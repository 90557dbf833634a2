//! Core library for settlement-notice extraction.
//!
//! This crate provides:
//! - PDF text extraction (per page, via lopdf and pdf-extract)
//! - Field extraction for ZOFINGEN settlement notices (check code, E-CHEQ,
//!   dates, amounts)
//! - Derived differences between the extracted amounts
//! - Batch processing and CSV/XLSX export

pub mod batch;
pub mod error;
pub mod export;
pub mod models;
pub mod pdf;
pub mod settlement;

pub use batch::BatchProcessor;
pub use error::{BoletasError, Result};
pub use export::{to_delimited, to_xlsx};
pub use models::{BatchResult, BoletasConfig, ExtractedRecord, Field};
pub use pdf::{PdfTextSource, TextSource};
pub use settlement::rules::{format_locale_amount, parse_locale_amount};
pub use settlement::{LayoutFamily, SettlementParser, ZofingenParser};
