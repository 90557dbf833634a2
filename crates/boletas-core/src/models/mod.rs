//! Data models for settlement records and configuration.

pub mod config;
pub mod record;

pub use config::{BoletasConfig, ExportConfig, ExtractionConfig, HeaderStyle, PdfConfig};
pub use record::{BatchFailure, BatchResult, ExtractedRecord, Field, ERROR_MARKER};
