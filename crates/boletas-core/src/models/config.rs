//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::error::BoletasError;
use crate::settlement::LayoutFamily;

/// Main configuration for the boletas pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoletasConfig {
    /// PDF text extraction configuration.
    pub pdf: PdfConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// CSV/XLSX export configuration.
    pub export: ExportConfig,
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to read per document (0 = unlimited).
    pub max_pages: usize,

    /// Try an empty password on encrypted documents.
    pub decrypt_empty_password: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            max_pages: 0,
            decrypt_empty_password: true,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Layout family of the input documents.
    pub layout: LayoutFamily,

    /// Recover the check code from the file name when the text lacks it.
    pub filename_fallback: bool,

    /// Fall back to a plain `Fecha:` label for the document date.
    pub labeled_date_fallback: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            layout: LayoutFamily::Zofingen,
            filename_fallback: true,
            labeled_date_fallback: false,
        }
    }
}

/// Which set of column names to write in export headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderStyle {
    #[default]
    English,
    Spanish,
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Field separator for delimited text.
    pub delimiter: char,

    /// Prefix the delimited text with a UTF-8 byte order mark.
    pub include_bom: bool,

    /// Worksheet name in the XLSX container.
    pub sheet_name: String,

    /// Header labels.
    pub header_style: HeaderStyle,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delimiter: ';',
            include_bom: false,
            sheet_name: "Boletas".to_string(),
            header_style: HeaderStyle::English,
        }
    }
}

impl BoletasConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| BoletasError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| BoletasError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
