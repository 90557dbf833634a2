//! Settlement-notice field extraction module.

pub mod derive;
mod parser;
pub mod rules;

pub use derive::derive_fields;
pub use parser::ZofingenParser;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::record::ExtractedRecord;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for settlement-notice parsers.
pub trait SettlementParser {
    /// Parse a record from the document text and its file name.
    fn parse(&self, text: &str, file_name: &str) -> Result<ExtractedRecord>;

    /// Whether the caller should fill a missing check code from the file name.
    fn filename_fallback(&self) -> bool {
        true
    }
}

/// Known document layout families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutFamily {
    #[default]
    Zofingen,
}

impl LayoutFamily {
    /// Every supported layout.
    pub const ALL: [LayoutFamily; 1] = [LayoutFamily::Zofingen];

    /// Build the parser registered for this layout.
    pub fn parser(self, config: &ExtractionConfig) -> Box<dyn SettlementParser + Send + Sync> {
        match self {
            LayoutFamily::Zofingen => Box::new(ZofingenParser::from_config(config)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutFamily::Zofingen => "zofingen",
        }
    }
}

impl fmt::Display for LayoutFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutFamily {
    type Err = ExtractionError;

    fn from_str(s: &str) -> Result<Self> {
        LayoutFamily::ALL
            .into_iter()
            .find(|layout| layout.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ExtractionError::UnsupportedLayout(s.to_string()))
    }
}
