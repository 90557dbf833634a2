//! Tabular export of batch results.
//!
//! Both writers take the records and the column order explicitly and return
//! the finished payload as bytes; writing it somewhere is up to the caller.

mod delimited;
mod xlsx;

pub use delimited::to_delimited;
pub use xlsx::to_xlsx;

use crate::models::config::HeaderStyle;
use crate::models::record::Field;

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, crate::error::ExportError>;

/// Header labels for `columns` in the requested style.
pub fn header_labels(columns: &[Field], style: HeaderStyle) -> Vec<&'static str> {
    columns
        .iter()
        .map(|field| match style {
            HeaderStyle::English => field.label(),
            HeaderStyle::Spanish => field.label_es(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_labels() {
        let columns = [Field::CheckCode, Field::Remainder];
        assert_eq!(header_labels(&columns, HeaderStyle::English), vec!["Check code", "Remainder"]);
        assert_eq!(
            header_labels(&columns, HeaderStyle::Spanish)[0],
            "Codigo de boleto"
        );
    }
}
