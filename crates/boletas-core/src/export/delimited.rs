//! Delimited-text (CSV) export.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use super::{header_labels, Result};
use crate::error::ExportError;
use crate::models::config::ExportConfig;
use crate::models::record::{ExtractedRecord, Field};

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write a header line and one line per record.
///
/// Values containing the delimiter, a double quote or a line break are
/// quoted, with inner quotes doubled.
pub fn to_delimited(
    records: &[ExtractedRecord],
    columns: &[Field],
    options: &ExportConfig,
) -> Result<Vec<u8>> {
    let delimiter = u8::try_from(options.delimiter)
        .ok()
        .filter(|b| b.is_ascii())
        .ok_or(ExportError::Delimiter(options.delimiter))?;

    let mut out = Vec::new();
    if options.include_bom {
        out.extend_from_slice(BOM);
    }

    let mut wtr = WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    wtr.write_record(header_labels(columns, options.header_style))?;

    for record in records {
        wtr.write_record(columns.iter().map(|&field| record.get(field)))?;
    }

    wtr.flush()?;
    let data = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(data)
}
