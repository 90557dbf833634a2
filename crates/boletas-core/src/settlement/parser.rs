//! ZOFINGEN settlement-notice parser.

use std::time::Instant;

use tracing::debug;

use crate::models::config::ExtractionConfig;
use crate::models::record::{ExtractedRecord, Field};

use super::derive::derive_fields;
use super::rules::{
    check_code_from_filename, extract_amount_before_fees, extract_amount_credited,
    extract_check_amount, extract_check_code, extract_document_date, extract_instrument,
    extract_labeled_date, format_locale_amount, parse_locale_amount,
};
use super::{Result, SettlementParser};

/// Rule-based parser for the ZOFINGEN layout.
pub struct ZofingenParser {
    /// Recover the check code from the file name.
    filename_fallback: bool,
    /// Try plain `Fecha` labels when both document-date rules miss.
    labeled_date_fallback: bool,
}

impl ZofingenParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            filename_fallback: true,
            labeled_date_fallback: false,
        }
    }

    /// Create a parser from extraction settings.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_filename_fallback(config.filename_fallback)
            .with_labeled_date_fallback(config.labeled_date_fallback)
    }

    /// Set file name fallback for the check code.
    pub fn with_filename_fallback(mut self, enabled: bool) -> Self {
        self.filename_fallback = enabled;
        self
    }

    /// Set the labeled document-date fallback.
    pub fn with_labeled_date_fallback(mut self, enabled: bool) -> Self {
        self.labeled_date_fallback = enabled;
        self
    }

    /// Run every field rule over `text` and derive the computed fields.
    pub fn extract(&self, text: &str, file_name: &str) -> ExtractedRecord {
        let start = Instant::now();
        let text = text.replace('\u{00A0}', " ");
        let mut record = ExtractedRecord::new();

        // Check code
        if let Some(code) = extract_check_code(&text) {
            record.set(Field::CheckCode, code);
        } else if self.filename_fallback {
            if let Some(code) = check_code_from_filename(file_name) {
                debug!("Check code recovered from file name {}", file_name);
                record.set(Field::CheckCode, code);
            }
        }

        // Check number and due date
        if let Some(instrument) = extract_instrument(&text) {
            if let Some(number) = instrument.number {
                record.set(Field::CheckNumber, number);
            }
            if let Some(due_date) = instrument.due_date {
                record.set(Field::DueDate, due_date);
            }
        }

        // Document date
        if let Some(hit) = extract_document_date(&text) {
            debug!("Document date from rule {}", hit.rule);
            record.set(Field::DocumentDate, hit.raw);
        } else if self.labeled_date_fallback {
            if let Some(date) = extract_labeled_date(&text) {
                debug!("Document date from label");
                record.set(Field::DocumentDate, date);
            }
        }

        // Amounts
        if let Some(hit) = extract_check_amount(&text) {
            debug!("Check amount from rule {}: {}", hit.rule, hit.raw);
            record.set(Field::CheckAmount, normalize(&hit.raw));
        }

        if let Some(raw) = extract_amount_credited(&text) {
            record.set(Field::AmountCredited, normalize(&raw));
        }

        if let Some(hit) = extract_amount_before_fees(&text) {
            debug!("Amount before fees from rule {}: {}", hit.rule, hit.raw);
            record.set(Field::AmountBeforeFees, normalize(&hit.raw));
        }

        derive_fields(&mut record);

        debug!(
            "Extracted {} in {}us",
            if record.is_empty(Field::CheckCode) { file_name } else { record.get(Field::CheckCode) },
            start.elapsed().as_micros()
        );

        record
    }
}

fn normalize(raw: &str) -> String {
    format_locale_amount(parse_locale_amount(raw))
}

impl Default for ZofingenParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SettlementParser for ZofingenParser {
    fn parse(&self, text: &str, file_name: &str) -> Result<ExtractedRecord> {
        Ok(self.extract(text, file_name))
    }

    fn filename_fallback(&self) -> bool {
        self.filename_fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NOTICE: &str = "ZOFINGEN S.A. Agente de Liquidación y Compensación\n\
        Boleto BOL 1234567890\n\
        Liquidación del día 12/01/2024\n\
        Especie E-CHEQ 778899 BANCO EMISOR Vto. 15/03/2024\n\
        Result.: Subasta 100.000.000,00@60%\n\
        U. de Tasa Importe\n\
        100.000.000 60% ARS 94.559.585,49 A\n\
        Arancel ARS 200.000,00\n\
        IVA ARS 58.752,11\n\
        Se acreditará la cantidad de ARS 94.300.833,38\n";

    #[test]
    fn test_parse_full_notice() {
        let record = ZofingenParser::new().extract(NOTICE, "print-BOL 1234567890.pdf");

        let values: Vec<&str> = record.iter().map(|(_, v)| v).collect();
        assert_eq!(
            values,
            vec![
                "E-CHEQ 778899",
                "15/03/2024",
                "100000000,00",
                "94559585,49",
                "BOL 1234567890",
                "12/01/2024",
                "94300833,38",
                "5699166,62",
                "258752,11",
                "5440414,51",
            ]
        );
    }

    #[test]
    fn test_text_code_beats_filename() {
        let record = ZofingenParser::new().extract("BOL 1234567890", "print-BOL 9999999999.pdf");
        assert_eq!(record.get(Field::CheckCode), "BOL 1234567890");
    }

    #[test]
    fn test_filename_fallback() {
        let parser = ZofingenParser::new();
        let record = parser.extract("Liquidación sin código", "print-BOL 9876543210.pdf");
        assert_eq!(record.get(Field::CheckCode), "BOL 9876543210");

        let record = parser
            .with_filename_fallback(false)
            .extract("Liquidación sin código", "print-BOL 9876543210.pdf");
        assert_eq!(record.get(Field::CheckCode), "");
    }

    #[test]
    fn test_non_breaking_spaces() {
        let text = "BOL\u{00A0}1234567890\nSe\u{00A0}acreditará ARS\u{00A0}1.000,00";
        let record = ZofingenParser::new().extract(text, "x.pdf");
        assert_eq!(record.get(Field::CheckCode), "BOL 1234567890");
        assert_eq!(record.get(Field::AmountCredited), "1000,00");
    }

    #[test]
    fn test_empty_text_yields_empty_record() {
        let record = ZofingenParser::new().extract("", "notice.pdf");
        assert_eq!(record, ExtractedRecord::new());
    }

    #[test]
    fn test_unparseable_amount_leaves_field_empty() {
        let record = ZofingenParser::new().extract("Monto del cheque ...", "x.pdf");
        assert_eq!(record.get(Field::CheckAmount), "");
        assert_eq!(record.get(Field::CheckAmountDifference), "");
    }

    #[test]
    fn test_labeled_date_fallback() {
        let text = "Fecha de boleto: 05/01/2024";
        let parser = ZofingenParser::new();
        assert_eq!(parser.extract(text, "x.pdf").get(Field::DocumentDate), "");

        let parser = parser.with_labeled_date_fallback(true);
        assert_eq!(parser.extract(text, "x.pdf").get(Field::DocumentDate), "05/01/2024");
    }
}
