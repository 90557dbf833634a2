//! Document date extraction.

use super::patterns::{AUCTION_DATE, LABELED_DATE, PLAIN_DATE_LABEL, SETTLEMENT_DAY, TRAILING_VTO};
use super::{capture, first_match, PatternRule, RuleMatch};

/// Document date candidates in priority order.
pub const DOCUMENT_DATE_RULES: [PatternRule; 2] = [
    PatternRule::new("settlement_day", settlement_day),
    PatternRule::new("auction_result", auction_result),
];

fn settlement_day(text: &str) -> Option<String> {
    capture(&SETTLEMENT_DAY, text)
}

fn auction_result(text: &str) -> Option<String> {
    capture(&AUCTION_DATE, text)
}

/// Date of the settlement notice.
pub fn extract_document_date(text: &str) -> Option<RuleMatch> {
    first_match(text, &DOCUMENT_DATE_RULES)
}

/// Date taken from a `Fecha` label.
///
/// An explicit `Fecha de boleto` wins; otherwise the first plain `Fecha`
/// that is not part of a due-date (`Vto. Fecha ...`) annotation.
pub fn extract_labeled_date(text: &str) -> Option<String> {
    if let Some(date) = capture(&LABELED_DATE, text) {
        return Some(date);
    }

    for caps in PLAIN_DATE_LABEL.captures_iter(text) {
        let Some(full) = caps.get(0) else { continue };
        let mut from = full.start().saturating_sub(15);
        while !text.is_char_boundary(from) {
            from -= 1;
        }
        if !TRAILING_VTO.is_match(&text[from..full.start()]) {
            return Some(caps[1].to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_settlement_day() {
        let text = "Liquidación del día 12/01/2024\nResult.: Subasta 1,00@ 20/12/2023";
        let hit = extract_document_date(text).unwrap();
        assert_eq!(hit.rule, "settlement_day");
        assert_eq!(hit.raw, "12/01/2024");

        // without accents, as some renderers drop them
        let hit = extract_document_date("LIQUIDACION DEL DIA 03/04/2024").unwrap();
        assert_eq!(hit.raw, "03/04/2024");
    }

    #[test]
    fn test_auction_result_spans_lines() {
        let text = "Result.: Subasta 100.000.000,00@60%\nOperado el\n20/12/2023";
        let hit = extract_document_date(text).unwrap();
        assert_eq!(hit.rule, "auction_result");
        assert_eq!(hit.raw, "20/12/2023");
    }

    #[test]
    fn test_no_document_date() {
        assert_eq!(extract_document_date("Vto. 15/03/2024"), None);
    }

    #[test]
    fn test_explicit_label_beats_earlier_plain_fecha() {
        assert_eq!(
            extract_labeled_date("Fecha: 01/01/2024\nFecha de boleto: 05/01/2024"),
            Some("05/01/2024".to_string())
        );
        assert_eq!(
            extract_labeled_date("Vto. Fecha 30/06/2024\nFECHA DE BOLETO 07/01/2024"),
            Some("07/01/2024".to_string())
        );
    }

    #[test]
    fn test_plain_fecha_skips_due_dates() {
        assert_eq!(
            extract_labeled_date("Vto. Fecha 30/06/2024\nFecha: 02/01/2024"),
            Some("02/01/2024".to_string())
        );
        assert_eq!(extract_labeled_date("Vto. Fecha 30/06/2024"), None);
    }
}
