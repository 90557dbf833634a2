//! Check code, instrument number, due date and check amount.

use super::patterns::{
    AUCTION_AMOUNT, CHECK_AMOUNT_ECHEQ, CHECK_AMOUNT_LABEL, CHECK_AMOUNT_MONTO, CHECK_CODE,
    CHECK_CODE_FILENAME, ECHEQ_DUE_DATE, ECHEQ_LINE, ECHEQ_NUMBER, SIXTY_PERCENT_ROW,
};
use super::{capture, capture_with_currency, first_match, PatternRule, RuleMatch};

/// Check amount candidates in priority order.
pub const CHECK_AMOUNT_RULES: [PatternRule; 5] = [
    PatternRule::new("auction_result", auction_result),
    PatternRule::new("sixty_percent_row", sixty_percent_row),
    PatternRule::new("importe_del_cheque", importe_del_cheque),
    PatternRule::new("monto_del_cheque", monto_del_cheque),
    PatternRule::new("importe_echeq", importe_echeq),
];

fn auction_result(text: &str) -> Option<String> {
    capture(&AUCTION_AMOUNT, text)
}

fn sixty_percent_row(text: &str) -> Option<String> {
    capture(&SIXTY_PERCENT_ROW, text)
}

fn importe_del_cheque(text: &str) -> Option<String> {
    capture_with_currency(&CHECK_AMOUNT_LABEL, text)
}

fn monto_del_cheque(text: &str) -> Option<String> {
    capture_with_currency(&CHECK_AMOUNT_MONTO, text)
}

fn importe_echeq(text: &str) -> Option<String> {
    capture_with_currency(&CHECK_AMOUNT_ECHEQ, text)
}

/// Extract the settlement ticket code (`BOL` + 10 digits).
pub fn extract_check_code(text: &str) -> Option<String> {
    capture(&CHECK_CODE, text).map(|digits| format!("BOL {}", digits))
}

/// Recover the ticket code from a `print-BOL <10 digits>` file name.
pub fn check_code_from_filename(file_name: &str) -> Option<String> {
    capture(&CHECK_CODE_FILENAME, file_name).map(|digits| format!("BOL {}", digits))
}

/// Instrument number and due date read from a single E-CHEQ line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instrument {
    /// Token upper-cased plus digits, e.g. `E-CHEQ 4455`.
    pub number: Option<String>,
    /// `DD/MM/YYYY`.
    pub due_date: Option<String>,
}

/// Locate the line carrying both the instrument number and its due date.
///
/// Nothing is returned unless both appear on the same line.
pub fn extract_instrument(text: &str) -> Option<Instrument> {
    let line = capture(&ECHEQ_LINE, text)?;
    let line = line.trim();

    let number = ECHEQ_NUMBER
        .captures(line)
        .map(|caps| format!("{} {}", caps[1].to_uppercase(), &caps[2]));
    let due_date = capture(&ECHEQ_DUE_DATE, line);

    Some(Instrument { number, due_date })
}

/// Raw check amount from the first matching candidate pattern.
pub fn extract_check_amount(text: &str) -> Option<RuleMatch> {
    first_match(text, &CHECK_AMOUNT_RULES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_check_code() {
        assert_eq!(
            extract_check_code("Boleto BOL 1234567890 emitido"),
            Some("BOL 1234567890".to_string())
        );
        assert_eq!(extract_check_code("bol  0000000042"), Some("BOL 0000000042".to_string()));
        // eleven digits is not a code
        assert_eq!(extract_check_code("BOL 12345678901"), None);
        assert_eq!(extract_check_code("SIMBOL 1234567890"), None);
    }

    #[test]
    fn test_check_code_from_filename() {
        assert_eq!(
            check_code_from_filename("print-BOL 9876543210.pdf"),
            Some("BOL 9876543210".to_string())
        );
        assert_eq!(check_code_from_filename("liquidacion.pdf"), None);
    }

    #[test]
    fn test_extract_instrument() {
        let text = "Especie\nE-cheq 778899 Emisor SA Vto. 15/03/2024 Nominal\n";
        let instrument = extract_instrument(text).unwrap();
        assert_eq!(instrument.number.as_deref(), Some("E-CHEQ 778899"));
        assert_eq!(instrument.due_date.as_deref(), Some("15/03/2024"));

        let instrument = extract_instrument("ECHEQ 12 Vto 01/02/2025").unwrap();
        assert_eq!(instrument.number.as_deref(), Some("ECHEQ 12"));
        assert_eq!(instrument.due_date.as_deref(), Some("01/02/2025"));
    }

    #[test]
    fn test_instrument_requires_same_line() {
        let text = "E-CHEQ 778899 Emisor SA\nVto. 15/03/2024";
        assert_eq!(extract_instrument(text), None);
    }

    #[test]
    fn test_check_amount_priority() {
        let text = "Importe del cheque ARS 5.000,00\nResult.: Subasta 100.000.000,00@60%";
        let hit = extract_check_amount(text).unwrap();
        assert_eq!(hit.rule, "auction_result");
        assert_eq!(hit.raw, "100.000.000,00");
    }

    #[test]
    fn test_check_amount_sixty_percent_row() {
        let hit = extract_check_amount("Cheque 100.000.000 60% ARS 94.559.585,49 A").unwrap();
        assert_eq!(hit.rule, "sixty_percent_row");
        assert_eq!(hit.raw, "100.000.000");
    }

    #[test]
    fn test_check_amount_with_currency() {
        let hit = extract_check_amount("Importe del e-cheque: ARS 1.500,25").unwrap();
        assert_eq!(hit.rule, "importe_del_cheque");
        assert_eq!(hit.raw, "ARS 1.500,25");

        let hit = extract_check_amount("Monto del cheque 2.000,00").unwrap();
        assert_eq!(hit.rule, "monto_del_cheque");
        assert_eq!(hit.raw, "2.000,00");

        let hit = extract_check_amount("Importe ECHEQ USD 10,00").unwrap();
        assert_eq!(hit.rule, "importe_echeq");
        assert_eq!(hit.raw, "USD 10,00");
    }
}
