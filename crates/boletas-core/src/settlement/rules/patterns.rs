//! Common regex patterns for ZOFINGEN settlement notices.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Settlement ticket code
    pub static ref CHECK_CODE: Regex = Regex::new(
        r"(?i)\bBOL\s+(\d{10})\b"
    ).unwrap();

    pub static ref CHECK_CODE_FILENAME: Regex = Regex::new(
        r"(?i)print-BOL\s+(\d{10})"
    ).unwrap();

    // Instrument line: "E-CHEQ 123456 ... Vto. 15/03/2024", kept on one line
    pub static ref ECHEQ_LINE: Regex = Regex::new(
        r"(?i)(E-?CHEQ\s+\d+[^\n]*?Vto\.?\s+\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref ECHEQ_NUMBER: Regex = Regex::new(
        r"(?i)(E-?CHEQ)\s+(\d+)"
    ).unwrap();

    pub static ref ECHEQ_DUE_DATE: Regex = Regex::new(
        r"(?i)Vto\.?\s+(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    // Document date
    pub static ref SETTLEMENT_DAY: Regex = Regex::new(
        r"(?i)Liquidaci[oó]n\s+del\s+d[ií]a\s+(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref AUCTION_DATE: Regex = Regex::new(
        r"(?i)Result\.:\s*Subasta[\s\S]*?(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref LABELED_DATE: Regex = Regex::new(
        r"(?i)Fecha\s+de\s+boleto[:\s]+(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref PLAIN_DATE_LABEL: Regex = Regex::new(
        r"(?i)Fecha[:\s]+(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref TRAILING_VTO: Regex = Regex::new(
        r"(?i)Vto\.?\s*$"
    ).unwrap();

    // Check amount candidates, in priority order
    pub static ref AUCTION_AMOUNT: Regex = Regex::new(
        r"(?i)Result\.:\s*Subasta\s+([\d.,]+)@"
    ).unwrap();

    pub static ref SIXTY_PERCENT_ROW: Regex = Regex::new(
        r"(?i)\b([\d.,]+)\s+60%\s+ARS\s+[\d.,]+"
    ).unwrap();

    pub static ref CHECK_AMOUNT_LABEL: Regex = Regex::new(
        r"(?i)Importe\s+del\s+(?:e-?cheque|cheque)[:\s]*([A-Z]{3}\s*)?([\d.,]+)"
    ).unwrap();

    pub static ref CHECK_AMOUNT_MONTO: Regex = Regex::new(
        r"(?i)Monto\s+del\s+cheque[:\s]*([A-Z]{3}\s*)?([\d.,]+)"
    ).unwrap();

    pub static ref CHECK_AMOUNT_ECHEQ: Regex = Regex::new(
        r"(?i)Importe\s+ECHEQ[:\s]*([A-Z]{3}\s*)?([\d.,]+)"
    ).unwrap();

    // Settlement row: "<nominal> <rate>% ARS <amount before fees>"
    pub static ref PERCENT_ROW: Regex = Regex::new(
        r"(?i)\b[\d.,]+\s+\d{1,3}%\s+ARS\s+([\d.,]+)"
    ).unwrap();

    // Scan window anchors for the before-fees fallback
    pub static ref RATE_TABLE_HEADER: Regex = Regex::new(
        r"(?i)U\.?\s*de\s*Tasa\s*Importe"
    ).unwrap();

    pub static ref SETTLEMENT_DAY_ANCHOR: Regex = Regex::new(
        r"(?i)Liquidaci[oó]n\s+del\s+d[ií]a"
    ).unwrap();

    pub static ref CREDIT_ANCHOR: Regex = Regex::new(
        r"(?i)Se\s+acreditar[áa]"
    ).unwrap();

    pub static ref ARS_AMOUNT: Regex = Regex::new(
        r"(?i)ARS\s+([\d.,]+)"
    ).unwrap();

    // "Se acreditará la cantidad de ARS 94.300.833,38"
    pub static ref AMOUNT_CREDITED: Regex = Regex::new(
        r"(?i)Se\s+acreditar[áa][\s\S]*?ARS\s+([\d.,]+)"
    ).unwrap();
}
