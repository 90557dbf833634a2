//! Settlement amounts: amount before fees/VAT and amount credited.

use super::patterns::{
    AMOUNT_CREDITED, ARS_AMOUNT, CREDIT_ANCHOR, PERCENT_ROW, RATE_TABLE_HEADER,
    SETTLEMENT_DAY_ANCHOR,
};
use super::{capture, first_match, PatternRule, RuleMatch};

/// Amount-before-fees candidates in priority order.
pub const BEFORE_FEES_RULES: [PatternRule; 2] = [
    PatternRule::new("percent_row", percent_row),
    PatternRule::new("rate_table_window", rate_table_window),
];

fn percent_row(text: &str) -> Option<String> {
    capture(&PERCENT_ROW, text)
}

/// First `ARS <amount>` between the rate table header (or the settlement
/// day line) and the "Se acreditará" sentence.
///
/// An unrelated `ARS` amount inside the window is taken as well; the layout
/// gives nothing better to anchor on.
fn rate_table_window(text: &str) -> Option<String> {
    let start = RATE_TABLE_HEADER
        .find(text)
        .or_else(|| SETTLEMENT_DAY_ANCHOR.find(text))
        .map(|m| m.start());

    // An anchor at offset 0 counts as absent.
    let end = match CREDIT_ANCHOR.find(text) {
        Some(m) if m.start() > 0 => m.start(),
        _ => text.len(),
    };

    let window = match start {
        Some(start) if start <= end => &text[start..end],
        Some(_) => "",
        None => &text[..end],
    };

    capture(&ARS_AMOUNT, window)
}

/// Raw amount before fees and VAT.
pub fn extract_amount_before_fees(text: &str) -> Option<RuleMatch> {
    first_match(text, &BEFORE_FEES_RULES)
}

/// Raw amount credited ("Se acreditará ... ARS <amount>").
pub fn extract_amount_credited(text: &str) -> Option<String> {
    capture(&AMOUNT_CREDITED, text)
}
