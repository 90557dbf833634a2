//! Amount normalization for Argentine-formatted numbers (`1.234,56`).

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parse an amount written with period thousands separators and a comma
/// decimal separator.
///
/// Everything except digits, `.`, `,` and `-` is stripped first, so currency
/// codes and stray letters are tolerated. Returns `None` when nothing numeric
/// is left or the remainder is malformed (e.g. `1,2,3` or `--5`). Values
/// beyond 28 significant digits do not fit a `Decimal` and also yield `None`.
pub fn parse_locale_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    // Only the first comma becomes the decimal point; a second one makes the
    // value unparseable.
    let normalized = cleaned.replace('.', "").replacen(',', ".", 1);

    Decimal::from_str(&normalized).ok()
}

/// Render an amount with two decimals, comma separator and no grouping
/// (`-1234,50`). `None` renders as an empty string.
///
/// A negative amount keeps its sign even when it rounds to zero
/// (`-0,001` renders as `-0,00`).
pub fn format_locale_amount(value: Option<Decimal>) -> String {
    match value {
        Some(amount) => {
            let plain = format!("{:.2}", round_cents(amount).abs()).replace('.', ",");
            format!("{}{}", sign_of(amount), plain)
        }
        None => String::new(),
    }
}

/// Render an amount with period thousands groups (`-1.234.567,89`).
pub fn format_locale_amount_grouped(value: Option<Decimal>) -> String {
    let Some(amount) = value else {
        return String::new();
    };

    let rounded = round_cents(amount);
    let plain = format!("{:.2}", rounded.abs());
    let (integer_part, decimal_part) = plain.split_once('.').unwrap_or((&plain, "00"));

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    format!("{}{},{}", sign_of(amount), grouped, decimal_part)
}

fn sign_of(amount: Decimal) -> &'static str {
    if amount < Decimal::ZERO { "-" } else { "" }
}

fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_locale_amount() {
        assert_eq!(parse_locale_amount("1.234,56"), Some(dec("1234.56")));
        assert_eq!(parse_locale_amount("100.000.000"), Some(dec("100000000")));
        assert_eq!(parse_locale_amount("ARS 94.300.833,38"), Some(dec("94300833.38")));
        assert_eq!(parse_locale_amount("-123,45"), Some(dec("-123.45")));
        assert_eq!(parse_locale_amount("950,50"), Some(dec("950.50")));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_locale_amount(""), None);
        assert_eq!(parse_locale_amount("abc"), None);
        assert_eq!(None::<&str>.and_then(parse_locale_amount), None);
        assert_eq!(parse_locale_amount("--5"), None);
        assert_eq!(parse_locale_amount("1,234,56"), None);
        assert_eq!(parse_locale_amount("12-3"), None);
    }

    #[test]
    fn test_format_locale_amount() {
        assert_eq!(format_locale_amount(Some(dec("49.5"))), "49,50");
        assert_eq!(format_locale_amount(Some(dec("94300833.38"))), "94300833,38");
        assert_eq!(format_locale_amount(Some(dec("-1234.5"))), "-1234,50");
        assert_eq!(format_locale_amount(Some(dec("0.125"))), "0,13");
        assert_eq!(format_locale_amount(Some(dec("100000000"))), "100000000,00");
        assert_eq!(format_locale_amount(None), "");
    }

    #[test]
    fn test_negative_rounding_to_zero_keeps_sign() {
        assert_eq!(format_locale_amount(parse_locale_amount("-0,001")), "-0,00");
        assert_eq!(format_locale_amount(parse_locale_amount("0,001")), "0,00");
        assert_eq!(format_locale_amount(parse_locale_amount("-0")), "0,00");
        assert_eq!(format_locale_amount_grouped(Some(dec("-0.004"))), "-0,00");
    }

    #[test]
    fn test_parse_beyond_decimal_precision() {
        assert_eq!(parse_locale_amount(&"9".repeat(40)), None);
    }

    #[test]
    fn test_format_then_parse_is_stable() {
        for raw in ["1.000,00", "950,50", "-0,01", "94.559.585,49", "7"] {
            let formatted = format_locale_amount(parse_locale_amount(raw));
            let again = format_locale_amount(parse_locale_amount(&formatted));
            assert_eq!(formatted, again, "input {raw}");
        }
        assert_eq!(format_locale_amount(parse_locale_amount("1.000,00")), "1000,00");
        assert_eq!(format_locale_amount(parse_locale_amount("-0,01")), "-0,01");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_locale_amount_grouped(Some(dec("1234567.891"))), "1.234.567,89");
        assert_eq!(format_locale_amount_grouped(Some(dec("-950.5"))), "-950,50");
        assert_eq!(format_locale_amount_grouped(Some(dec("1000"))), "1.000,00");
        assert_eq!(format_locale_amount_grouped(None), "");
    }
}
