//! Rule-based field extractors for ZOFINGEN settlement notices.

pub mod amounts;
pub mod check;
pub mod credit;
pub mod dates;
pub mod patterns;

pub use amounts::{format_locale_amount, format_locale_amount_grouped, parse_locale_amount};
pub use check::{check_code_from_filename, extract_check_amount, extract_check_code, extract_instrument, Instrument};
pub use credit::{extract_amount_before_fees, extract_amount_credited};
pub use dates::{extract_document_date, extract_labeled_date};

use regex::Regex;

/// A pattern rule: a pure search over the text yielding the raw captured
/// substring, if any.
#[derive(Clone, Copy)]
pub struct PatternRule {
    /// Short name used in logs.
    pub name: &'static str,
    /// The search itself.
    pub apply: fn(&str) -> Option<String>,
}

impl PatternRule {
    pub const fn new(name: &'static str, apply: fn(&str) -> Option<String>) -> Self {
        Self { name, apply }
    }
}

impl std::fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PatternRule").field(&self.name).finish()
    }
}

/// The raw substring produced by the winning rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    /// Name of the rule that matched.
    pub rule: &'static str,
    /// Raw captured text, before normalization.
    pub raw: String,
}

/// Try `rules` in priority order and stop at the first one that matches.
pub fn first_match(text: &str, rules: &[PatternRule]) -> Option<RuleMatch> {
    rules.iter().find_map(|rule| {
        (rule.apply)(text).map(|raw| RuleMatch {
            rule: rule.name,
            raw,
        })
    })
}

/// First capture group of the first match of `re`.
pub(crate) fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Optional currency prefix (group 1) joined with the amount (group 2).
pub(crate) fn capture_with_currency(re: &Regex, text: &str) -> Option<String> {
    let caps = re.captures(text)?;
    let amount = caps.get(2)?.as_str();
    let currency = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    Some(format!("{}{}", currency, amount))
}
