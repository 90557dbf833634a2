//! Derived amount fields.
//!
//! Each operand is re-parsed from the display string already stored in the
//! record, so the two-decimal rounding applied when formatting carries into
//! the next step exactly as it appears in the output.

use tracing::trace;

use crate::models::record::{ExtractedRecord, Field};

use super::rules::amounts::{format_locale_amount, parse_locale_amount};

/// `(target, minuend, subtrahend)` in evaluation order. Later steps may read
/// fields written by earlier ones.
pub const DERIVATIONS: [(Field, Field, Field); 3] = [
    (Field::CheckAmountDifference, Field::CheckAmount, Field::AmountCredited),
    (Field::BeforeCreditedDifference, Field::AmountBeforeFees, Field::AmountCredited),
    (Field::Remainder, Field::CheckAmountDifference, Field::BeforeCreditedDifference),
];

/// Fill the derived fields of `record`. A field whose operands do not both
/// parse stays empty; a field that already holds a value is left alone.
pub fn derive_fields(record: &mut ExtractedRecord) {
    for (target, minuend, subtrahend) in DERIVATIONS {
        let a = parse_locale_amount(record.get(minuend));
        let b = parse_locale_amount(record.get(subtrahend));

        let Some(difference) = a.zip(b).and_then(|(a, b)| a.checked_sub(b)) else {
            trace!("Skipping {:?}: operand missing", target);
            continue;
        };

        record.fill(target, format_locale_amount(Some(difference)));
    }
}
