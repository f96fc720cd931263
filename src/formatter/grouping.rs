// ============================================================================
// Grouping and Canonicalization
// Large-value pattern formatting and the cleaned original fallback
// ============================================================================

use crate::interfaces::MagnitudeFormatter;
use crate::numeric::{parse_number, NumericLiteral};
use std::borrow::Cow;

/// Magnitude from which values are handed to the magnitude formatter
pub const LARGE_MAGNITUDE: f64 = 1000.0;

/// Format a large value through `formatter`.
///
/// Returns `None` when there is no value, it does not parse, or its
/// magnitude is below `LARGE_MAGNITUDE`.
pub fn group_large_magnitude(
    value: Option<&str>,
    delimiter: char,
    format: &str,
    formatter: &dyn MagnitudeFormatter,
) -> Option<String> {
    let parsed = parse_number(value?, delimiter).ok()?;
    if parsed.abs() < LARGE_MAGNITUDE {
        return None;
    }
    Some(formatter.format(parsed, format, true))
}

/// String form of the original value with one redundant `<delimiter>0`
/// suffix removed (`"123.0"` -> `"123"`).
///
/// Only string inputs are touched; numbers render as-is.
pub fn canonicalize_original(value: &NumericLiteral, delimiter: char) -> Cow<'_, str> {
    match value {
        NumericLiteral::Text(text) => {
            let zero_decimal: String = [delimiter, '0'].iter().collect();
            match text.strip_suffix(zero_decimal.as_str()) {
                Some(stripped) => Cow::Borrowed(stripped),
                None => Cow::Borrowed(text.as_str()),
            }
        },
        NumericLiteral::Number(_) => value.to_text(delimiter),
    }
}
