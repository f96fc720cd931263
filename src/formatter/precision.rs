// ============================================================================
// Decimal Precision
// Choosing, applying and trimming the number of decimal digits shown
// ============================================================================

use crate::numeric::{last_string, to_fixed, to_number, with_delimiter, NumericLiteral};

/// Magnitude from which values are shown without decimals
pub const WHOLE_NUMBER_THRESHOLD: f64 = 1000.0;

/// Magnitude from which values are shown with two decimals
pub const TWO_DECIMAL_THRESHOLD: f64 = 1.01;

/// Default decimal budget for a magnitude: 0 from 1000, 2 from 1.01,
/// 6 below that.
#[inline]
pub fn classify_max_decimals(magnitude: f64) -> u32 {
    if magnitude >= WHOLE_NUMBER_THRESHOLD {
        0
    } else if magnitude >= TWO_DECIMAL_THRESHOLD {
        2
    } else {
        6
    }
}

/// Placeholder for a value too small to show at `max_decimals`:
/// `"< 0.01"` for 2, `"< 1"` for 0.
pub fn small_value_sentinel(max_decimals: u32, delimiter: char) -> String {
    if max_decimals == 0 {
        return "< 1".to_string();
    }

    let mut out = String::with_capacity(max_decimals as usize + 4);
    out.push_str("< 0");
    out.push(delimiter);
    for _ in 1..max_decimals {
        out.push('0');
    }
    out.push('1');
    out
}

/// Strip trailing zeros from a fixed-precision string.
///
/// Zeros are removed one at a time until the tail is exactly
/// `<delimiter>00`, which is kept. A bare trailing delimiter (or a lone
/// `<delimiter>0`) is then dropped. Strings without a delimiter are
/// returned unchanged.
///
/// # Example
/// ```
/// use number_display::formatter::trim_trailing_zeros;
///
/// assert_eq!(trim_trailing_zeros("1.500", '.'), "1.5");
/// assert_eq!(trim_trailing_zeros("2.000", '.'), "2.00");
/// assert_eq!(trim_trailing_zeros("2.0", '.'), "2");
/// ```
pub fn trim_trailing_zeros(fixed: &str, delimiter: char) -> String {
    let mut trimmed = fixed.to_string();
    if !trimmed.contains(delimiter) {
        return trimmed;
    }

    let floor: String = [delimiter, '0', '0'].iter().collect();
    while trimmed.ends_with('0') && !trimmed.ends_with(floor.as_str()) {
        trimmed.pop();
    }

    if trimmed.ends_with(delimiter) {
        trimmed.pop();
    } else if trimmed.ends_with(&floor[..floor.len() - 1]) {
        trimmed.truncate(trimmed.len() - floor.len() + 1);
    }

    trimmed
}

/// Smallest magnitude representable with `max_decimals` digits.
fn min_displayable(max_decimals: u32) -> f64 {
    // Parsing gives the correctly rounded double for 10^-n
    format!("1e-{}", max_decimals).parse().unwrap_or(0.0)
}

/// Reduce a value's decimal digits to its budget.
///
/// Returns `None` when the value should be left alone: it does not parse,
/// has no decimal part, or its decimal part already fits the budget.
/// Returns the small-value sentinel when a nonzero value is below the
/// smallest displayable step; otherwise the value rounded half-up to the
/// budget, trailing zeros trimmed, rendered with `delimiter`.
///
/// `max_decimals` overrides the magnitude-derived budget.
pub fn resolve_decimal_precision(
    value: &NumericLiteral,
    delimiter: char,
    max_decimals: Option<u32>,
) -> Option<String> {
    let parsed = match to_number(value, delimiter) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::trace!("leaving {} unrounded: {}", value, err);
            return None;
        },
    };

    let text = value.to_text(delimiter);
    let Some(decimal_part) = last_string(&text, delimiter) else {
        tracing::trace!("{} has no decimal part", value);
        return None;
    };

    let magnitude = parsed.abs();
    let effective = max_decimals.unwrap_or_else(|| classify_max_decimals(magnitude));

    if decimal_part.chars().count() <= effective as usize {
        tracing::trace!("{} already fits {} decimals", value, effective);
        return None;
    }

    if magnitude != 0.0 && magnitude < min_displayable(effective) {
        tracing::trace!("{} below display precision of {} decimals", value, effective);
        return Some(small_value_sentinel(effective, delimiter));
    }

    let fixed = with_delimiter(&to_fixed(parsed, effective), delimiter);
    Some(trim_trailing_zeros(&fixed, delimiter))
}
