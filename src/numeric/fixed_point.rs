// ============================================================================
// Fixed-Point Rendering
// Round-half-up rendering of floats to an exact number of decimal places
// ============================================================================

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Render `value` rounded to exactly `places` decimal digits, using `.` as
/// the decimal point.
///
/// Rounding is half away from zero on the value's shortest decimal form, so
/// `1.005` renders as `"1.01"` at two places. Digits past the 28-place
/// scale of `rust_decimal::Decimal` are rounded on the decimal text directly.
/// Values outside the range of `Decimal` fall back to the standard float
/// formatter.
/// A result that rounds to zero never carries a minus sign.
///
/// # Example
/// ```
/// use number_display::numeric::to_fixed;
///
/// assert_eq!(to_fixed(1.234567, 2), "1.23");
/// assert_eq!(to_fixed(1.9, 0), "2");
/// assert_eq!(to_fixed(1.5, 3), "1.500");
/// ```
pub fn to_fixed(value: f64, places: u32) -> String {
    // f64 Display is the shortest round-trip form, never exponent notation
    let shortest = value.to_string();
    let frac_len = shortest.split_once('.').map_or(0, |(_, frac)| frac.len());
    if places > MAX_DECIMAL_SCALE || frac_len > MAX_DECIMAL_SCALE as usize {
        // Decimal would silently round the input to its maximum scale
        return round_text(&shortest, places);
    }

    match Decimal::from_str(&shortest) {
        Ok(decimal) => render_decimal(decimal, places),
        Err(_) => {
            tracing::trace!("value {} outside decimal range, using float rounding", value);
            format!("{:.*}", places as usize, value)
        },
    }
}

/// Largest scale `Decimal` can hold
const MAX_DECIMAL_SCALE: u32 = 28;

/// Round a plain decimal string half away from zero to `places` digits.
fn round_text(text: &str, places: u32) -> String {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
    let places = places as usize;

    // All kept digits as one run, the decimal point re-inserted at the end
    let mut kept: Vec<u8> = int_part.bytes().collect();
    kept.extend(frac_part.bytes().take(places));
    kept.resize(int_part.len() + places, b'0');

    if frac_part.as_bytes().get(places).is_some_and(|next| *next >= b'5') {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let int_len = kept.len() - places;
    let is_zero = kept.iter().all(|digit| *digit == b'0');

    let mut out = String::with_capacity(kept.len() + 2);
    if negative && !is_zero {
        out.push('-');
    }
    for (i, digit) in kept.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(*digit));
    }
    out
}

fn render_decimal(decimal: Decimal, places: u32) -> String {
    let rounded = decimal.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut out = String::with_capacity(int_part.len() + places as usize + 2);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(int_part);

    if places > 0 {
        out.push('.');
        out.push_str(frac_part);
        for _ in frac_part.len()..places as usize {
            out.push('0');
        }
    }

    out
}

/// Swap the internal `.` decimal point for the caller's delimiter.
#[inline]
pub fn with_delimiter(fixed: &str, delimiter: char) -> String {
    if delimiter == '.' {
        fixed.to_string()
    } else {
        fixed.replacen('.', &delimiter.to_string(), 1)
    }
}
