// ============================================================================
// Numeric Literal
// Number-or-string input values and the helpers that interpret them
// ============================================================================

use super::errors::{FormatError, FormatResult};
use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value handed to the formatter: either a number or a numeric string.
///
/// Strings may already carry grouping separators (`"1,234.56"`). The literal
/// is kept exactly as supplied so it can be returned untouched as the
/// original value of a formatting result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum NumericLiteral {
    /// Floating-point number
    Number(f64),
    /// Numeric string, possibly grouped
    Text(String),
}

impl NumericLiteral {
    /// String form of the literal, rendered with `delimiter` as the decimal
    /// separator for numbers. Strings are returned as-is.
    ///
    /// Numbers never render in exponent notation: `1e-7` reads `"0.0000001"`.
    pub fn to_text(&self, delimiter: char) -> Cow<'_, str> {
        match self {
            NumericLiteral::Text(text) => Cow::Borrowed(text.as_str()),
            NumericLiteral::Number(value) => {
                let text = number_text(*value);
                if delimiter == '.' {
                    Cow::Owned(text)
                } else {
                    Cow::Owned(text.replace('.', &delimiter.to_string()))
                }
            },
        }
    }

    /// Check if the literal was supplied as a string.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, NumericLiteral::Text(_))
    }
}

/// Plain decimal rendering of an f64 (`-0` collapses to `0`).
fn number_text(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

impl fmt::Display for NumericLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text('.'))
    }
}

impl From<f64> for NumericLiteral {
    fn from(value: f64) -> Self {
        NumericLiteral::Number(value)
    }
}

impl From<i64> for NumericLiteral {
    fn from(value: i64) -> Self {
        NumericLiteral::Number(value as f64)
    }
}

impl From<i32> for NumericLiteral {
    fn from(value: i32) -> Self {
        NumericLiteral::Number(f64::from(value))
    }
}

impl From<u64> for NumericLiteral {
    fn from(value: u64) -> Self {
        NumericLiteral::Number(value as f64)
    }
}

impl From<u32> for NumericLiteral {
    fn from(value: u32) -> Self {
        NumericLiteral::Number(f64::from(value))
    }
}

impl From<&str> for NumericLiteral {
    fn from(value: &str) -> Self {
        NumericLiteral::Text(value.to_string())
    }
}

impl From<String> for NumericLiteral {
    fn from(value: String) -> Self {
        NumericLiteral::Text(value)
    }
}

impl From<&String> for NumericLiteral {
    fn from(value: &String) -> Self {
        NumericLiteral::Text(value.clone())
    }
}

// ============================================================================
// Parsing Helpers
// ============================================================================

/// Grouping separator that pairs with a decimal delimiter.
///
/// `,` groups digits unless it is itself the delimiter, in which case `.`
/// takes over.
#[inline]
pub const fn grouping_separator(delimiter: char) -> char {
    if delimiter == ',' {
        '.'
    } else {
        ','
    }
}

/// Parse a numeric string, stripping grouping separators.
///
/// # Errors
/// - `InvalidInput` if the string is empty or not a number
/// - `NonFinite` if it parses to NaN or infinity
pub fn parse_number(text: &str, delimiter: char) -> FormatResult<f64> {
    let separator = grouping_separator(delimiter);
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != separator)
        .map(|c| if c == delimiter { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return Err(FormatError::InvalidInput);
    }

    let value: f64 = cleaned.parse().map_err(|_| FormatError::InvalidInput)?;
    if !value.is_finite() {
        return Err(FormatError::NonFinite);
    }

    Ok(value)
}

/// Best-effort conversion of a literal to a finite f64.
pub fn to_number(literal: &NumericLiteral, delimiter: char) -> FormatResult<f64> {
    match literal {
        NumericLiteral::Number(value) if value.is_finite() => Ok(*value),
        NumericLiteral::Number(_) => Err(FormatError::NonFinite),
        NumericLiteral::Text(text) => parse_number(text, delimiter),
    }
}

/// True iff the literal is a finite real number.
#[inline]
pub fn is_number(literal: &NumericLiteral, delimiter: char) -> bool {
    to_number(literal, delimiter).is_ok()
}

/// Substring before the first `delimiter`, or `None` if it is absent.
#[inline]
pub fn head_string(text: &str, delimiter: char) -> Option<&str> {
    text.split_once(delimiter).map(|(head, _)| head)
}

/// Substring after the last `delimiter`, or `None` if it is absent.
#[inline]
pub fn last_string(text: &str, delimiter: char) -> Option<&str> {
    text.rsplit_once(delimiter).map(|(_, tail)| tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    #[test]
    fn test_number_text_is_plain_decimal() {
        assert_eq!(NumericLiteral::from(0.0000001).to_text('.'), "0.0000001");
        assert_eq!(NumericLiteral::from(5000.0).to_text('.'), "5000");
        assert_eq!(NumericLiteral::from(1.5).to_text(','), "1,5");
        assert_eq!(NumericLiteral::from(-0.0).to_text('.'), "0");
        assert_eq!(NumericLiteral::from(1e21).to_text('.'), "1000000000000000000000");
    }

    #[test]
    fn test_text_is_borrowed_verbatim() {
        let literal = NumericLiteral::from("1,234.50");
        assert!(literal.is_text());
        assert_eq!(literal.to_text(','), "1,234.50");
        assert_eq!(literal.to_string(), "1,234.50");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1,234.56", '.'), Ok(1234.56));
        assert_eq!(parse_number(" -42 ", '.'), Ok(-42.0));
        assert_eq!(parse_number("1.234,5", ','), Ok(1234.5));
        assert_eq!(parse_number("123.", '.'), Ok(123.0));
    }

    #[test]
    fn test_parse_number_invalid() {
        assert_eq!(parse_number("", '.'), Err(FormatError::InvalidInput));
        assert_eq!(parse_number("abc", '.'), Err(FormatError::InvalidInput));
        assert_eq!(parse_number("< 0.01", '.'), Err(FormatError::InvalidInput));
        assert_eq!(parse_number("inf", '.'), Err(FormatError::NonFinite));
        assert_eq!(parse_number("NaN", '.'), Err(FormatError::NonFinite));
    }

    #[test]
    fn test_is_number() {
        assert!(is_number(&NumericLiteral::from(12), '.'));
        assert!(is_number(&NumericLiteral::from("12,000.5"), '.'));
        assert!(!is_number(&NumericLiteral::from(f64::NAN), '.'));
        assert!(!is_number(&NumericLiteral::from("0xdeadbeef"), '.'));
    }

    #[test]
    fn test_slicing_helpers() {
        assert_eq!(head_string("12.34.56", '.'), Some("12"));
        assert_eq!(last_string("12.34.56", '.'), Some("56"));
        assert_eq!(last_string("123.", '.'), Some(""));
        assert_eq!(head_string("123", '.'), None);
        assert_eq!(last_string("123", '.'), None);
    }

    #[test]
    fn test_number_text_round_trips() {
        fn prop(value: f64) -> TestResult {
            if !value.is_finite() {
                return TestResult::discard();
            }
            let text = NumericLiteral::from(value).to_text('.').into_owned();
            TestResult::from_bool(!text.contains('e') && parse_number(&text, '.') == Ok(value))
        }
        quickcheck(prop as fn(f64) -> TestResult);
    }
}
