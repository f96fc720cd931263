// ============================================================================
// Number Pattern
// Parsed form of a numeral-style format pattern and its renderer
// ============================================================================

use crate::numeric::{head_string, to_fixed, FormatError, FormatResult};
use std::str::FromStr;
use thousands::Separable;

/// Abbreviation units, ascending. Index 0 means "no abbreviation".
const UNITS: [(f64, &str); 5] = [
    (1.0, ""),
    (1e3, "k"),
    (1e6, "m"),
    (1e9, "b"),
    (1e12, "t"),
];

/// A parsed format pattern.
///
/// Supported syntax:
/// - `0` integer placeholder, `0,0` turns on thousands grouping
/// - `.00` fixed decimal digits, `.[00]` optional digits dropped when zero
/// - trailing `a` abbreviates with `k`/`m`/`b`/`t`; `" a"` adds a space
///
/// # Example
/// ```
/// use number_display::pattern::NumberPattern;
///
/// let pattern: NumberPattern = "0,0.[00]".parse().unwrap();
/// assert_eq!(pattern.render(1234.5, true), "1,234.5");
/// assert_eq!(pattern.render(1500.0, true), "1,500");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberPattern {
    /// Group integer digits in threes with `,`
    pub thousands: bool,
    /// Decimal digits always shown
    pub min_decimals: u32,
    /// Decimal digits shown at most (fixed plus optional)
    pub max_decimals: u32,
    /// Abbreviate by order of magnitude
    pub abbreviate: bool,
    /// Put a space between the number and its abbreviation suffix
    pub abbreviation_space: bool,
}

impl NumberPattern {
    /// Parse a pattern string.
    ///
    /// # Errors
    /// Returns `InvalidPattern` for anything outside the supported syntax.
    pub fn parse(pattern: &str) -> FormatResult<Self> {
        let trimmed = pattern.trim();

        let (body, abbreviate, abbreviation_space) = match trimmed.strip_suffix('a') {
            Some(rest) => (rest.trim_end(), true, rest.ends_with(' ')),
            None => (trimmed, false, false),
        };

        let (int_part, dec_part) = match body.split_once('.') {
            Some((int_part, dec_part)) => (int_part, Some(dec_part)),
            None => (body, None),
        };

        if !int_part.contains('0') || int_part.chars().any(|c| c != '0' && c != ',') {
            return Err(FormatError::InvalidPattern);
        }

        let (min_decimals, max_decimals) = match dec_part {
            Some(decimals) => parse_decimals(decimals)?,
            None => (0, 0),
        };

        Ok(Self {
            thousands: int_part.contains(','),
            min_decimals,
            max_decimals,
            abbreviate,
            abbreviation_space,
        })
    }

    /// Render `value` with this pattern.
    ///
    /// With `use_absolute_for_threshold` unset, negative values are never
    /// abbreviated.
    pub fn render(&self, value: f64, use_absolute_for_threshold: bool) -> String {
        let abbreviate = self.abbreviate && (use_absolute_for_threshold || value >= 0.0);
        let magnitude = value.abs();

        let mut unit = if abbreviate {
            UNITS
                .iter()
                .rposition(|(scale, _)| magnitude >= *scale)
                .unwrap_or(0)
        } else {
            0
        };

        let mut fixed = to_fixed(magnitude / UNITS[unit].0, self.max_decimals);

        // Rounding can carry the mantissa to 1000: move up a unit
        let int_len = head_string(&fixed, '.').unwrap_or(&fixed).len();
        if abbreviate && unit + 1 < UNITS.len() && int_len > 3 {
            unit += 1;
            fixed = to_fixed(magnitude / UNITS[unit].0, self.max_decimals);
        }

        let (int_digits, frac_digits) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let mut frac = frac_digits.to_string();
        while frac.len() > self.min_decimals as usize && frac.ends_with('0') {
            frac.pop();
        }

        let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 3);
        if value < 0.0 && int_digits.chars().chain(frac.chars()).any(|c| c != '0') {
            out.push('-');
        }
        if self.thousands {
            out.push_str(&group_thousands(int_digits));
        } else {
            out.push_str(int_digits);
        }
        if !frac.is_empty() {
            out.push('.');
            out.push_str(&frac);
        }

        let suffix = UNITS[unit].1;
        if !suffix.is_empty() {
            if self.abbreviation_space {
                out.push(' ');
            }
            out.push_str(suffix);
        }

        out
    }
}

impl FromStr for NumberPattern {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse the part after `.`: fixed zeros, then an optional `[0..]` group.
fn parse_decimals(decimals: &str) -> FormatResult<(u32, u32)> {
    let (fixed, optional) = match decimals.split_once('[') {
        Some((fixed, rest)) => (
            fixed,
            rest.strip_suffix(']').ok_or(FormatError::InvalidPattern)?,
        ),
        None => (decimals, ""),
    };

    let all_zeros = |s: &str| s.chars().all(|c| c == '0');
    if !all_zeros(fixed) || !all_zeros(optional) || fixed.len() + optional.len() == 0 {
        return Err(FormatError::InvalidPattern);
    }

    Ok((fixed.len() as u32, (fixed.len() + optional.len()) as u32))
}

/// Insert `,` between groups of three ASCII digits.
///
/// Works on the digit text, so integer parts wider than `u64` group too.
pub fn group_thousands(digits: &str) -> String {
    digits.separate_with_commas()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(pattern: &str, value: f64) -> String {
        NumberPattern::parse(pattern).unwrap().render(value, true)
    }

    #[test]
    fn test_parse_default_pattern() {
        let pattern = NumberPattern::parse("0,0.[00]").unwrap();
        assert!(pattern.thousands);
        assert_eq!(pattern.min_decimals, 0);
        assert_eq!(pattern.max_decimals, 2);
        assert!(!pattern.abbreviate);
    }

    #[test]
    fn test_parse_abbreviation() {
        let tight = NumberPattern::parse("0.0a").unwrap();
        assert!(tight.abbreviate);
        assert!(!tight.abbreviation_space);
        assert_eq!((tight.min_decimals, tight.max_decimals), (1, 1));

        let spaced = NumberPattern::parse("0.[0] a").unwrap();
        assert!(spaced.abbreviation_space);
        assert_eq!((spaced.min_decimals, spaced.max_decimals), (0, 1));
    }

    #[test]
    fn test_parse_invalid() {
        for pattern in ["", "a", "#,##0", "0.", "0.[00", "0.0[0]0", "0.x", ",."] {
            assert_eq!(
                NumberPattern::parse(pattern),
                Err(FormatError::InvalidPattern),
                "pattern {:?}",
                pattern
            );
        }
    }

    #[test]
    fn test_render_grouping() {
        assert_eq!(render("0,0.[00]", 1500.0), "1,500");
        assert_eq!(render("0,0.[00]", 1234.567), "1,234.57");
        assert_eq!(render("0,0.[00]", 1234567.8), "1,234,567.8");
        assert_eq!(render("0,0.[00]", -5000.0), "-5,000");
        assert_eq!(render("0,0.00", 1500.0), "1,500.00");
        assert_eq!(render("0,0", 1234.5), "1,235");
        assert_eq!(render("0.00", 1234.5), "1234.50");
    }

    #[test]
    fn test_render_abbreviation() {
        assert_eq!(render("0.0a", 1500.0), "1.5k");
        assert_eq!(render("0.0a", 2_500_000.0), "2.5m");
        assert_eq!(render("0.0a", 1_000_000_000.0), "1.0b");
        assert_eq!(render("0.0a", 3_200_000_000_000.0), "3.2t");
        assert_eq!(render("0.[0] a", 1_234_000.0), "1.2 m");
        assert_eq!(render("0a", 999.0), "999");
    }

    #[test]
    fn test_render_carries_into_next_unit() {
        assert_eq!(render("0a", 999_999.0), "1m");
        assert_eq!(render("0a", 999.9), "1k");
    }

    #[test]
    fn test_signed_threshold() {
        let pattern = NumberPattern::parse("0,0.0a").unwrap();
        assert_eq!(pattern.render(-2_500_000.0, true), "-2.5m");
        assert_eq!(pattern.render(-2_500_000.0, false), "-2,500,000.0");
        assert_eq!(pattern.render(2_500_000.0, false), "2.5m");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(render("0,0.00", -0.001), "0.00");
        assert_eq!(render("0,0.00", 0.5), "0.50");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(
            group_thousands("1000000000000000019884624838656"),
            "1,000,000,000,000,000,019,884,624,838,656"
        );
    }
}
