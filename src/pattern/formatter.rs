// ============================================================================
// Pattern Formatter
// Default MagnitudeFormatter backed by NumberPattern
// ============================================================================

use super::number_pattern::NumberPattern;
use crate::interfaces::MagnitudeFormatter;
use crate::numeric::NumericLiteral;

/// Formatter that interprets numeral-style patterns such as `"0,0.[00]"`.
///
/// An unparseable pattern is logged and the value is rendered plainly.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternFormatter;

impl PatternFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl MagnitudeFormatter for PatternFormatter {
    fn format(&self, value: f64, pattern: &str, use_absolute_for_threshold: bool) -> String {
        match NumberPattern::parse(pattern) {
            Ok(parsed) => parsed.render(value, use_absolute_for_threshold),
            Err(err) => {
                tracing::warn!("{} {:?}, rendering {} unformatted", err, pattern, value);
                NumericLiteral::from(value).to_string()
            },
        }
    }

    fn name(&self) -> &str {
        "pattern"
    }
}
