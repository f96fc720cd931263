// ============================================================================
// Number Processor
// Composes precision, grouping and canonicalization into one display value
// ============================================================================

use super::grouping::{canonicalize_original, group_large_magnitude};
use super::precision::resolve_decimal_precision;
use crate::domain::{FormatOptions, ProcessedValue};
use crate::interfaces::MagnitudeFormatter;
use crate::numeric::NumericLiteral;
use crate::pattern::PatternFormatter;
use std::sync::Arc;

/// Where the displayed text came from, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DisplaySource {
    /// Precision-resolved value, then pattern formatted
    GroupedDecimal,
    /// Precision-resolved value
    Decimal,
    /// Cleaned original, pattern formatted
    GroupedOriginal,
    /// Cleaned original as-is
    Original,
}

impl DisplaySource {
    fn as_str(self) -> &'static str {
        match self {
            DisplaySource::GroupedDecimal => "grouped_decimal",
            DisplaySource::Decimal => "decimal",
            DisplaySource::GroupedOriginal => "grouped_original",
            DisplaySource::Original => "original",
        }
    }
}

/// Format `value` for display with the default pattern formatter.
///
/// # Example
/// ```
/// use number_display::formatter::process_number_value;
/// use number_display::domain::FormatOptions;
///
/// let result = process_number_value(1234.56789, &FormatOptions::new().with_max_decimals(2));
/// assert_eq!(result.formatted_value, "1,234.57");
/// assert!(result.is_formatted);
/// ```
pub fn process_number_value(
    value: impl Into<NumericLiteral>,
    options: &FormatOptions,
) -> ProcessedValue {
    process_with_formatter(value.into(), options, &PatternFormatter)
}

/// Format `value` for display, delegating large values to `formatter`.
///
/// Never fails: input that cannot be read as a number is shown as given.
/// `original_value` is always the untouched input.
pub fn process_with_formatter(
    value: NumericLiteral,
    options: &FormatOptions,
    formatter: &dyn MagnitudeFormatter,
) -> ProcessedValue {
    let (source, formatted_value) = select_display(&value, options, formatter);

    let is_formatted = match source {
        DisplaySource::Original => formatted_value != value.to_text(options.delimiter),
        _ => true,
    };

    tracing::debug!(
        "displaying {} as {:?} via {}",
        value,
        formatted_value,
        source.as_str()
    );

    ProcessedValue {
        formatted_value,
        original_value: value,
        is_formatted,
    }
}

fn select_display(
    value: &NumericLiteral,
    options: &FormatOptions,
    formatter: &dyn MagnitudeFormatter,
) -> (DisplaySource, String) {
    let delimiter = options.delimiter;
    let format = options.format.as_str();

    let text = value.to_text(delimiter);
    let has_decimals = text.contains(delimiter) && !text.ends_with(delimiter);

    let decimal_formatted = if has_decimals {
        resolve_decimal_precision(value, delimiter, options.max_decimals)
    } else {
        None
    };

    let cleaned = canonicalize_original(value, delimiter);

    if let Some(grouped) =
        group_large_magnitude(decimal_formatted.as_deref(), delimiter, format, formatter)
    {
        return (DisplaySource::GroupedDecimal, grouped);
    }

    if let Some(decimal) = decimal_formatted {
        return (DisplaySource::Decimal, decimal);
    }

    if let Some(grouped) =
        group_large_magnitude(Some(cleaned.as_ref()), delimiter, format, formatter)
    {
        return (DisplaySource::GroupedOriginal, grouped);
    }

    (DisplaySource::Original, cleaned.into_owned())
}

// ============================================================================
// Processor
// ============================================================================

/// Stateless number processor bound to a formatter and default options.
///
/// Safe to share across threads; every call is independent.
pub struct NumberProcessor {
    /// Collaborator for large-value formatting
    formatter: Arc<dyn MagnitudeFormatter>,

    /// Options used by `process`
    options: FormatOptions,
}

impl NumberProcessor {
    /// Create a processor
    pub fn new(formatter: Arc<dyn MagnitudeFormatter>, options: FormatOptions) -> Self {
        Self { formatter, options }
    }

    /// Default options for `process`
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Name of the large-value formatter
    pub fn formatter_name(&self) -> &str {
        self.formatter.name()
    }

    /// Format a value with the processor's options
    pub fn process(&self, value: impl Into<NumericLiteral>) -> ProcessedValue {
        process_with_formatter(value.into(), &self.options, self.formatter.as_ref())
    }

    /// Format a value with one-off options
    pub fn process_with(
        &self,
        value: impl Into<NumericLiteral>,
        options: &FormatOptions,
    ) -> ProcessedValue {
        process_with_formatter(value.into(), options, self.formatter.as_ref())
    }
}

impl Default for NumberProcessor {
    fn default() -> Self {
        Self::new(Arc::new(PatternFormatter), FormatOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn process(value: impl Into<NumericLiteral>) -> ProcessedValue {
        process_number_value(value, &FormatOptions::default())
    }

    fn source(value: impl Into<NumericLiteral>, options: &FormatOptions) -> DisplaySource {
        select_display(&value.into(), options, &PatternFormatter).0
    }

    #[test]
    fn test_branch_priority() {
        let defaults = FormatOptions::default();
        assert_eq!(source(1500.123456, &defaults), DisplaySource::GroupedDecimal);
        assert_eq!(source(1.234567, &defaults), DisplaySource::Decimal);
        assert_eq!(source(5000, &defaults), DisplaySource::GroupedOriginal);
        assert_eq!(source(42, &defaults), DisplaySource::Original);
        assert_eq!(source("123.0", &defaults), DisplaySource::Original);
    }

    #[test]
    fn test_branch_names() {
        assert_eq!(DisplaySource::GroupedDecimal.as_str(), "grouped_decimal");
        assert_eq!(DisplaySource::Decimal.as_str(), "decimal");
        assert_eq!(DisplaySource::GroupedOriginal.as_str(), "grouped_original");
        assert_eq!(DisplaySource::Original.as_str(), "original");
    }

    #[test]
    fn test_tiny_value_past_decimal_scale() {
        let options = FormatOptions::new().with_max_decimals(29);
        let result = process_number_value(1.5e-29, &options);
        assert_eq!(result.formatted_value, format!("0.{}2", "0".repeat(28)));
        assert!(result.is_formatted);
    }

    #[test]
    fn test_large_integers_are_grouped_symmetrically() {
        let positive = process(5000);
        assert_eq!(positive.formatted_value, "5,000");
        assert!(positive.is_formatted);
        assert_eq!(positive.original_value, NumericLiteral::Number(5000.0));

        let negative = process(-5000);
        assert_eq!(negative.formatted_value, "-5,000");
        assert!(negative.is_formatted);
        assert_eq!(negative.original_value, NumericLiteral::Number(-5000.0));
    }

    #[test]
    fn test_untouched_values() {
        let small = process(42);
        assert_eq!(small.formatted_value, "42");
        assert!(!small.is_formatted);

        let half = process(-0.5);
        assert_eq!(half.formatted_value, "-0.5");
        assert!(!half.is_formatted);

        let trailing = process("123.");
        assert_eq!(trailing.formatted_value, "123.");
        assert!(!trailing.is_formatted);
    }

    #[test]
    fn test_non_numeric_falls_through() {
        let result = process("abc");
        assert_eq!(result.formatted_value, "abc");
        assert!(!result.is_formatted);
        assert_eq!(result.original_value, NumericLiteral::from("abc"));
    }

    #[test]
    fn test_grouped_string_input() {
        let result = process("1,234");
        assert_eq!(result.formatted_value, "1,234");
        assert!(result.is_formatted);
        assert_eq!(result.original_value, NumericLiteral::from("1,234"));
    }

    #[test]
    fn test_custom_delimiter() {
        let options = FormatOptions::new().with_delimiter(',').with_max_decimals(2);
        let result = process_number_value("12,3456", &options);
        assert_eq!(result.formatted_value, "12,35");
        assert!(result.is_formatted);

        let number = process_number_value(12.3456, &options);
        assert_eq!(number.formatted_value, "12,35");
    }

    #[test]
    fn test_compact_format() {
        let result = process_number_value(2_500_000.75, &FormatOptions::compact());
        assert_eq!(result.formatted_value, "2.5m");
        assert!(result.is_formatted);
    }

    #[test]
    fn test_processor_shares_across_threads() {
        let processor = NumberProcessor::default();
        let values = [0.0000001, 1.234567, 1500.123456, 5000.0, 42.0];
        let expected: Vec<ProcessedValue> = values.iter().map(|v| processor.process(*v)).collect();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for (value, want) in values.iter().zip(&expected) {
                        assert_eq!(&processor.process(*value), want);
                    }
                });
            }
        });
    }

    #[test]
    fn test_process_with_overrides_options() {
        let processor = NumberProcessor::default();
        assert_eq!(processor.formatter_name(), "pattern");
        assert_eq!(processor.process(0.123456).formatted_value, "0.123456");
        assert_eq!(
            processor
                .process_with(0.123456, &FormatOptions::fiat())
                .formatted_value,
            "0.12"
        );
    }

    proptest! {
        #[test]
        fn test_original_is_preserved(value in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
            let result = process(value);
            prop_assert_eq!(result.original_value, NumericLiteral::Number(value));
        }

        #[test]
        fn test_original_text_is_preserved(text in "-?[0-9]{1,3}(,[0-9]{3}){0,3}(\\.[0-9]{0,9})?") {
            let result = process(text.as_str());
            prop_assert_eq!(result.original_value, NumericLiteral::Text(text));
        }

        #[test]
        fn test_auto_budget_respected(value in -1e12f64..1e12) {
            let result = process(value);
            let formatted = &result.formatted_value;
            if !formatted.starts_with('<') {
                let digits = formatted.rsplit_once('.').map_or(0, |(_, tail)| tail.len());
                let budget = crate::formatter::classify_max_decimals(value.abs()) as usize;
                prop_assert!(digits <= budget, "{} -> {}", value, formatted);
            }
        }

        #[test]
        fn test_tiny_values_use_sentinel(value in 1e-12f64..1e-6) {
            prop_assume!(value < 0.000001);
            prop_assert_eq!(process(value).formatted_value, "< 0.000001");
            prop_assert_eq!(process(-value).formatted_value, "< 0.000001");
        }

        #[test]
        fn test_small_values_never_grouped(value in -999.0f64..999.0) {
            prop_assert!(!process(value).formatted_value.contains(','));
        }

        #[test]
        fn test_large_values_always_grouped(value in 1000.0f64..1e15) {
            let result = process(value);
            prop_assert!(result.formatted_value.contains(','), "{} -> {}", value, result.formatted_value);
            prop_assert!(result.is_formatted);
        }
    }
}
