// ============================================================================
// Processor Factory
// Creates number processors with validated configuration
// ============================================================================

use super::processor::NumberProcessor;
use crate::domain::FormatOptions;
use crate::interfaces::MagnitudeFormatter;
use crate::pattern::PatternFormatter;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a number processor from options
///
/// # Arguments
/// * `options` - Default format options for the processor
/// * `formatter` - Collaborator for large-value formatting
///
/// # Returns
/// * `Result<NumberProcessor, String>` - Configured processor or error
///
/// # Example
/// ```
/// use number_display::domain::FormatOptions;
/// use number_display::formatter::create_from_options;
/// use number_display::pattern::PatternFormatter;
/// use std::sync::Arc;
///
/// let processor = create_from_options(FormatOptions::fiat(), Arc::new(PatternFormatter)).unwrap();
/// assert_eq!(processor.process(1234.5678).formatted_value, "1,234.57");
/// ```
pub fn create_from_options(
    options: FormatOptions,
    formatter: Arc<dyn MagnitudeFormatter>,
) -> Result<NumberProcessor, String> {
    options.validate()?;
    Ok(NumberProcessor::new(formatter, options))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating number processors with fluent API
///
/// # Example
/// ```
/// use number_display::formatter::NumberProcessorBuilder;
///
/// let processor = NumberProcessorBuilder::new()
///     .delimiter(',')
///     .max_decimals(2)
///     .build()
///     .unwrap();
///
/// assert_eq!(processor.process("3,14159").formatted_value, "3,14");
/// ```
pub struct NumberProcessorBuilder {
    options: FormatOptions,
    formatter: Arc<dyn MagnitudeFormatter>,
}

impl NumberProcessorBuilder {
    /// Create a builder with default options and the pattern formatter
    pub fn new() -> Self {
        Self {
            options: FormatOptions::default(),
            formatter: Arc::new(PatternFormatter),
        }
    }

    /// Set the decimal delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.options.delimiter = delimiter;
        self
    }

    /// Cap decimal digits
    pub fn max_decimals(mut self, max_decimals: u32) -> Self {
        self.options.max_decimals = Some(max_decimals);
        self
    }

    /// Derive decimal digits from magnitude (default)
    pub fn auto_decimals(mut self) -> Self {
        self.options.max_decimals = None;
        self
    }

    /// Set the large-value format pattern
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.options.format = format.into();
        self
    }

    /// Replace the large-value formatter
    pub fn formatter(mut self, formatter: Arc<dyn MagnitudeFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Start from preset options
    pub fn from_options(options: FormatOptions) -> Self {
        Self {
            options,
            ..Self::new()
        }
    }

    /// Apply fiat configuration
    pub fn fiat() -> Self {
        Self::from_options(FormatOptions::fiat())
    }

    /// Apply compact configuration
    pub fn compact() -> Self {
        Self::from_options(FormatOptions::compact())
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the processor
    pub fn build(self) -> Result<NumberProcessor, String> {
        create_from_options(self.options, self.formatter)
    }

    /// Get the options without building (for inspection)
    pub fn get_options(&self) -> &FormatOptions {
        &self.options
    }
}

impl Default for NumberProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
