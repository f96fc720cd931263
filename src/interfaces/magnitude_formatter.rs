// ============================================================================
// Magnitude Formatter Interface
// Defines the contract for pattern-driven rendering of large values
// ============================================================================

/// Strategy interface for rendering a number according to a format pattern
/// (digit grouping, decimal digits, order-of-magnitude abbreviation).
///
/// The processor hands large-magnitude values to an implementation of this
/// trait and uses its output verbatim. Implementations: `PatternFormatter`.
pub trait MagnitudeFormatter: Send + Sync {
    /// Render `value` according to `pattern`
    ///
    /// # Arguments
    /// * `value` - The number to render
    /// * `pattern` - Format pattern, e.g. `"0,0.[00]"` or `"0.0a"`
    /// * `use_absolute_for_threshold` - Choose abbreviation units from the
    ///   absolute value rather than the signed value
    fn format(&self, value: f64, pattern: &str, use_absolute_for_threshold: bool) -> String;

    /// Get the formatter name for logging
    fn name(&self) -> &str;
}

/// Logging decorator around another formatter
pub struct LoggingFormatter<F> {
    inner: F,
}

impl<F: MagnitudeFormatter> LoggingFormatter<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: MagnitudeFormatter> MagnitudeFormatter for LoggingFormatter<F> {
    fn format(&self, value: f64, pattern: &str, use_absolute_for_threshold: bool) -> String {
        let rendered = self.inner.format(value, pattern, use_absolute_for_threshold);
        tracing::debug!(
            "{} formatted {} with pattern {:?}: {}",
            self.inner.name(),
            value,
            pattern,
            rendered
        );
        rendered
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
