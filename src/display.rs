// ============================================================================
// Numeric Display
// Visible text plus full-precision disclosure for a rendered value
// ============================================================================

use crate::formatter::NumberProcessor;
use crate::numeric::{is_number, NumericLiteral};

/// Text for a single rendered value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNumber {
    /// Visible text, with prefix and suffix
    pub text: String,
    /// Supplementary text (e.g. on hover), if any
    pub tooltip: Option<String>,
}

/// Presentation settings for a numeric value: unit prefix/suffix and an
/// optional explicit tooltip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericDisplay {
    prefix: String,
    suffix: String,
    tooltip: Option<String>,
}

impl NumericDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Text placed before the value (e.g. `"$"`)
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Builder method: Text placed after the value (e.g. `" OM"`)
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Builder method: Tooltip shown regardless of formatting
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Render `value` through `processor`.
    ///
    /// Returns `None` for values that are not numbers; the caller should
    /// skip the element. The tooltip is the explicit one if set, otherwise
    /// the decorated original value when the visible text hides precision.
    pub fn render(
        &self,
        processor: &NumberProcessor,
        value: impl Into<NumericLiteral>,
    ) -> Option<RenderedNumber> {
        let value = value.into();
        if !is_number(&value, processor.options().delimiter) {
            tracing::trace!("not rendering non-numeric value {}", value);
            return None;
        }

        let processed = processor.process(value);
        let tooltip = match &self.tooltip {
            Some(explicit) => Some(explicit.clone()),
            None => processed.disclosure().map(|original| self.decorate(&original)),
        };

        Some(RenderedNumber {
            text: self.decorate(&processed.formatted_value),
            tooltip,
        })
    }

    fn decorate(&self, text: &str) -> String {
        format!("{}{}{}", self.prefix, text, self.suffix)
    }
}
