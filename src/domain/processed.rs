// ============================================================================
// Processed Value
// ============================================================================

use crate::numeric::NumericLiteral;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of formatting a value for display
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProcessedValue {
    /// Text to show
    pub formatted_value: String,

    /// The input exactly as supplied, for full-precision disclosure
    pub original_value: NumericLiteral,

    /// Whether the shown text hides information the original carries
    pub is_formatted: bool,
}

impl ProcessedValue {
    /// A value whose display text differs from the original
    pub fn formatted(formatted_value: String, original_value: NumericLiteral) -> Self {
        Self {
            formatted_value,
            original_value,
            is_formatted: true,
        }
    }

    /// Full-precision text to expose (e.g. on hover), if any is hidden
    pub fn disclosure(&self) -> Option<String> {
        self.is_formatted.then(|| self.original_value.to_string())
    }
}

impl fmt::Display for ProcessedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted_value)
    }
}
