// ============================================================================
// Format Options
// Per-call configuration for the number processor
// ============================================================================

use crate::numeric::{FormatError, FormatResult};
use crate::pattern::NumberPattern;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// Thousands-grouped pattern with up to two optional decimal digits
pub const DEFAULT_FORMAT: &str = "0,0.[00]";

/// Decimal separator used when none is given
pub const DEFAULT_DELIMITER: char = '.';

/// Configuration for formatting a value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FormatOptions {
    /// Decimal separator, for reading string values and for output
    pub delimiter: char,

    /// Optional: explicit cap on decimal digits
    /// None means the cap is derived from the value's magnitude
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient_max_decimals"))]
    pub max_decimals: Option<u32>,

    /// Pattern used to render large values (see `NumberPattern`)
    pub format: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            max_decimals: None,
            format: DEFAULT_FORMAT.to_string(),
        }
    }
}

impl FormatOptions {
    /// Create options with the default delimiter, automatic precision and
    /// the default grouping pattern
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set the decimal delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder method: Cap the number of decimal digits
    pub fn with_max_decimals(mut self, max_decimals: u32) -> Self {
        self.max_decimals = Some(max_decimals);
        self
    }

    /// Builder method: Set the large-value format pattern
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        check_delimiter(self.delimiter)
            .map_err(|err| format!("Delimiter {:?}: {}", self.delimiter, err))?;

        NumberPattern::parse(&self.format)
            .map_err(|err| format!("Format {:?}: {}", self.format, err))?;

        Ok(())
    }
}

/// Check that a character can act as a decimal separator.
///
/// # Errors
/// Returns `InvalidDelimiter` for ASCII digits, signs and whitespace.
pub fn check_delimiter(delimiter: char) -> FormatResult<()> {
    if delimiter.is_ascii_digit()
        || delimiter == '-'
        || delimiter == '+'
        || delimiter.is_whitespace()
    {
        Err(FormatError::InvalidDelimiter)
    } else {
        Ok(())
    }
}

/// Interpret a caller-supplied decimal cap.
///
/// Anything that is not a non-negative integer counts as "not provided".
pub fn parse_max_decimals(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}

#[cfg(feature = "serde")]
fn lenient_max_decimals<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawMaxDecimals {
        Count(u32),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match RawMaxDecimals::deserialize(deserializer)? {
        RawMaxDecimals::Count(count) => Some(count),
        RawMaxDecimals::Text(text) => parse_max_decimals(&text),
        RawMaxDecimals::Other(_) => None,
    })
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl FormatOptions {
    /// Token balances and supplies
    /// - Precision follows magnitude (0, 2 or 6 decimals)
    /// - Large values grouped with up to two decimals
    pub fn token_amount() -> Self {
        Self::default()
    }

    /// Fiat values such as TVL in USD
    /// - Two decimals
    pub fn fiat() -> Self {
        Self::default().with_max_decimals(2)
    }

    /// Counts: block heights, validator totals, vote tallies
    /// - No decimals, grouped
    pub fn whole_units() -> Self {
        Self::default().with_max_decimals(0).with_format("0,0")
    }

    /// Narrow table cells
    /// - Large values abbreviated (`1.5m`)
    pub fn compact() -> Self {
        Self::default().with_format("0.[00]a")
    }
}
