// ============================================================================
// Numeric Errors
// Error types for parsing and rendering display values
// ============================================================================

use std::fmt;

/// Errors that can occur while interpreting a value or a format pattern.
///
/// None of these escape the public formatting surface: the processor
/// degrades to the least-transformed value instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatError {
    /// Input string is not a number
    InvalidInput,
    /// Value parsed, but is NaN or infinite
    NonFinite,
    /// Delimiter cannot act as a decimal separator
    InvalidDelimiter,
    /// Format pattern could not be parsed
    InvalidPattern,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidInput => write!(f, "invalid input: could not parse value"),
            FormatError::NonFinite => write!(f, "non-finite value: NaN or infinity"),
            FormatError::InvalidDelimiter => {
                write!(f, "invalid delimiter: must not be a digit, sign or whitespace")
            },
            FormatError::InvalidPattern => write!(f, "invalid format pattern"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Result type alias for parsing and formatting helpers
pub type FormatResult<T> = Result<T, FormatError>;
