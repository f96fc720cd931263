// ============================================================================
// Pattern Module
// Numeral-style format patterns and the default magnitude formatter
// ============================================================================

mod formatter;
mod number_pattern;

pub use formatter::PatternFormatter;
pub use number_pattern::{group_thousands, NumberPattern};
