// ============================================================================
// Formatter Module
// Contains the adaptive display formatting logic
// ============================================================================

mod grouping;
mod precision;
mod processor;

pub mod factory;

pub use factory::{create_from_options, NumberProcessorBuilder};
pub use grouping::{canonicalize_original, group_large_magnitude, LARGE_MAGNITUDE};
pub use precision::{
    classify_max_decimals, resolve_decimal_precision, small_value_sentinel, trim_trailing_zeros,
    TWO_DECIMAL_THRESHOLD, WHOLE_NUMBER_THRESHOLD,
};
pub use processor::{process_number_value, process_with_formatter, NumberProcessor};
