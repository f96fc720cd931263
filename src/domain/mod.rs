// ============================================================================
// Domain Models Module
// Contains configuration and result value objects
// ============================================================================

pub mod options;
pub mod processed;

pub use options::{
    check_delimiter, parse_max_decimals, FormatOptions, DEFAULT_DELIMITER, DEFAULT_FORMAT,
};
pub use processed::ProcessedValue;
