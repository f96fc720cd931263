// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod magnitude_formatter;

pub use magnitude_formatter::{LoggingFormatter, MagnitudeFormatter};
