// ============================================================================
// Number Display Library
// Adaptive formatting of raw numeric values for explorer-style tables
// ============================================================================

//! # Number Display
//!
//! Turns raw numeric values (token amounts, supplies, TVL, vote tallies) into
//! short display strings without fabricating precision, while keeping the
//! exact original value for disclosure.
//!
//! ## Features
//!
//! - **Magnitude-aware precision**: 0, 2 or 6 decimals chosen from the value
//! - **Small-value sentinels**: `"< 0.000001"` instead of a rounded zero
//! - **Trailing-zero trimming** with a two-digit floor
//! - **Pattern-driven grouping** for values from 1000 up (`"1,234.57"`, `"1.5m"`)
//! - **Lossless originals**: the input is always returned untouched
//!
//! ## Example
//!
//! ```rust
//! use number_display::prelude::*;
//!
//! // Auto precision: magnitudes from 1000 up lose their decimals
//! let supply = process_number_value(1500.123456, &FormatOptions::default());
//! assert_eq!(supply.formatted_value, "1,500");
//! assert!(supply.is_formatted);
//!
//! // Dust below the chosen precision
//! let dust = process_number_value(0.0000001, &FormatOptions::new().with_max_decimals(6));
//! assert_eq!(dust.formatted_value, "< 0.000001");
//!
//! // Reusable processor with presets
//! let processor = NumberProcessorBuilder::compact().build().unwrap();
//! assert_eq!(processor.process(2_500_000).formatted_value, "2.5m");
//! ```

pub mod display;
pub mod domain;
pub mod formatter;
pub mod interfaces;
pub mod numeric;
pub mod pattern;

// Re-exports for convenience
pub mod prelude {
    pub use crate::display::{NumericDisplay, RenderedNumber};
    pub use crate::domain::{FormatOptions, ProcessedValue};
    pub use crate::formatter::{
        create_from_options, process_number_value, NumberProcessor, NumberProcessorBuilder,
    };
    pub use crate::interfaces::{LoggingFormatter, MagnitudeFormatter};
    pub use crate::numeric::NumericLiteral;
    pub use crate::pattern::PatternFormatter;
}
