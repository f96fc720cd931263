// ============================================================================
// Numeric Module
// Interpreting raw input values and rendering them at fixed precision
// ============================================================================
//
// This module provides:
// - NumericLiteral: number-or-string input value, kept verbatim
// - Parsing helpers: grouping-aware parser, numeric predicate, slicing
// - to_fixed: round-half-up fixed-point rendering via rust_decimal
// - FormatError: error types for the helpers above
//
// Design principles:
// - Inputs are never mutated; every helper borrows
// - Helpers return Result, the public formatter never does
// - Float semantics at the edges, exact decimal rounding in the middle

mod errors;
mod fixed_point;
mod literal;

pub use errors::{FormatError, FormatResult};
pub use fixed_point::{to_fixed, with_delimiter};
pub use literal::{
    grouping_separator, head_string, is_number, last_string, parse_number, to_number,
    NumericLiteral,
};
