// ============================================================================
// Numeric Module
// Numeral values, operand coercion and error types
// ============================================================================
//
// This module provides:
// - NumeralValue: number and Roman numeral kept in sync under mutation
// - NumberLike: integer | text | NumeralValue operand, plus coercion helpers
// - add / subtract: arithmetic creating new values
// - NumeralError: error types shared with the codec
//
// Design principles:
// - All fallible operations return Result (no panics)
// - Values are validated before any state is replaced
// - Out-of-range numbers are rejected, never clamped

mod errors;
mod number_like;
mod value;

pub use errors::{NumeralError, NumeralResult, ParseFailure, RangeError};
pub use number_like::{coerce_optional, coerce_to_number, NumberLike};
pub use value::{add, subtract, NumeralValue};
