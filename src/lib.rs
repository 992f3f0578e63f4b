// ============================================================================
// Roman Numerals Library
// Table-driven Roman numeral codec with a synchronized numeral value type
// ============================================================================

//! # Roman Numerals
//!
//! Conversion between integers and classical Roman numerals.
//!
//! ## Features
//!
//! - **Table-driven codec**: max value, encoding, decoding and the validation
//!   grammar are all derived from a [`DigitTable`](codec::DigitTable)
//! - **Strict validation**: only canonical subtractive notation is accepted
//! - **Synchronized values**: [`NumeralValue`] keeps a number and its numeral
//!   in step under in-place arithmetic
//! - **Flexible operands**: integers, Roman or decimal text, and existing
//!   values are accepted wherever an operand is expected
//!
//! ## Example
//!
//! ```rust
//! use roman_numerals::prelude::*;
//!
//! assert_eq!(get_max_parsable_number(), 3999);
//! assert_eq!(encode(1994).unwrap(), "MCMXCIV");
//! assert_eq!(decode("xiii").unwrap(), 13);
//! assert!(!is_valid_roman("IIII"));
//!
//! let sum = add(10, "XX").unwrap();
//! assert_eq!(sum.roman_number(), "XXX");
//!
//! let mut value = NumeralValue::new(30).unwrap();
//! value.plus(5).unwrap();
//! assert_eq!(value.number(), 35);
//! assert_eq!(value.roman_number(), "XXXV");
//! ```

pub mod codec;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;

pub use codec::{decode, encode, get_max_parsable_number, is_valid_roman};
pub use numeric::{
    add, coerce_optional, coerce_to_number, subtract, NumberLike, NumeralError, NumeralResult,
    NumeralValue, ParseFailure, RangeError,
};

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{
        decode, encode, get_max_parsable_number, is_valid_roman, DigitSymbol, DigitTable,
        RomanCodec,
    };
    pub use crate::numeric::{
        add, coerce_optional, coerce_to_number, subtract, NumberLike, NumeralError,
        NumeralResult, NumeralValue, ParseFailure, RangeError,
    };
}
