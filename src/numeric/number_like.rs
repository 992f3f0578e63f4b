// ============================================================================
// Number-like Operands
// The three shapes accepted wherever a numeral operand is expected
// ============================================================================

use super::errors::{NumeralError, NumeralResult, ParseFailure};
use super::value::NumeralValue;
use crate::codec::RomanCodec;

/// An operand given as an integer, as text (Roman or decimal), or as an
/// existing [`NumeralValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberLike<'a> {
    Integer(i64),
    /// Roman numeral, or a decimal integer when not a valid numeral
    Text(&'a str),
    Value(&'a NumeralValue),
}

impl NumberLike<'_> {
    /// Normalize to an integer in `[1, max]`.
    ///
    /// # Errors
    /// - `Range` for an out-of-range integer
    /// - `Parse` for text that is neither a Roman numeral nor a decimal
    ///   integer, or a decimal integer out of range
    pub fn to_number(&self) -> NumeralResult<i64> {
        let codec = RomanCodec::STANDARD;
        match *self {
            NumberLike::Integer(number) => Ok(codec.check_range(number)?),
            NumberLike::Text(text) => {
                if codec.is_valid_roman(text) {
                    return codec.decode(text);
                }
                let parsed: i64 = text.trim().parse().map_err(|_| NumeralError::Parse {
                    input: text.to_string(),
                    reason: ParseFailure::Unrecognized,
                })?;
                codec
                    .check_range(parsed)
                    .map_err(|err| NumeralError::Parse {
                        input: text.to_string(),
                        reason: ParseFailure::OutOfRange(err),
                    })
            }
            NumberLike::Value(value) => Ok(value.number()),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for NumberLike<'_> {
                #[inline]
                fn from(value: $ty) -> Self {
                    NumberLike::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl<'a> From<&'a str> for NumberLike<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        NumberLike::Text(value)
    }
}

impl<'a> From<&'a String> for NumberLike<'a> {
    #[inline]
    fn from(value: &'a String) -> Self {
        NumberLike::Text(value.as_str())
    }
}

impl<'a> From<&'a NumeralValue> for NumberLike<'a> {
    #[inline]
    fn from(value: &'a NumeralValue) -> Self {
        NumberLike::Value(value)
    }
}

/// Normalize any number-like operand to an integer in `[1, max]`.
///
/// # Example
/// ```
/// use roman_numerals::coerce_to_number;
///
/// assert_eq!(coerce_to_number("XIV").unwrap(), 14);
/// assert_eq!(coerce_to_number("14").unwrap(), 14);
/// assert_eq!(coerce_to_number(14).unwrap(), 14);
/// assert!(coerce_to_number("fourteen").unwrap_err().is_parse_error());
/// ```
pub fn coerce_to_number<'a>(value: impl Into<NumberLike<'a>>) -> NumeralResult<i64> {
    value.into().to_number()
}

/// Like [`coerce_to_number`], but a missing operand is rejected instead of
/// falling back to a default.
///
/// # Errors
/// Returns `Parse` with [`ParseFailure::Missing`] for `None`.
pub fn coerce_optional<'a, T>(value: Option<T>) -> NumeralResult<i64>
where
    T: Into<NumberLike<'a>>,
{
    match value {
        Some(value) => coerce_to_number(value),
        None => Err(NumeralError::Parse {
            input: "<missing>".to_string(),
            reason: ParseFailure::Missing,
        }),
    }
}
