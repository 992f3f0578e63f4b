// ============================================================================
// Numeral Value
// A number kept in sync with its Roman numeral form
// ============================================================================

use super::errors::{NumeralError, NumeralResult};
use super::number_like::{coerce_to_number, NumberLike};
use crate::codec::RomanCodec;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number in `[1, 3999]` paired with its canonical Roman numeral.
///
/// Both views are replaced together by every setter and arithmetic
/// mutator, and only after the new value has been validated, so a failed
/// call leaves the value unchanged.
///
/// # Example
/// ```
/// use roman_numerals::NumeralValue;
///
/// let mut value = NumeralValue::new(30)?;
/// value.plus(5)?;
/// assert_eq!(value.number(), 35);
/// assert_eq!(value.roman_number(), "XXXV");
///
/// value.set_roman("xl")?;
/// assert_eq!(value.number(), 40);
/// assert_eq!(value.roman_number(), "XL");
/// # Ok::<(), roman_numerals::NumeralError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawNumeralValue"))]
pub struct NumeralValue {
    number: i64,
    roman_number: String,
}

impl NumeralValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from any number-like seed.
    ///
    /// # Errors
    /// Fails under the same conditions as [`coerce_to_number`].
    pub fn new<'a>(seed: impl Into<NumberLike<'a>>) -> NumeralResult<Self> {
        let number = coerce_to_number(seed)?;
        Self::from_number(number)
    }

    /// Create from an integer.
    ///
    /// # Errors
    /// Returns `Range` if `number` is outside `[1, max]`.
    pub fn from_number(number: i64) -> NumeralResult<Self> {
        let roman_number = RomanCodec::STANDARD.encode(number)?;
        Ok(Self {
            number,
            roman_number,
        })
    }

    /// Create from a Roman numeral (case-insensitive).
    ///
    /// # Errors
    /// Returns `Format` if `roman` is not a valid numeral.
    pub fn from_roman(roman: &str) -> NumeralResult<Self> {
        let codec = RomanCodec::STANDARD;
        let number = codec.decode(roman)?;
        let roman_number = codec.encode(number)?;
        Ok(Self {
            number,
            roman_number,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn number(&self) -> i64 {
        self.number
    }

    /// Canonical uppercase Roman form.
    #[inline]
    pub fn roman_number(&self) -> &str {
        &self.roman_number
    }

    pub fn into_parts(self) -> (i64, String) {
        (self.number, self.roman_number)
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Replace the numeric view and recompute the Roman view.
    ///
    /// # Errors
    /// Returns `Range` if `number` is outside `[1, max]`.
    pub fn set_number(&mut self, number: i64) -> NumeralResult<()> {
        let updated = Self::from_number(number)?;
        self.replace(updated);
        Ok(())
    }

    /// Replace the Roman view and recompute the numeric view.
    ///
    /// # Errors
    /// Returns `Format` if `roman` is not a valid numeral.
    pub fn set_roman(&mut self, roman: &str) -> NumeralResult<()> {
        let updated = Self::from_roman(roman)?;
        self.replace(updated);
        Ok(())
    }

    /// Add `operand` in place.
    ///
    /// # Errors
    /// Fails if the operand cannot be coerced or the sum exceeds the max.
    pub fn plus<'a>(&mut self, operand: impl Into<NumberLike<'a>>) -> NumeralResult<()> {
        let rhs = coerce_to_number(operand)?;
        self.set_number(self.number.saturating_add(rhs))
    }

    /// Subtract `operand` in place.
    ///
    /// # Errors
    /// Fails if the operand cannot be coerced or the difference is below 1.
    pub fn minus<'a>(&mut self, operand: impl Into<NumberLike<'a>>) -> NumeralResult<()> {
        let rhs = coerce_to_number(operand)?;
        self.set_number(self.number.saturating_sub(rhs))
    }

    fn replace(&mut self, updated: Self) {
        tracing::debug!(
            "numeral value changed: {} ({}) -> {} ({})",
            self.number,
            self.roman_number,
            updated.number,
            updated.roman_number
        );
        *self = updated;
    }
}

// ============================================================================
// Arithmetic Creators
// ============================================================================

/// Sum two operands into a new value.
///
/// # Errors
/// Fails if either operand cannot be coerced or the sum exceeds the max.
pub fn add<'a, 'b>(
    left: impl Into<NumberLike<'a>>,
    right: impl Into<NumberLike<'b>>,
) -> NumeralResult<NumeralValue> {
    let left = coerce_to_number(left)?;
    let right = coerce_to_number(right)?;
    NumeralValue::from_number(left.saturating_add(right))
}

/// Subtract `right` from `left` into a new value.
///
/// # Errors
/// Fails if either operand cannot be coerced or the difference is below 1.
pub fn subtract<'a, 'b>(
    left: impl Into<NumberLike<'a>>,
    right: impl Into<NumberLike<'b>>,
) -> NumeralResult<NumeralValue> {
    let left = coerce_to_number(left)?;
    let right = coerce_to_number(right)?;
    NumeralValue::from_number(left.saturating_sub(right))
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for NumeralValue {
    fn default() -> Self {
        Self {
            number: 1,
            roman_number: RomanCodec::STANDARD.table().unit_symbol().to_string(),
        }
    }
}

impl fmt::Display for NumeralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.roman_number)
    }
}

impl FromStr for NumeralValue {
    type Err = NumeralError;

    /// Parse a Roman numeral, or a decimal integer when the text is not one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<i64> for NumeralValue {
    type Error = NumeralError;

    fn try_from(number: i64) -> Result<Self, Self::Error> {
        Self::from_number(number)
    }
}

impl From<NumeralValue> for i64 {
    fn from(value: NumeralValue) -> Self {
        value.number
    }
}

// ============================================================================
// Serde Support
// ============================================================================

/// Unchecked wire form; converted through validation on deserialize.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawNumeralValue {
    number: i64,
    roman_number: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawNumeralValue> for NumeralValue {
    type Error = NumeralError;

    fn try_from(raw: RawNumeralValue) -> Result<Self, Self::Error> {
        let value = Self::from_number(raw.number)?;
        if !value.roman_number.eq_ignore_ascii_case(&raw.roman_number) {
            return Err(NumeralError::Format {
                input: raw.roman_number,
            });
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{ParseFailure, RangeError};

    #[test]
    fn test_default() {
        let value = NumeralValue::default();
        assert_eq!(value.number(), 1);
        assert_eq!(value.roman_number(), "I");
        assert_eq!(value, NumeralValue::new(1).unwrap());
    }

    #[test]
    fn test_new_from_each_shape() {
        assert_eq!(NumeralValue::new(30).unwrap().roman_number(), "XXX");
        assert_eq!(NumeralValue::new("XXX").unwrap().number(), 30);
        assert_eq!(NumeralValue::new("30").unwrap().roman_number(), "XXX");

        let original = NumeralValue::new(7).unwrap();
        let copy = NumeralValue::new(&original).unwrap();
        assert_eq!(copy, original);
    }

    #[test]
    fn test_new_out_of_range() {
        assert!(NumeralValue::new(0).unwrap_err().is_range_error());
        assert!(NumeralValue::new(4000).unwrap_err().is_range_error());
        assert!(NumeralValue::new("4000").unwrap_err().is_parse_error());
    }

    #[test]
    fn test_set_number() {
        let mut value = NumeralValue::new(30).unwrap();
        value.set_number(1994).unwrap();
        assert_eq!(value.number(), 1994);
        assert_eq!(value.roman_number(), "MCMXCIV");
    }

    #[test]
    fn test_set_roman() {
        let mut value = NumeralValue::new(30).unwrap();
        value.set_roman("XL").unwrap();
        assert_eq!(value.number(), 40);
        assert_eq!(value.roman_number(), "XL");

        value.set_roman("mmxxiv").unwrap();
        assert_eq!(value.number(), 2024);
        assert_eq!(value.roman_number(), "MMXXIV");
    }

    #[test]
    fn test_failed_setters_leave_value_unchanged() {
        let mut value = NumeralValue::new(30).unwrap();

        assert!(value.set_number(0).unwrap_err().is_range_error());
        assert!(value.set_roman("VX").unwrap_err().is_format_error());
        assert!(value.plus(3990).unwrap_err().is_range_error());
        assert!(value.minus(30).unwrap_err().is_range_error());

        assert_eq!(value.number(), 30);
        assert_eq!(value.roman_number(), "XXX");
    }

    #[test]
    fn test_plus_and_minus() {
        let mut value = NumeralValue::new(30).unwrap();
        value.plus(5).unwrap();
        assert_eq!((value.number(), value.roman_number()), (35, "XXXV"));

        value.minus("V").unwrap();
        assert_eq!((value.number(), value.roman_number()), (30, "XXX"));

        let ten = NumeralValue::new(10).unwrap();
        value.plus(&ten).unwrap();
        assert_eq!(value.roman_number(), "XL");
    }

    #[test]
    fn test_add_and_subtract() {
        let sum = add(10, 20).unwrap();
        assert_eq!(sum.number(), 30);
        assert_eq!(sum.roman_number(), "XXX");

        let difference = subtract(30, 5).unwrap();
        assert_eq!(difference.number(), 25);
        assert_eq!(difference.roman_number(), "XXV");

        let mixed = add("XIV", &difference).unwrap();
        assert_eq!(mixed.number(), 39);
    }

    #[test]
    fn test_subtract_below_one() {
        assert_eq!(
            subtract(1, 5),
            Err(NumeralError::Range(RangeError::BelowMin { value: -4 }))
        );
        assert!(subtract(5, 5).unwrap_err().is_range_error());
    }

    #[test]
    fn test_add_above_max() {
        assert_eq!(
            add(3000, 1000),
            Err(NumeralError::Range(RangeError::AboveMax {
                value: 4000,
                max: 3999
            }))
        );
    }

    #[test]
    fn test_operand_errors() {
        let err = add("nope", 1).unwrap_err();
        assert_eq!(
            err,
            NumeralError::Parse {
                input: "nope".to_string(),
                reason: ParseFailure::Unrecognized,
            }
        );
        assert!(subtract(10, 0).unwrap_err().is_range_error());
    }

    #[test]
    fn test_display_and_conversions() {
        let value: NumeralValue = "xiv".parse().unwrap();
        assert_eq!(value.to_string(), "XIV");
        assert_eq!(i64::from(value.clone()), 14);
        assert_eq!(NumeralValue::try_from(14i64).unwrap(), value);
        assert_eq!(value.into_parts(), (14, "XIV".to_string()));
    }

    #[test]
    fn test_ordering() {
        let small = NumeralValue::new(9).unwrap();
        let large = NumeralValue::new(10).unwrap();
        assert!(small < large);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let value = NumeralValue::new(1994).unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"number":1994,"roman_number":"MCMXCIV"}"#);

        let back: NumeralValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);

        let mismatched = r#"{"number":10,"roman_number":"XI"}"#;
        assert!(serde_json::from_str::<NumeralValue>(mismatched).is_err());

        let out_of_range = r#"{"number":0,"roman_number":""}"#;
        assert!(serde_json::from_str::<NumeralValue>(out_of_range).is_err());
    }
}
