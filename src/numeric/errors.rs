// ============================================================================
// Numeral Errors
// Error types for Roman numeral conversion and arithmetic
// ============================================================================

use thiserror::Error;

/// A number fell outside the representable interval `[1, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RangeError {
    /// Value is greater than the max parsable number of the digit table
    #[error("the given number `{value}` exceeds the max parsable number `{max}`")]
    AboveMax { value: i64, max: i64 },
    /// Value is below 1
    #[error("the given number `{value}` goes below the min parsable number `1`")]
    BelowMin { value: i64 },
}

impl RangeError {
    /// The offending value.
    #[inline]
    pub const fn value(&self) -> i64 {
        match self {
            RangeError::AboveMax { value, .. } | RangeError::BelowMin { value } => *value,
        }
    }

    /// True when the upper bound was exceeded.
    #[inline]
    pub const fn is_upper(&self) -> bool {
        matches!(self, RangeError::AboveMax { .. })
    }
}

/// Why a [`NumberLike`](super::NumberLike) could not be turned into a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseFailure {
    /// No value was supplied at all
    #[error("no value was given")]
    Missing,
    /// Text is neither a Roman numeral nor a decimal integer
    #[error("neither a roman numeral nor a decimal integer")]
    Unrecognized,
    /// Text parsed as a decimal integer outside the valid range
    #[error(transparent)]
    OutOfRange(#[from] RangeError),
}

/// Errors raised by the codec, the coercion helpers and [`NumeralValue`](super::NumeralValue).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    /// Number outside `[1, max]`
    #[error(transparent)]
    Range(#[from] RangeError),

    /// String does not follow the Roman numeral grammar
    #[error("the given string is not a valid roman numeral: `{input}`")]
    Format { input: String },

    /// Operand could not be normalized to a number
    #[error("given value could not be parsed: `{input}`: {reason}")]
    Parse {
        input: String,
        #[source]
        reason: ParseFailure,
    },

    /// A custom digit table failed validation
    #[error("invalid digit table: {0}")]
    InvalidTable(String),
}

impl NumeralError {
    /// Check if this is a range violation.
    pub fn is_range_error(&self) -> bool {
        matches!(self, NumeralError::Range(_))
    }

    /// Check if this is a grammar violation.
    pub fn is_format_error(&self) -> bool {
        matches!(self, NumeralError::Format { .. })
    }

    /// Check if this is a coercion failure.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, NumeralError::Parse { .. })
    }

    /// The range violation carried by this error, directly or as a parse reason.
    pub fn range_error(&self) -> Option<RangeError> {
        match self {
            NumeralError::Range(err)
            | NumeralError::Parse {
                reason: ParseFailure::OutOfRange(err),
                ..
            } => Some(*err),
            _ => None,
        }
    }
}

/// Result type alias for numeral operations
pub type NumeralResult<T> = Result<T, NumeralError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_error_display() {
        let upper = RangeError::AboveMax {
            value: 4000,
            max: 3999,
        };
        assert_eq!(
            upper.to_string(),
            "the given number `4000` exceeds the max parsable number `3999`"
        );
        assert!(upper.is_upper());
        assert_eq!(upper.value(), 4000);

        let lower = RangeError::BelowMin { value: 0 };
        assert_eq!(
            lower.to_string(),
            "the given number `0` goes below the min parsable number `1`"
        );
        assert!(!lower.is_upper());
    }

    #[test]
    fn test_numeral_error_display() {
        let err = NumeralError::Format {
            input: "IIII".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "the given string is not a valid roman numeral: `IIII`"
        );

        let err = NumeralError::Parse {
            input: "abc".to_string(),
            reason: ParseFailure::Unrecognized,
        };
        assert_eq!(
            err.to_string(),
            "given value could not be parsed: `abc`: neither a roman numeral nor a decimal integer"
        );
    }

    #[test]
    fn test_error_kinds() {
        let range: NumeralError = RangeError::BelowMin { value: -4 }.into();
        assert!(range.is_range_error());
        assert!(!range.is_parse_error());
        assert_eq!(range.range_error(), Some(RangeError::BelowMin { value: -4 }));

        let parse = NumeralError::Parse {
            input: "5000".to_string(),
            reason: ParseFailure::OutOfRange(RangeError::AboveMax {
                value: 5000,
                max: 3999,
            }),
        };
        assert!(parse.is_parse_error());
        assert_eq!(parse.range_error().map(|e| e.value()), Some(5000));
    }

    #[test]
    fn test_parse_error_source() {
        use std::error::Error as _;

        let err = NumeralError::Parse {
            input: "x".to_string(),
            reason: ParseFailure::Missing,
        };
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("no value was given".to_string())
        );
    }
}
