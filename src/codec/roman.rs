// ============================================================================
// Roman Codec
// Table-driven encode / validate / decode
// ============================================================================

use super::table::{DigitTable, Tier};
use crate::numeric::{NumeralError, NumeralResult, RangeError};
use arrayvec::ArrayVec;
use smallvec::SmallVec;

/// Converts between integers in `[1, max]` and canonical Roman numerals
/// using one [`DigitTable`].
///
/// The codec is `Copy` and holds no mutable state, so a single instance can
/// be shared freely between threads.
///
/// # Example
/// ```
/// use roman_numerals::codec::RomanCodec;
///
/// let codec = RomanCodec::STANDARD;
/// assert_eq!(codec.encode(1994).unwrap(), "MCMXCIV");
/// assert_eq!(codec.decode("mcmxciv").unwrap(), 1994);
/// assert!(!codec.is_valid_roman("IIII"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RomanCodec {
    table: DigitTable,
}

impl RomanCodec {
    /// Codec over [`DigitTable::STANDARD`].
    pub const STANDARD: Self = Self::new(DigitTable::STANDARD);

    pub const fn new(table: DigitTable) -> Self {
        Self { table }
    }

    #[inline]
    pub const fn table(&self) -> &DigitTable {
        &self.table
    }

    /// Largest number this codec can encode.
    #[inline]
    pub const fn max_parsable_number(&self) -> i64 {
        self.table.max_parsable_number()
    }

    /// Check that `number` lies in `[1, max]`.
    #[inline]
    pub fn check_range(&self, number: i64) -> Result<i64, RangeError> {
        let max = self.max_parsable_number();
        if number > max {
            Err(RangeError::AboveMax { value: number, max })
        } else if number < 1 {
            Err(RangeError::BelowMin { value: number })
        } else {
            Ok(number)
        }
    }

    // ========================================================================
    // Encoding
    // ========================================================================

    /// Encode `number` as a canonical Roman numeral.
    ///
    /// # Errors
    /// Returns `Range` if `number` is outside `[1, max]`.
    pub fn encode(&self, number: i64) -> NumeralResult<String> {
        self.check_range(number)?;

        // Decimal digits, least significant first
        let mut digits: ArrayVec<u8, 20> = ArrayVec::new();
        let mut rest = number;
        while rest > 0 {
            digits.push((rest % 10) as u8);
            rest /= 10;
        }

        let tiers = self.table.tiers();
        let mut roman = String::with_capacity(digits.len() * 4);
        for (position, &digit) in digits.iter().enumerate().rev() {
            let tier = tiers.get(position).ok_or(RangeError::AboveMax {
                value: number,
                max: self.max_parsable_number(),
            })?;
            if !push_digit(&mut roman, tier, digit) {
                return Err(RangeError::AboveMax {
                    value: number,
                    max: self.max_parsable_number(),
                }
                .into());
            }
        }

        tracing::trace!("encoded {} as {}", number, roman);
        Ok(roman)
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Whether `input` is a well-formed Roman numeral (case-insensitive).
    ///
    /// Never fails: malformed or empty input yields `false`.
    pub fn is_valid_roman(&self, input: &str) -> bool {
        let symbols: SmallVec<[char; 16]> = input.chars().flat_map(char::to_uppercase).collect();
        if symbols.is_empty() {
            return false;
        }

        let tiers = self.table.tiers();
        let rest = tiers
            .iter()
            .rev()
            .fold(symbols.as_slice(), |rest, tier| consume_tier(tier, rest));
        rest.is_empty()
    }

    /// Regular expression accepting the same non-empty language as
    /// [`is_valid_roman`](Self::is_valid_roman), over uppercase input.
    ///
    /// The empty string matches the pattern but is not a valid numeral.
    pub fn validation_pattern(&self) -> String {
        let tiers = self.table.tiers();
        let mut pattern = String::from("^");
        for tier in tiers.iter().rev() {
            let one = tier.one;
            let mut alternatives: SmallVec<[String; 3]> = SmallVec::new();
            if let Some(ten) = tier.ten {
                alternatives.push(format!("{one}{ten}"));
            }
            match tier.five {
                Some(five) => {
                    alternatives.push(format!("{one}{five}"));
                    alternatives.push(format!("{five}?{one}{{0,3}}"));
                }
                None => alternatives.push(format!("{one}{{0,3}}")),
            }
            pattern.push_str("(?:");
            pattern.push_str(&alternatives.join("|"));
            pattern.push(')');
        }
        pattern.push('$');
        pattern
    }

    // ========================================================================
    // Decoding
    // ========================================================================

    /// Decode a Roman numeral (case-insensitive).
    ///
    /// # Errors
    /// Returns `Format` if `input` fails [`is_valid_roman`](Self::is_valid_roman).
    pub fn decode(&self, input: &str) -> NumeralResult<i64> {
        if !self.is_valid_roman(input) {
            return Err(NumeralError::Format {
                input: input.to_string(),
            });
        }

        let mut total: i64 = 0;
        let mut previous: Option<i64> = None;
        for symbol in input.chars().flat_map(char::to_uppercase) {
            let magnitude = self
                .table
                .magnitude_of(symbol)
                .ok_or_else(|| NumeralError::Format {
                    input: input.to_string(),
                })?;
            total += match previous {
                // The previous symbol was already added once
                Some(prev) if prev < magnitude => magnitude - 2 * prev,
                _ => magnitude,
            };
            previous = Some(magnitude);
        }

        tracing::trace!("decoded {} as {}", input, total);
        Ok(total)
    }
}

/// Append the symbols for one decimal digit. Returns false when the tier
/// lacks a symbol the digit needs.
fn push_digit(roman: &mut String, tier: &Tier, digit: u8) -> bool {
    let repeat = |roman: &mut String, count: u8| {
        roman.extend(std::iter::repeat_n(tier.one, count as usize));
    };

    match (digit, tier.five, tier.ten) {
        (0..=3, _, _) => repeat(roman, digit),
        (4, Some(five), _) => {
            roman.push(tier.one);
            roman.push(five);
        }
        (5..=8, Some(five), _) => {
            roman.push(five);
            repeat(roman, digit - 5);
        }
        (9, _, Some(ten)) => {
            roman.push(tier.one);
            roman.push(ten);
        }
        _ => return false,
    }
    true
}

/// Greedily match one tier: `one ten | one five | five? one{0,3}`.
///
/// Symbols of lower tiers never start with this tier's symbols, so greedy
/// matching accepts exactly what a backtracking regex would.
fn consume_tier<'a>(tier: &Tier, input: &'a [char]) -> &'a [char] {
    if let [first, second, rest @ ..] = input {
        if *first == tier.one && (Some(*second) == tier.ten || Some(*second) == tier.five) {
            return rest;
        }
    }

    let mut rest = input;
    if let (Some(five), Some((&first, tail))) = (tier.five, rest.split_first()) {
        if first == five {
            rest = tail;
        }
    }
    for _ in 0..3 {
        match rest.split_first() {
            Some((&first, tail)) if first == tier.one => rest = tail,
            _ => break,
        }
    }
    rest
}

// ============================================================================
// Standard-table Functions
// ============================================================================

/// Largest number representable with the standard table (3999).
#[inline]
pub fn get_max_parsable_number() -> i64 {
    RomanCodec::STANDARD.max_parsable_number()
}

/// Whether `input` is a well-formed standard Roman numeral.
#[inline]
pub fn is_valid_roman(input: &str) -> bool {
    RomanCodec::STANDARD.is_valid_roman(input)
}

/// Encode with the standard table.
#[inline]
pub fn encode(number: i64) -> NumeralResult<String> {
    RomanCodec::STANDARD.encode(number)
}

/// Decode with the standard table.
#[inline]
pub fn decode(input: &str) -> NumeralResult<i64> {
    RomanCodec::STANDARD.decode(input)
}
