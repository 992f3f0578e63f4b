// ============================================================================
// Digit Table
// Ordered magnitude-to-symbol mapping that drives every conversion
// ============================================================================

use crate::numeric::{NumeralError, NumeralResult};
use smallvec::SmallVec;

/// A single Roman symbol and the magnitude it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSymbol {
    pub magnitude: i64,
    pub symbol: char,
}

impl DigitSymbol {
    pub const fn new(magnitude: i64, symbol: char) -> Self {
        Self { magnitude, symbol }
    }
}

/// The symbols available at one decimal position.
///
/// `ten` is the `one` symbol of the next position and is absent for the
/// highest position of the table, as is `five` when the table ends on a
/// one-like magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    /// 10^position
    pub unit: i64,
    pub one: char,
    pub five: Option<char>,
    pub ten: Option<char>,
}

/// Tiers of a table, lowest position first.
pub type Tiers = SmallVec<[Tier; 8]>;

const STANDARD_SYMBOLS: [DigitSymbol; 7] = [
    DigitSymbol::new(1, 'I'),
    DigitSymbol::new(5, 'V'),
    DigitSymbol::new(10, 'X'),
    DigitSymbol::new(50, 'L'),
    DigitSymbol::new(100, 'C'),
    DigitSymbol::new(500, 'D'),
    DigitSymbol::new(1000, 'M'),
];

/// Ordered mapping from magnitudes (1, 5, 10, 50, ...) to symbols.
///
/// Every value of this type has passed validation, so the codec can rely on
/// the magnitudes forming the contiguous sequence `1, 5, 10, 50, 100, ...`
/// and on the symbols being unique.
///
/// # Example
/// ```
/// use roman_numerals::codec::{DigitSymbol, DigitTable};
///
/// static SMALL: [DigitSymbol; 3] = [
///     DigitSymbol::new(1, 'I'),
///     DigitSymbol::new(5, 'V'),
///     DigitSymbol::new(10, 'X'),
/// ];
///
/// let table = DigitTable::new(&SMALL).unwrap();
/// assert_eq!(table.max_parsable_number(), 39);
/// assert_eq!(DigitTable::STANDARD.max_parsable_number(), 3999);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitTable {
    entries: &'static [DigitSymbol],
    max: i64,
}

// ============================================================================
// Magnitude Arithmetic
// ============================================================================

/// Magnitude required at `index`: 1, 5, 10, 50, 100, ...
const fn expected_magnitude(index: usize) -> Option<i64> {
    let exponent = (index / 2) as u32;
    match 10i64.checked_pow(exponent) {
        Some(unit) if index % 2 == 1 => unit.checked_mul(5),
        Some(unit) => Some(unit),
        None => None,
    }
}

/// Largest number writable with the table.
///
/// With a one-like top magnitude `M` the top position holds at most three
/// `M`s, giving `4·M − 1`. With a five-like top it holds at most `five` plus
/// three `one`s, giving `2·M − 2·M/10 − 1`. Both hold for single-symbol
/// positions too: `{I}` yields 3 and `{I, V}` yields 8.
const fn derive_max(entries: &[DigitSymbol]) -> Option<i64> {
    if entries.is_empty() {
        return None;
    }
    let top_index = entries.len() - 1;
    let top = entries[top_index].magnitude;
    if top_index % 2 == 0 {
        match top.checked_mul(4) {
            Some(quadruple) => Some(quadruple - 1),
            None => None,
        }
    } else {
        match top.checked_mul(2) {
            Some(double) => Some(double - double / 10 - 1),
            None => None,
        }
    }
}

impl DigitTable {
    /// The classical table: I, V, X, L, C, D, M.
    pub const STANDARD: Self = Self::from_trusted(&STANDARD_SYMBOLS);

    const fn from_trusted(entries: &'static [DigitSymbol]) -> Self {
        let max = match derive_max(entries) {
            Some(max) => max,
            None => panic!("digit table must not be empty"),
        };
        Self { entries, max }
    }

    /// Create a table from custom entries, validating them first.
    ///
    /// # Errors
    /// Returns `InvalidTable` if the entries are empty, do not follow the
    /// magnitude sequence `1, 5, 10, 50, ...`, repeat a symbol, use a symbol
    /// that is not an uppercase ASCII letter, or describe a maximum that does
    /// not fit in `i64`.
    pub fn new(entries: &'static [DigitSymbol]) -> NumeralResult<Self> {
        Self::validate(entries).map_err(NumeralError::InvalidTable)?;
        let max = derive_max(entries)
            .ok_or_else(|| NumeralError::InvalidTable("max value overflows i64".to_string()))?;
        Ok(Self { entries, max })
    }

    /// Validate candidate table entries
    pub fn validate(entries: &[DigitSymbol]) -> Result<(), String> {
        if entries.is_empty() {
            return Err("table cannot be empty".to_string());
        }

        for (index, entry) in entries.iter().enumerate() {
            let expected = expected_magnitude(index)
                .ok_or_else(|| format!("magnitude at position {} overflows i64", index))?;
            if entry.magnitude != expected {
                return Err(format!(
                    "magnitude at position {} must be {}, found {}",
                    index, expected, entry.magnitude
                ));
            }

            if !entry.symbol.is_ascii_uppercase() {
                return Err(format!(
                    "symbol `{}` must be an uppercase ASCII letter",
                    entry.symbol
                ));
            }

            if entries[..index].iter().any(|e| e.symbol == entry.symbol) {
                return Err(format!("symbol `{}` is used more than once", entry.symbol));
            }
        }

        if derive_max(entries).is_none() {
            return Err("max value overflows i64".to_string());
        }

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Entries in ascending magnitude order.
    #[inline]
    pub const fn entries(&self) -> &'static [DigitSymbol] {
        self.entries
    }

    /// Largest number representable with this table.
    #[inline]
    pub const fn max_parsable_number(&self) -> i64 {
        self.max
    }

    /// Symbol of magnitude 1.
    #[inline]
    pub const fn unit_symbol(&self) -> char {
        self.entries[0].symbol
    }

    /// Magnitude of an uppercase symbol, if the table contains it.
    #[inline]
    pub fn magnitude_of(&self, symbol: char) -> Option<i64> {
        self.entries
            .iter()
            .find(|entry| entry.symbol == symbol)
            .map(|entry| entry.magnitude)
    }

    /// Group the entries into decimal positions, lowest first.
    pub fn tiers(&self) -> Tiers {
        self.entries
            .chunks(2)
            .enumerate()
            .map(|(position, pair)| Tier {
                unit: pair[0].magnitude,
                one: pair[0].symbol,
                five: pair.get(1).map(|entry| entry.symbol),
                ten: self.entries.get(2 * position + 2).map(|entry| entry.symbol),
            })
            .collect()
    }
}

impl Default for DigitTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
