// ============================================================================
// Codec Module
// Conversion between integers and Roman numeral strings
// ============================================================================
//
// This module provides:
// - DigitTable: validated magnitude-to-symbol table (STANDARD = I V X L C D M)
// - RomanCodec: encode / decode / validate bound to a table
// - Free functions over the standard table
//
// Every rule (max value, tier symbols, validation grammar) is derived from the
// table, never from hardcoded symbols.

mod roman;
mod table;

pub use roman::{decode, encode, get_max_parsable_number, is_valid_roman, RomanCodec};
pub use table::{DigitSymbol, DigitTable, Tier, Tiers};
