//! The 32-symbol geohash code book and its inverse.
//!
//! Symbols are the digits `0-9` followed by the lowercase letters `b-z`
//! without `a`, `i`, `l` and `o`. Symbol `i` of [`ALPHABET`] carries the
//! 5-bit value `i`. Both tables are compile-time constants.

use crate::error::GeohashError;

/// Symbol table, indexed by 5-bit value.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Number of bits carried by one symbol.
pub const BITS_PER_SYMBOL: u32 = 5;

const NOT_A_SYMBOL: u8 = u8::MAX;

/// ASCII byte to 5-bit value. Uppercase letters share the entry of their
/// lowercase form; every other byte maps to [`NOT_A_SYMBOL`].
static INVERSE: [u8; 128] = build_inverse();

const fn build_inverse() -> [u8; 128] {
    let mut table = [NOT_A_SYMBOL; 128];
    let mut value = 0;
    while value < ALPHABET.len() {
        let symbol = ALPHABET[value];
        table[symbol as usize] = value as u8;
        table[symbol.to_ascii_uppercase() as usize] = value as u8;
        value += 1;
    }
    table
}

/// Returns the lowercase symbol for a 5-bit `value`.
///
/// # Panics
///
/// Panics if `value >= 32`.
#[inline]
pub fn symbol(value: u8) -> char {
    ALPHABET[value as usize] as char
}

/// Looks up the 5-bit value of `c`, ignoring ASCII case.
///
/// `index` is only used to fill in [`GeohashError::InvalidSymbol`].
#[inline]
pub fn value_of(c: char, index: usize) -> Result<u8, GeohashError> {
    match INVERSE.get(c as usize) {
        Some(&value) if value != NOT_A_SYMBOL => Ok(value),
        _ => Err(GeohashError::InvalidSymbol { symbol: c, index }),
    }
}

/// Value of a byte already known to be a lowercase symbol, as held by a
/// validated [`GeoHash`](crate::GeoHash).
#[inline]
pub(crate) fn value_of_byte(b: u8) -> u8 {
    let value = INVERSE[usize::from(b & 0x7f)];
    debug_assert!(value != NOT_A_SYMBOL, "{b:#04x} is not a geohash symbol");
    value
}
