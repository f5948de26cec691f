//! Reverse lookup from symbol byte to 6-bit value.

use crate::constants::{ALPHABET_BYTES, ALPHABET_URL_BYTES};

/// Marks bytes that are not part of either alphabet.
pub(crate) const INVALID: u8 = 0xff;

/// Built once at compile time. The URL-safe symbols `-` and `_` map to the
/// same values as `+` and `/`, so a single table decodes both alphabets.
static DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        table[ALPHABET_URL_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Returns the 6-bit value of `byte`, or `None` if it is not a base64 symbol.
#[inline]
pub(crate) fn sextet(byte: u8) -> Option<u8> {
    match DECODE_TABLE[byte as usize] {
        INVALID => None,
        value => Some(value),
    }
}
