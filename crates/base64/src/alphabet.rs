//! Alphabet selection.

use crate::constants::{ALPHABET_BYTES, ALPHABET_URL_BYTES, PAD, PAD_URL};

/// One of the two supported base64 alphabets.
///
/// Both share the first 62 symbols. They differ in the last two symbols
/// (`+/` vs `-_`) and in the padding character (`=` vs `.`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alphabet {
    /// `A-Z a-z 0-9 + /`, padded with `=`.
    #[default]
    Standard,
    /// `A-Z a-z 0-9 - _`, padded with `.`.
    UrlSafe,
}

impl Alphabet {
    /// Maps the `url_safe` flag of [`encode`](crate::encode) onto an alphabet.
    pub const fn from_url_safe(url_safe: bool) -> Self {
        if url_safe {
            Alphabet::UrlSafe
        } else {
            Alphabet::Standard
        }
    }

    /// The 64 symbols, indexed by 6-bit value.
    pub const fn symbols(self) -> &'static [u8; 64] {
        match self {
            Alphabet::Standard => ALPHABET_BYTES,
            Alphabet::UrlSafe => ALPHABET_URL_BYTES,
        }
    }

    /// The padding character.
    pub const fn padding(self) -> char {
        match self {
            Alphabet::Standard => PAD,
            Alphabet::UrlSafe => PAD_URL,
        }
    }

    /// Returns true for the padding character of either alphabet.
    pub const fn is_padding(byte: u8) -> bool {
        byte == PAD as u8 || byte == PAD_URL as u8
    }
}
