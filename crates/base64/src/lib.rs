//! Base64 encoding and decoding (RFC 4648).
//!
//! This crate provides:
//! - Standard base64 with `=` padding
//! - URL-safe base64 (`-` and `_`), padded with `.`
//! - PEM (64 columns) and MIME (76 columns) line-wrapped output
//! - A single decoder accepting both alphabets, both padding characters
//!   and, optionally, wrapped input
//!
//! # Example
//!
//! ```
//! use base64_codec::{decode, encode, encode_mime};
//!
//! let data = b"hello world";
//! let encoded = encode(data, false);
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//! assert_eq!(decode(&encoded, false).unwrap(), data);
//!
//! let wrapped = encode_mime(data);
//! assert_eq!(decode(&wrapped, true).unwrap(), data);
//! ```

mod alphabet;
mod constants;
mod decode;
mod decode_table;
mod encode;
mod error;
mod wrap;

pub use alphabet::Alphabet;
pub use constants::{
    ALPHABET, ALPHABET_BYTES, ALPHABET_URL, ALPHABET_URL_BYTES, LINE_BREAK, MIME_LINE_WIDTH, PAD,
    PAD_URL, PEM_LINE_WIDTH,
};
pub use decode::{decode, decoded_len_estimate};
pub use encode::{encode, encode_with, encoded_len};
pub use error::{Base64Error, Result};
pub use wrap::{encode_mime, encode_pem, insert_linebreaks};
