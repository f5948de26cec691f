//! Line-wrapped encoders (PEM and MIME).

use crate::alphabet::Alphabet;
use crate::constants::{LINE_BREAK, MIME_LINE_WIDTH, PEM_LINE_WIDTH};
use crate::encode::encode_with;

/// Inserts a line break after every `width` characters of `encoded`.
///
/// Breaks are placed by raw character count and never trail the last line.
/// A `width` of zero leaves the input unchanged.
///
/// # Example
///
/// ```
/// use base64_codec::insert_linebreaks;
///
/// assert_eq!(insert_linebreaks("abcdefgh", 3), "abc\ndef\ngh");
/// assert_eq!(insert_linebreaks("abcdef", 3), "abc\ndef");
/// ```
pub fn insert_linebreaks(encoded: &str, width: usize) -> String {
    if width == 0 || encoded.len() <= width {
        return encoded.to_owned();
    }

    let mut out = String::with_capacity(encoded.len() + encoded.len() / width);
    for (i, c) in encoded.chars().enumerate() {
        if i > 0 && i % width == 0 {
            out.push(LINE_BREAK);
        }
        out.push(c);
    }
    out
}

/// Encodes with the standard alphabet, wrapped at 64 columns.
pub fn encode_pem(input: impl AsRef<[u8]>) -> String {
    insert_linebreaks(&encode_with(input, Alphabet::Standard), PEM_LINE_WIDTH)
}

/// Encodes with the standard alphabet, wrapped at 76 columns.
///
/// # Example
///
/// ```
/// use base64_codec::{decode, encode_mime};
///
/// let data = vec![0u8; 60];
/// let wrapped = encode_mime(&data);
/// assert_eq!(wrapped.find('\n'), Some(76));
/// assert_eq!(decode(&wrapped, true).unwrap(), data);
/// ```
pub fn encode_mime(input: impl AsRef<[u8]>) -> String {
    insert_linebreaks(&encode_with(input, Alphabet::Standard), MIME_LINE_WIDTH)
}
