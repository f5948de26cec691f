//! Base64 encoding.

use crate::alphabet::Alphabet;

/// Length of the encoded form of `n` input bytes: `ceil(n / 3) * 4`.
pub const fn encoded_len(n: usize) -> usize {
    n.div_ceil(3) * 4
}

/// Encodes bytes to a base64 string.
///
/// With `url_safe` set, the URL-safe alphabet is used and the output is
/// padded with `.` instead of `=`.
///
/// # Example
///
/// ```
/// use base64_codec::encode;
///
/// assert_eq!(encode("Man", false), "TWFu");
/// assert_eq!(encode("M", false), "TQ==");
/// assert_eq!(encode([0xfb, 0xff], true), "-_8.");
/// ```
pub fn encode(input: impl AsRef<[u8]>, url_safe: bool) -> String {
    encode_with(input, Alphabet::from_url_safe(url_safe))
}

/// Encodes bytes to a base64 string using the given alphabet.
pub fn encode_with(input: impl AsRef<[u8]>, alphabet: Alphabet) -> String {
    let input = input.as_ref();
    let symbols = alphabet.symbols();
    let pad = alphabet.padding();
    let mut out = String::with_capacity(encoded_len(input.len()));

    let mut chunks = input.chunks_exact(3);
    for chunk in &mut chunks {
        let (o1, o2, o3) = (chunk[0], chunk[1], chunk[2]);
        out.push(symbols[(o1 >> 2) as usize] as char);
        out.push(symbols[(((o1 & 0x03) << 4) | (o2 >> 4)) as usize] as char);
        out.push(symbols[(((o2 & 0x0f) << 2) | (o3 >> 6)) as usize] as char);
        out.push(symbols[(o3 & 0x3f) as usize] as char);
    }

    match *chunks.remainder() {
        [o1] => {
            out.push(symbols[(o1 >> 2) as usize] as char);
            out.push(symbols[((o1 & 0x03) << 4) as usize] as char);
            out.push(pad);
            out.push(pad);
        }
        [o1, o2] => {
            out.push(symbols[(o1 >> 2) as usize] as char);
            out.push(symbols[(((o1 & 0x03) << 4) | (o2 >> 4)) as usize] as char);
            out.push(symbols[((o2 & 0x0f) << 2) as usize] as char);
            out.push(pad);
        }
        _ => {}
    }

    out
}
