//! Base64 decoding.

use crate::alphabet::Alphabet;
use crate::constants::LINE_BREAK;
use crate::decode_table::sextet;
use crate::{Base64Error, Result};

/// Upper bound of the decoded size of `n` encoded characters.
pub const fn decoded_len_estimate(n: usize) -> usize {
    n / 4 * 3 + 3
}

/// Decodes a base64 string.
///
/// Both alphabets and both padding characters (`=` and `.`) are accepted.
/// Unpadded trailing chunks are tolerated, but every chunk must carry at
/// least two characters. With `strip_linebreaks` set, all `\n` characters are
/// removed before decoding, so wrapped PEM/MIME output decodes directly.
///
/// On failure no partial output is returned.
///
/// # Example
///
/// ```
/// use base64_codec::{decode, Base64Error};
///
/// assert_eq!(decode("TWFu", false).unwrap(), b"Man");
/// assert_eq!(decode("TQ", false).unwrap(), b"M");
/// assert_eq!(decode("-_8.", false).unwrap(), [0xfb, 0xff]);
/// assert!(matches!(
///     decode("A!B=", false),
///     Err(Base64Error::InvalidByte { offset: 1, byte: b'!' })
/// ));
/// ```
pub fn decode(input: impl AsRef<[u8]>, strip_linebreaks: bool) -> Result<Vec<u8>> {
    let input = input.as_ref();
    if strip_linebreaks {
        let stripped: Vec<u8> = input
            .iter()
            .copied()
            .filter(|&b| b != LINE_BREAK as u8)
            .collect();
        log::trace!(
            "stripped {} line breaks before decoding",
            input.len() - stripped.len()
        );
        decode_chunks(&stripped)
    } else {
        decode_chunks(input)
    }
}

fn decode_chunks(encoded: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(decoded_len_estimate(encoded.len()));

    for (index, chunk) in encoded.chunks(4).enumerate() {
        let base = index * 4;
        decode_chunk(chunk, base, &mut out).inspect_err(|err| {
            log::debug!("rejecting base64 input: {}", err);
        })?;
    }

    Ok(out)
}

/// Appends the 1 to 3 bytes encoded by `chunk`, which starts at `base`.
fn decode_chunk(chunk: &[u8], base: usize, out: &mut Vec<u8>) -> Result<()> {
    if chunk.len() < 2 {
        return Err(Base64Error::TruncatedChunk { offset: base });
    }

    let lookup = |i: usize| {
        let byte = chunk[i];
        sextet(byte).ok_or(Base64Error::InvalidByte {
            offset: base + i,
            byte,
        })
    };

    let s0 = lookup(0)?;
    let s1 = lookup(1)?;
    out.push((s0 << 2) | (s1 >> 4));

    // A padded (or missing) third character ends the chunk, whatever follows it.
    if chunk.len() < 3 || Alphabet::is_padding(chunk[2]) {
        return Ok(());
    }
    let s2 = lookup(2)?;
    out.push(((s1 & 0x0f) << 4) | (s2 >> 2));

    if chunk.len() < 4 || Alphabet::is_padding(chunk[3]) {
        return Ok(());
    }
    let s3 = lookup(3)?;
    out.push(((s2 & 0x03) << 6) | s3);

    Ok(())
}
