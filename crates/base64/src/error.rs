use thiserror::Error;

/// Error type for base64 decoding.
///
/// Every variant means the input is not well-formed base64. Offsets are byte
/// offsets into the decoded text, after any line-break stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Base64Error {
    /// A byte outside both alphabets, or padding where data is required.
    #[error("invalid base64 input: unexpected byte 0x{byte:02x} at offset {offset}")]
    InvalidByte { offset: usize, byte: u8 },
    /// The final chunk holds a single character, which cannot encode a byte.
    #[error("invalid base64 input: dangling character at offset {offset}")]
    TruncatedChunk { offset: usize },
}

impl Base64Error {
    /// Offset of the offending character.
    pub fn offset(&self) -> usize {
        match *self {
            Base64Error::InvalidByte { offset, .. } | Base64Error::TruncatedChunk { offset } => {
                offset
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Base64Error>;
