/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL-safe base64 alphabet (uses - and _ instead of + and /).
pub const ALPHABET_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// URL-safe base64 alphabet as a byte array.
pub const ALPHABET_URL_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Padding character of the standard alphabet.
pub const PAD: char = '=';

/// Padding character of the URL-safe alphabet.
pub const PAD_URL: char = '.';

/// Column width of PEM-style wrapped output.
pub const PEM_LINE_WIDTH: usize = 64;

/// Column width of MIME-style (RFC 2045) wrapped output.
pub const MIME_LINE_WIDTH: usize = 76;

/// Character inserted between wrapped lines.
pub const LINE_BREAK: char = '\n';
