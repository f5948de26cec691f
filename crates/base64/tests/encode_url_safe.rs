//! Tests for URL-safe base64 encoding and decoding.

mod common;

use base64_codec::{decode, encode, Alphabet};
use common::generate_blob;

#[test]
fn matches_standard_with_substitutions() {
    for _ in 0..100 {
        let blob = generate_blob(0..=100);
        let expected = encode(&blob, false)
            .replace('+', "-")
            .replace('/', "_")
            .replace('=', ".");
        assert_eq!(encode(&blob, true), expected);
    }
}

#[test]
fn never_emits_standard_only_symbols() {
    let data: Vec<u8> = (0..=255).collect();
    let encoded = encode(&data, true);
    assert!(!encoded.contains('+'));
    assert!(!encoded.contains('/'));
    assert!(!encoded.contains('='));
    assert!(encoded.contains('-'));
    assert!(encoded.contains('_'));
}

#[test]
fn padding() {
    assert_eq!(encode("M", true), "TQ..");
    assert_eq!(encode("Ma", true), "TWE.");
    assert_eq!(Alphabet::UrlSafe.padding(), '.');
}

#[test]
fn round_trip() {
    for _ in 0..100 {
        let blob = generate_blob(0..=100);
        assert_eq!(decode(encode(&blob, true), false).unwrap(), blob);
    }
}
