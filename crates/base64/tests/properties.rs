//! Property tests for the codec laws.

use base64_codec::{decode, encode, encode_mime, encode_pem, encoded_len};
use proptest::prelude::*;

proptest! {
    #[test]
    fn round_trip_standard(data in prop::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(decode(encode(&data, false), false).unwrap(), data);
    }

    #[test]
    fn round_trip_url_safe(data in prop::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(decode(encode(&data, true), false).unwrap(), data);
    }

    #[test]
    fn round_trip_wrapped(data in prop::collection::vec(any::<u8>(), 0..1024)) {
        prop_assert_eq!(decode(encode_mime(&data), true).unwrap(), data.clone());
        prop_assert_eq!(decode(encode_pem(&data), true).unwrap(), data);
    }

    #[test]
    fn length_law(data in prop::collection::vec(any::<u8>(), 0..512), url_safe in any::<bool>()) {
        let encoded = encode(&data, url_safe);
        prop_assert_eq!(encoded.len(), encoded_len(data.len()));
        prop_assert_eq!(encoded.len(), data.len().div_ceil(3) * 4);
        prop_assert_eq!(encoded.len() % 4, 0);
    }

    #[test]
    fn url_safe_substitutes_symbols(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let standard = encode(&data, false);
        let url = encode(&data, true);
        let expected: String = standard
            .chars()
            .map(|c| match c {
                '+' => '-',
                '/' => '_',
                '=' => '.',
                c => c,
            })
            .collect();
        prop_assert_eq!(url, expected);
    }

    #[test]
    fn wrapped_lines_respect_width(data in prop::collection::vec(any::<u8>(), 0..1024)) {
        let wrapped = encode_mime(&data);
        let lines: Vec<&str> = wrapped.split('\n').collect();
        let last = lines.len() - 1;
        for (i, line) in lines.iter().enumerate() {
            if i < last {
                prop_assert_eq!(line.len(), 76);
            } else {
                prop_assert!(line.len() <= 76);
            }
        }
    }

    #[test]
    fn never_panics_on_arbitrary_input(input in prop::collection::vec(any::<u8>(), 0..64), strip in any::<bool>()) {
        let _ = decode(&input, strip);
    }
}
