//! Base36: fixed lowercase alphanumeric big-number encoding.
//!
//! Used for legacy URL-hostname address forms, where the full base64
//! alphabet is unavailable. Arbitrary-precision base conversion with no
//! padding; leading zero bytes are preserved as leading `'0'` characters.

use crate::error::{CodecError, Result};

/// The fixed base36 alphabet.
pub const ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Encode bytes as base36 text.
pub fn encode(bytes: &[u8]) -> String {
    base_x::encode(ALPHABET, bytes)
}

/// Decode base36 text back to bytes.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    base_x::decode(ALPHABET, text)
        .map_err(|_| CodecError::MalformedText(format!("invalid base36 text: {text:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PUBKEY: [u8; 32] = [
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
        25, 26, 27, 28, 29, 30, 31, 32,
    ];

    const URL_ID: &str = "wjzlh5yt3uk0mzpcor0i12ol0rrpxdydzggt4b2fvr8yealc";

    #[test]
    fn test_encode_known_key() {
        assert_eq!(encode(&PUBKEY), URL_ID);
    }

    #[test]
    fn test_decode_known_id() {
        assert_eq!(decode(URL_ID).unwrap(), PUBKEY);
    }

    #[test]
    fn test_leading_zeros_preserved() {
        let bytes = [0u8, 0, 0, 7];
        let text = encode(&bytes);
        assert!(text.starts_with("000"));
        assert_eq!(decode(&text).unwrap(), bytes);
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_rejects_foreign_characters() {
        assert!(matches!(
            decode("WJZLH"),
            Err(CodecError::MalformedText(_))
        ));
        assert!(matches!(
            decode("abc-def"),
            Err(CodecError::MalformedText(_))
        ));
    }

    proptest! {
        #[test]
        fn test_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            prop_assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
        }
    }
}
