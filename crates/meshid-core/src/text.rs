//! Base64 rendering, standard and text-safe.
//!
//! The text-safe variant replaces `+` with `-` and `/` with `_` so that
//! identifiers survive URLs and filenames untouched. Padding passes through
//! as-is; decoders accept both padded and unpadded input.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use crate::error::{CodecError, Result};

const LENIENT_PAD: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// URL-safe alphabet, tolerant of present or absent padding on decode.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT_PAD);

/// Standard alphabet with the same padding tolerance.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT_PAD);

/// Convert standard base64 text to the text-safe variant.
///
/// Pure character substitution: `+` becomes `-`, `/` becomes `_`, everything
/// else (padding included) is unchanged.
pub fn to_text_safe(b64: &str) -> String {
    b64.chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect()
}

/// Encode bytes as text-safe base64.
pub fn encode_text_safe(bytes: &[u8]) -> String {
    to_text_safe(&STANDARD.encode(bytes))
}

/// Decode text-safe base64.
///
/// Input containing the standard `+`/`/` characters is rejected with
/// [`CodecError::UnsupportedCharset`]; it is the caller's signal that a
/// string was never converted to the safe alphabet.
pub fn decode_text_safe(text: &str) -> Result<Vec<u8>> {
    if text.contains(['+', '/']) {
        return Err(CodecError::UnsupportedCharset);
    }
    URL_SAFE_LENIENT
        .decode(text)
        .map_err(|e| CodecError::MalformedText(e.to_string()))
}

/// Encode bytes as plain standard-alphabet base64.
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode plain standard-alphabet base64.
pub fn decode_base64(text: &str) -> Result<Vec<u8>> {
    STANDARD_LENIENT
        .decode(text)
        .map_err(|e| CodecError::MalformedText(e.to_string()))
}
