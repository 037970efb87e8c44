//! Content digests: multihash-framed bytes wrapped as entry identifiers.
//!
//! The framing carries a hash-algorithm code, but the input bytes are framed
//! as-is; callers that want a true content hash supply digest bytes from an
//! external hasher. Structured values are first reduced to canonical JSON.

use serde_json::Value;

use crate::canonical::canonical_json_bytes;
use crate::error::Result;
use crate::identifier;
use crate::kind::IdKind;
use crate::multihash;
use crate::text;

/// Encode digest bytes as a textual entry-kind identifier.
pub fn encode(data: &[u8]) -> String {
    let framed = multihash::wrap(multihash::SHA2_512, data);
    identifier::encode(IdKind::Entry, &framed)
}

/// Encode a JSON value as an entry digest.
///
/// Strings are taken as their raw bytes; any other value is first reduced
/// to canonical JSON.
pub fn encode_json(value: &Value) -> String {
    encode(&value_bytes(value))
}

/// Decode an entry digest to its payload bytes.
///
/// Returns the multihash-framed bytes exactly as they were encoded; the
/// identifier prefix and checksum are stripped, not verified.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    identifier::decode(text)
}

/// Decode an entry digest, keeping the identifier framing intact.
pub fn decode_framed(text: &str) -> Result<Vec<u8>> {
    identifier::decode_full(text)
}

/// Legacy digest form: plain base64 of the sha2-256 multihash framing.
///
/// No identifier wrap and no tag character. Kept for addresses minted
/// before the framed form existed.
pub fn encode_legacy_bytes(data: &[u8]) -> String {
    text::encode_base64(&multihash::wrap(multihash::SHA2_256, data))
}

/// Legacy digest of a JSON value.
pub fn encode_legacy(value: &Value) -> String {
    encode_legacy_bytes(&value_bytes(value))
}

fn value_bytes(value: &Value) -> Vec<u8> {
    match value {
        Value::String(s) => s.clone().into_bytes(),
        other => canonical_json_bytes(other),
    }
}
