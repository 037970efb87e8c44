//! Signature values: opaque authentication tags as plain base64.
//!
//! No prefix, no checksum, no tag character; signature bytes round-trip
//! exactly. Producing and verifying signatures is the signing subsystem's
//! job, not this crate's.

use crate::error::Result;
use crate::text;

/// Encode signature bytes as plain base64.
pub fn encode(bytes: &[u8]) -> String {
    text::encode_base64(bytes)
}

/// Decode a base64 signature string.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    text::decode_base64(text)
}
