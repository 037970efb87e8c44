//! Identifier framing: build, render, parse, and strip.
//!
//! A binary identifier is `prefix(3) ‖ payload ‖ location(4)`; its textual
//! form is the tag character followed by text-safe base64 of those bytes.
//! The location always covers the payload alone, never the prefix.

use crate::error::{CodecError, Result};
use crate::kind::{IdKind, PREFIX_LEN};
use crate::location::{DhtLocation, LOCATION_LEN};
use crate::text;

/// Tag character marking a text-safe, self-describing identifier.
pub const TAG: char = 'u';

/// Bytes of framing around a payload: 3-byte prefix plus 4-byte location.
pub const FRAME_LEN: usize = PREFIX_LEN + LOCATION_LEN;

/// Assemble the binary identifier for a kind and payload.
pub fn build(kind: IdKind, payload: &[u8]) -> Vec<u8> {
    build_framed(&kind.prefix(), payload)
}

/// Assemble a binary identifier with a caller-supplied prefix.
pub fn build_framed(prefix: &[u8; PREFIX_LEN], payload: &[u8]) -> Vec<u8> {
    let mut id = Vec::with_capacity(FRAME_LEN + payload.len());
    id.extend_from_slice(prefix);
    id.extend_from_slice(payload);
    id.extend_from_slice(DhtLocation::compute(payload).as_bytes());
    id
}

/// Render a binary identifier as tagged text-safe base64.
pub fn render(id: &[u8]) -> String {
    format!("{TAG}{}", text::encode_text_safe(id))
}

/// Encode payload bytes as a textual identifier of the given kind.
pub fn encode(kind: IdKind, payload: &[u8]) -> String {
    render(&build(kind, payload))
}

/// Parse a textual identifier back to its binary form.
///
/// Strips the leading tag and decodes the text-safe base64. The framing is
/// not inspected; use [`decode`] or [`decode_strict`] for that.
pub fn parse(text: &str) -> Result<Vec<u8>> {
    let rest = text.strip_prefix(TAG).ok_or_else(|| {
        CodecError::MalformedText(format!("identifier must start with the '{TAG}' tag"))
    })?;
    text::decode_text_safe(rest)
}

/// Decode a textual identifier to its payload bytes.
///
/// Structural strip only: the 3-byte prefix and 4-byte checksum are removed
/// without being verified, so corrupted or mis-typed identifiers decode
/// silently. [`decode_strict`] is the verifying variant.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let id = parse(text)?;
    let (_, payload, _) = split(&id)?;
    Ok(payload.to_vec())
}

/// Decode a textual identifier, keeping prefix and checksum intact.
pub fn decode_full(text: &str) -> Result<Vec<u8>> {
    parse(text)
}

/// Decode and verify a textual identifier.
///
/// The prefix must match the expected kind and the embedded checksum must
/// equal the payload's computed location.
pub fn decode_strict(kind: IdKind, text: &str) -> Result<Vec<u8>> {
    let id = parse(text)?;
    let (prefix, payload, location) = split(&id)?;
    if prefix != kind.prefix() {
        return Err(CodecError::KindMismatch {
            expected: kind,
            found: prefix,
        });
    }
    if &location != DhtLocation::compute(payload).as_bytes() {
        return Err(CodecError::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}

/// Split a binary identifier into prefix, payload, and location bytes.
fn split(id: &[u8]) -> Result<([u8; PREFIX_LEN], &[u8], [u8; LOCATION_LEN])> {
    if id.len() < FRAME_LEN {
        return Err(CodecError::MalformedText(format!(
            "identifier too short: {} bytes, need at least {FRAME_LEN}",
            id.len()
        )));
    }
    let mut prefix = [0u8; PREFIX_LEN];
    prefix.copy_from_slice(&id[..PREFIX_LEN]);
    let mut location = [0u8; LOCATION_LEN];
    location.copy_from_slice(&id[id.len() - LOCATION_LEN..]);
    Ok((prefix, &id[PREFIX_LEN..id.len() - LOCATION_LEN], location))
}
