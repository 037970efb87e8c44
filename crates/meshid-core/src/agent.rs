//! Agent identifiers: 32-byte public keys under the agent prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CodecError, Result};
use crate::identifier;
use crate::kind::IdKind;

/// Length of an agent public key in bytes.
pub const PUBKEY_LEN: usize = 32;

/// Length of a fully framed agent identifier in bytes.
pub const FRAMED_LEN: usize = identifier::FRAME_LEN + PUBKEY_LEN;

/// A 32-byte agent public key.
///
/// The raw key bytes come from an external signing subsystem; this type only
/// carries them through the identifier framing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentPubKey(pub [u8; PUBKEY_LEN]);

impl AgentPubKey {
    /// Create from a byte slice, enforcing the fixed key length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PUBKEY_LEN {
            return Err(CodecError::InvalidLength {
                expected: PUBKEY_LEN,
                got: bytes.len(),
            });
        }
        let mut key = [0u8; PUBKEY_LEN];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    /// Get the raw key bytes.
    pub const fn as_bytes(&self) -> &[u8; PUBKEY_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Encode as a textual agent identifier.
    pub fn encode(&self) -> String {
        identifier::encode(IdKind::Agent, &self.0)
    }

    /// Decode a textual agent identifier back to the public key.
    ///
    /// Structural decode: prefix and checksum are stripped, not verified.
    /// The remaining payload must be exactly 32 bytes.
    pub fn decode(text: &str) -> Result<Self> {
        let payload = identifier::decode(text)?;
        Self::from_bytes(&payload)
    }

    /// Decode a textual agent identifier, keeping the framing intact.
    pub fn decode_framed(text: &str) -> Result<Vec<u8>> {
        identifier::decode_full(text)
    }

    /// Build the framed binary identifier for this key.
    pub fn to_framed(&self) -> Vec<u8> {
        identifier::build(IdKind::Agent, &self.0)
    }
}

impl fmt::Debug for AgentPubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentPubKey({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for AgentPubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl AsRef<[u8]> for AgentPubKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; PUBKEY_LEN]> for AgentPubKey {
    fn from(bytes: [u8; PUBKEY_LEN]) -> Self {
        Self(bytes)
    }
}

/// Re-render an already framed 39-byte agent identifier as text.
pub fn encode_framed(framed: &[u8]) -> Result<String> {
    if framed.len() != FRAMED_LEN {
        return Err(CodecError::InvalidLength {
            expected: FRAMED_LEN,
            got: framed.len(),
        });
    }
    Ok(identifier::render(framed))
}
