//! Base58 multihash addresses, the alternate legacy digest form.
//!
//! Functionally parallel to the entry digest, but with a self-describing
//! sha2-256 multihash frame and the Bitcoin base58 alphabet instead of the
//! identifier framing.

use crate::error::{CodecError, Result};
use crate::multihash;

/// Encode digest bytes as a base58 sha2-256 multihash string.
pub fn encode(digest: &[u8]) -> String {
    bs58::encode(multihash::wrap(multihash::SHA2_256, digest)).into_string()
}

/// Decode a base58 multihash string back to the digest bytes.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let bytes = bs58::decode(text)
        .into_vec()
        .map_err(|e| CodecError::MalformedText(e.to_string()))?;
    let (_code, digest) = multihash::unwrap(&bytes)?;
    Ok(digest)
}
