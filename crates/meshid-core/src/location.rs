//! DHT location: the 4-byte checksum appended to framed identifiers.
//!
//! The location doubles as a shard placement coordinate and a corruption
//! check. It is not a cryptographic integrity guarantee.

use blake2::digest::consts::U16;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 128-bit BLAKE2b, the fixed digest behind the location fold.
type Blake2b128 = Blake2b<U16>;

/// Length of a location checksum in bytes.
pub const LOCATION_LEN: usize = 4;

/// A 4-byte DHT location computed from payload bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DhtLocation(pub [u8; LOCATION_LEN]);

impl DhtLocation {
    /// Compute the location of a payload.
    ///
    /// Takes a 16-byte BLAKE2b digest of the payload, then folds the three
    /// trailing 4-byte windows into the leading one with XOR. All 16 digest
    /// bytes participate; this is a fold, not a truncation.
    pub fn compute(payload: &[u8]) -> Self {
        let digest = Blake2b128::digest(payload);
        let mut loc = [digest[0], digest[1], digest[2], digest[3]];
        for window in [4, 8, 12] {
            for i in 0..LOCATION_LEN {
                loc[i] ^= digest[window + i];
            }
        }
        Self(loc)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; LOCATION_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; LOCATION_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Interpret as a big-endian shard coordinate.
    pub fn to_u32(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

impl fmt::Debug for DhtLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DhtLocation({})", self.to_hex())
    }
}

impl AsRef<[u8]> for DhtLocation {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; LOCATION_LEN]> for DhtLocation {
    fn from(bytes: [u8; LOCATION_LEN]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_location_deterministic() {
        let l1 = DhtLocation::compute(b"payload");
        let l2 = DhtLocation::compute(b"payload");
        assert_eq!(l1, l2);
    }

    #[test]
    fn test_location_known_pubkey() {
        // Tail bytes of the reference agent identifier.
        let pubkey: [u8; 32] = [
            161, 222, 128, 146, 233, 128, 11, 197, 77, 22, 0, 199, 102, 199, 105, 12, 19, 193,
            24, 250, 79, 198, 221, 144, 203, 23, 155, 141, 142, 179, 124, 113,
        ];
        assert_eq!(DhtLocation::compute(&pubkey).as_bytes(), &[144, 10, 68, 169]);
    }

    #[test]
    fn test_location_known_entry_bytes() {
        let entry: [u8; 32] = [
            88, 43, 0, 130, 130, 164, 145, 252, 50, 36, 8, 37, 143, 125, 49, 95, 241, 139, 45,
            95, 183, 5, 123, 133, 203, 141, 250, 107, 100, 170, 165, 193,
        ];
        assert_eq!(DhtLocation::compute(&entry).as_bytes(), &[48, 200, 28, 230]);
    }

    #[test]
    fn test_location_mixes_full_digest() {
        // A fold of all 16 digest bytes differs from plain truncation.
        let digest = Blake2b128::digest(b"fold check");
        let truncated = [digest[0], digest[1], digest[2], digest[3]];
        assert_ne!(DhtLocation::compute(b"fold check").as_bytes(), &truncated);
    }

    #[test]
    fn test_location_u32_is_big_endian() {
        let loc = DhtLocation::from_bytes([0x01, 0x02, 0x03, 0x04]);
        assert_eq!(loc.to_u32(), 0x0102_0304);
    }

    proptest! {
        #[test]
        fn test_single_byte_flip_changes_location(
            payload in prop::collection::vec(any::<u8>(), 1..256),
            index in any::<prop::sample::Index>(),
            flip in 1u8..=255,
        ) {
            let mut mutated = payload.clone();
            let i = index.index(mutated.len());
            mutated[i] ^= flip;
            prop_assert_ne!(
                DhtLocation::compute(&payload),
                DhtLocation::compute(&mutated)
            );
        }
    }
}
