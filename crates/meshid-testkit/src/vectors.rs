//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the wire form of every codec: identical inputs must
//! produce identical text across all implementations, byte for byte.

/// An agent identifier vector: public key, framed bytes, and text.
#[derive(Debug, Clone)]
pub struct AgentVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The 32-byte public key.
    pub pubkey: [u8; 32],
    /// The full framed identifier (prefix + key + location).
    pub framed: &'static [u8],
    /// The tagged textual identifier.
    pub text: &'static str,
}

/// A plain bytes-to-text vector (base36, signature, plain base64).
#[derive(Debug, Clone)]
pub struct BytesTextVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Input bytes.
    pub bytes: &'static [u8],
    /// Expected text.
    pub text: &'static str,
}

/// An entry-framing vector: raw bytes, framed bytes, and text.
#[derive(Debug, Clone)]
pub struct EntryVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The raw payload bytes.
    pub raw: &'static [u8],
    /// The full framed identifier.
    pub framed: &'static [u8],
    /// The tagged textual identifier.
    pub text: &'static str,
}

/// A base58 multihash vector: the preimage is sha256-hashed before framing.
#[derive(Debug, Clone)]
pub struct Base58Vector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Bytes whose sha256 digest gets framed.
    pub preimage: &'static [u8],
    /// Expected base58 multihash string.
    pub text: &'static str,
}

/// A legacy digest vector over a structured JSON value.
#[derive(Debug, Clone)]
pub struct LegacyDigestVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The JSON document, as the caller would hold it.
    pub json: &'static str,
    /// Expected plain-base64 multihash text.
    pub text: &'static str,
}

/// The reference agent identifier vector.
pub fn agent_vector() -> AgentVector {
    AgentVector {
        name: "reference agent pubkey",
        pubkey: [
            161, 222, 128, 146, 233, 128, 11, 197, 77, 22, 0, 199, 102, 199, 105, 12, 19, 193,
            24, 250, 79, 198, 221, 144, 203, 23, 155, 141, 142, 179, 124, 113,
        ],
        framed: &[
            132, 32, 36, 161, 222, 128, 146, 233, 128, 11, 197, 77, 22, 0, 199, 102, 199, 105,
            12, 19, 193, 24, 250, 79, 198, 221, 144, 203, 23, 155, 141, 142, 179, 124, 113, 144,
            10, 68, 169,
        ],
        text: "uhCAkod6AkumAC8VNFgDHZsdpDBPBGPpPxt2QyxebjY6zfHGQCkSp",
    }
}

/// Base36 address vectors.
pub fn base36_vectors() -> Vec<BytesTextVector> {
    vec![BytesTextVector {
        name: "counting key bytes",
        bytes: &[
            1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
            24, 25, 26, 27, 28, 29, 30, 31, 32,
        ],
        text: "wjzlh5yt3uk0mzpcor0i12ol0rrpxdydzggt4b2fvr8yealc",
    }]
}

/// Signature round-trip vectors.
pub fn signature_vectors() -> Vec<BytesTextVector> {
    vec![
        BytesTextVector {
            name: "example 1",
            bytes: b"example 1",
            text: "ZXhhbXBsZSAx",
        },
        BytesTextVector {
            name: "example 2",
            bytes: b"example 2",
            text: "ZXhhbXBsZSAy",
        },
    ]
}

/// Plain standard-alphabet base64 vector; needs both '+' and '/'.
pub fn base64_vector() -> BytesTextVector {
    BytesTextVector {
        name: "framed bytes with standard alphabet",
        bytes: &[
            132, 32, 36, 76, 86, 2, 7, 143, 63, 7, 31, 208, 188, 164, 15, 85, 43, 151, 1, 95,
            44, 44, 114, 137, 94, 184, 122, 101, 47, 24, 85, 237, 140, 118, 203, 210, 129, 206,
            234,
        ],
        text: "hCAkTFYCB48/Bx/QvKQPVSuXAV8sLHKJXrh6ZS8YVe2MdsvSgc7q",
    }
}

/// The reference entry-framing vector.
pub fn entry_vector() -> EntryVector {
    EntryVector {
        name: "entry framing of raw digest bytes",
        raw: &[
            88, 43, 0, 130, 130, 164, 145, 252, 50, 36, 8, 37, 143, 125, 49, 95, 241, 139, 45,
            95, 183, 5, 123, 133, 203, 141, 250, 107, 100, 170, 165, 193,
        ],
        framed: &[
            132, 33, 36, 88, 43, 0, 130, 130, 164, 145, 252, 50, 36, 8, 37, 143, 125, 49, 95,
            241, 139, 45, 95, 183, 5, 123, 133, 203, 141, 250, 107, 100, 170, 165, 193, 48, 200,
            28, 230,
        ],
        text: "uhCEkWCsAgoKkkfwyJAglj30xX_GLLV-3BXuFy436a2SqpcEwyBzm",
    }
}

/// Base58 multihash vectors.
pub fn base58_vectors() -> Vec<Base58Vector> {
    vec![
        Base58Vector {
            name: "sha256 of cafe",
            preimage: &[0xca, 0xfe],
            text: "QmNZAJfVYoCASiPc3uYZXrvhRFbxJLxG18R2Ga4ZXfP4kR",
        },
        Base58Vector {
            name: "sha256 of babe",
            preimage: &[0xba, 0xbe],
            text: "QmeTu8d5sUNULwS72NxLNTMhLZfPma4qcWvG2LqxiUz1Gf",
        },
    ]
}

/// The legacy structured-digest vector.
pub fn legacy_digest_vector() -> LegacyDigestVector {
    LegacyDigestVector {
        name: "structured json document",
        json: r#"{"test":"information","steps":{"process":["data will be hashed into a","sha256 multihash then","encoded"],"base":64}}"#,
        text: "EnV7InN0ZXBzIjp7ImJhc2UiOjY0LCJwcm9jZXNzIjpbImRhdGEgd2lsbCBiZSBoYXNoZWQgaW50byBhIiwic2hhMjU2IG11bHRpaGFzaCB0aGVuIiwiZW5jb2RlZCJdfSwidGVzdCI6ImluZm9ybWF0aW9uIn0=",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshid_core::identifier;

    #[test]
    fn test_agent_vector_is_consistent() {
        let v = agent_vector();
        assert_eq!(v.framed.len(), 39);
        assert_eq!(&v.framed[3..35], &v.pubkey);
        // Text is the rendered framed bytes.
        assert_eq!(identifier::render(v.framed), v.text);
    }

    #[test]
    fn test_entry_vector_is_consistent() {
        let v = entry_vector();
        assert_eq!(v.framed.len(), 3 + v.raw.len() + 4);
        assert_eq!(&v.framed[..3], &[132, 33, 36]);
        assert_eq!(&v.framed[3..35], v.raw);
    }
}
