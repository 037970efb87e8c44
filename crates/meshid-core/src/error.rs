//! Error types for the meshid codec.

use thiserror::Error;

use crate::kind::IdKind;

/// Errors raised by encode/decode operations.
///
/// Every error is detected synchronously at the point of failure. There are
/// no transient failure modes and no partial results: an operation either
/// fully succeeds or fails before producing output.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A payload did not match a codec's fixed length requirement.
    #[error("invalid payload length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },

    /// An identifier kind outside the closed set was requested.
    #[error("unsupported identifier kind: {0:?}")]
    UnsupportedKind(String),

    /// Invalid character set, truncated input, or a missing tag character.
    #[error("malformed text: {0}")]
    MalformedText(String),

    /// A text-safe decode was given the standard base64 alphabet.
    #[error("text-safe decode given standard base64 alphabet ('+' or '/')")]
    UnsupportedCharset,

    /// Strict decode found a prefix other than the expected kind's.
    #[error("identifier prefix mismatch: expected {expected}, found 0x{}", hex::encode(.found))]
    KindMismatch { expected: IdKind, found: [u8; 3] },

    /// Strict decode found a checksum that does not match the payload.
    #[error("embedded checksum does not match payload location")]
    ChecksumMismatch,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CodecError>;
