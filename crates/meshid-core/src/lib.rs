//! # Meshid Core
//!
//! Self-describing binary identifier codec for a content-addressed mesh:
//! raw byte sequences (public keys, content digests, arbitrary payloads)
//! in and out of compact, checksummed, text-safe identifiers.
//!
//! This crate contains no I/O, no storage, no networking, and no key
//! material handling. It is pure computation over byte sequences: every
//! operation is synchronous, stateless, and safe to call from any thread.
//!
//! ## Key Types
//!
//! - [`IdKind`] - The closed set of identifier kinds and their prefixes
//! - [`DhtLocation`] - The 4-byte checksum and shard coordinate
//! - [`AgentPubKey`] - A 32-byte public key under the agent prefix
//! - [`CodecError`] - Every way an encode or decode can fail
//!
//! ## Framing
//!
//! A binary identifier is `prefix(3) ‖ payload ‖ location(4)`; its textual
//! form is `'u'` followed by text-safe base64. See [`identifier`].
//! The permissive [`identifier::decode`] strips the framing without
//! verifying it; [`identifier::decode_strict`] checks both the prefix and
//! the checksum.

pub mod agent;
pub mod base36;
pub mod base58;
pub mod canonical;
pub mod digest;
pub mod error;
pub mod identifier;
pub mod kind;
pub mod location;
pub mod multihash;
pub mod signature;
pub mod text;

pub use agent::AgentPubKey;
pub use canonical::canonical_json_bytes;
pub use error::{CodecError, Result};
pub use identifier::{build, build_framed, decode, decode_full, decode_strict, encode};
pub use kind::{IdKind, PREFIX_LEN};
pub use location::{DhtLocation, LOCATION_LEN};
