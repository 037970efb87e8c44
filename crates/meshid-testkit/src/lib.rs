//! # Meshid Testkit
//!
//! Testing utilities for the meshid codec.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: known inputs with expected wire forms, for
//!   cross-implementation verification
//! - **Generators**: proptest strategies for property-based testing
//! - **Fixtures**: real ed25519 key material for agent identifier tests
//!
//! ## Golden Vectors
//!
//! ```rust
//! use meshid_testkit::vectors::agent_vector;
//! use meshid_core::AgentPubKey;
//!
//! let vector = agent_vector();
//! let key = AgentPubKey::from(vector.pubkey);
//! assert_eq!(key.encode(), vector.text);
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use meshid_testkit::generators::{id_kind, payload};
//!
//! proptest! {
//!     #[test]
//!     fn roundtrip(kind in id_kind(), payload in payload(256)) {
//!         let text = meshid_core::encode(kind, &payload);
//!         prop_assert_eq!(meshid_core::decode(&text).unwrap(), payload);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_agent_fixtures, AgentFixture};
pub use generators::{agent_pubkey, id_kind, json_value, payload};
pub use vectors::{
    agent_vector, base36_vectors, base58_vectors, base64_vector, entry_vector,
    legacy_digest_vector, signature_vectors, AgentVector, Base58Vector, BytesTextVector,
    EntryVector, LegacyDigestVector,
};
