//! Proptest generators for property-based testing.

use ed25519_dalek::SigningKey;
use proptest::prelude::*;
use serde_json::Value;

use meshid_core::{AgentPubKey, IdKind};

/// Generate payload bytes up to the given length.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate an identifier kind.
pub fn id_kind() -> impl Strategy<Value = IdKind> {
    prop_oneof![
        Just(IdKind::Agent),
        Just(IdKind::Entry),
        Just(IdKind::Header),
        Just(IdKind::Dna),
    ]
}

/// Generate a realistic agent public key from a random ed25519 seed.
pub fn agent_pubkey() -> impl Strategy<Value = AgentPubKey> {
    any::<[u8; 32]>().prop_map(|seed| {
        let signing_key = SigningKey::from_bytes(&seed);
        AgentPubKey(signing_key.verifying_key().to_bytes())
    })
}

/// Generate an arbitrary JSON value for canonicalization tests.
pub fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 _-]{0,24}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,12}", inner, 0..8).prop_map(|map| {
                Value::Object(map.into_iter().collect())
            }),
        ]
    })
}
