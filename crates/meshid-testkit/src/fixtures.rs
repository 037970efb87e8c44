//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: real ed25519 key material for
//! agent identifiers and signature bytes for the signature codec.

use ed25519_dalek::{Signer, SigningKey};

use meshid_core::AgentPubKey;

/// A fixture holding an agent keypair.
pub struct AgentFixture {
    signing_key: SigningKey,
}

impl AgentFixture {
    /// Create a new fixture with a random keypair.
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            signing_key: SigningKey::generate(&mut rng),
        }
    }

    /// Create with a deterministic keypair from a seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&seed),
        }
    }

    /// The agent's public key.
    pub fn pubkey(&self) -> AgentPubKey {
        AgentPubKey(self.signing_key.verifying_key().to_bytes())
    }

    /// The agent's textual identifier.
    pub fn agent_id(&self) -> String {
        self.pubkey().encode()
    }

    /// Sign a message, returning raw signature bytes for the codec.
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        self.signing_key.sign(message).to_bytes().to_vec()
    }
}

impl Default for AgentFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple fixtures for multi-agent tests.
pub fn multi_agent_fixtures(count: usize) -> Vec<AgentFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i as u8;
            seed[1] = 0x5a;
            AgentFixture::with_seed(seed)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_deterministic_from_seed() {
        let f1 = AgentFixture::with_seed([0x42; 32]);
        let f2 = AgentFixture::with_seed([0x42; 32]);
        assert_eq!(f1.pubkey(), f2.pubkey());
        assert_eq!(f1.agent_id(), f2.agent_id());
    }

    #[test]
    fn test_multi_agent_fixtures_distinct() {
        let fixtures = multi_agent_fixtures(4);
        for (i, a) in fixtures.iter().enumerate() {
            for b in fixtures.iter().skip(i + 1) {
                assert_ne!(a.pubkey(), b.pubkey());
            }
        }
    }

    #[test]
    fn test_signature_bytes_have_expected_length() {
        let fixture = AgentFixture::with_seed([0x01; 32]);
        assert_eq!(fixture.sign(b"hello").len(), 64);
    }
}
