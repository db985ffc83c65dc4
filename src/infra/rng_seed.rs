//! RngSeed — доменный seed для RNG Destiny Deck.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8;32])
//!   - делать детерминированное hash-reseeding на каждое действие:
//!         new = H(domain || old || character_id || action_id || attempt)
//!   - создавать DeterministicRng из seed
//!
//! Так любое действие персонажа можно переиграть один в один.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::{ActionId, CharacterId};
use crate::infra::rng::DeterministicRng;

const DOMAIN_TAG: &[u8] = b"DESTINY_DECK_RNG_V1";

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Seed из u64 (для удобства тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Seed конкретной попытки конкретного действия.
    pub fn derive(&self, character_id: CharacterId, action_id: ActionId, attempt: u32) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_TAG);
        hasher.update(self.bytes);
        hasher.update(character_id.to_le_bytes());
        hasher.update(action_id.to_le_bytes());
        hasher.update(attempt.to_le_bytes());

        Self {
            bytes: hasher.finalize().into(),
        }
    }

    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}
