use serde::{Deserialize, Serialize};

use crate::engine::outcome::Outcome;
use crate::eval::HandRank;

/// Счётчики разрешений Destiny Deck.
///
/// Обычная структура: живёт внутри `ActionResolver` (или у того, кто его
/// держит), никаких глобальных синглтонов.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolutionMetrics {
    hands_by_rank: [u64; 10],
    outcomes: [u64; 5],
    total_effectiveness: u64,
    npc_draws: u64,
    npc_redraws: u64,
}

impl ResolutionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hand(&mut self, rank: HandRank, effectiveness: u32) {
        self.hands_by_rank[rank.index()] += 1;
        self.total_effectiveness += effectiveness as u64;
    }

    pub fn record_outcome(&mut self, outcome: Outcome) {
        self.outcomes[outcome.index()] += 1;
    }

    pub fn record_npc_draw(&mut self, redraws_used: u8) {
        self.npc_draws += 1;
        self.npc_redraws += redraws_used as u64;
    }

    pub fn hands_scored(&self) -> u64 {
        self.hands_by_rank.iter().sum()
    }

    pub fn count_for_rank(&self, rank: HandRank) -> u64 {
        self.hands_by_rank[rank.index()]
    }

    pub fn count_for_outcome(&self, outcome: Outcome) -> u64 {
        self.outcomes[outcome.index()]
    }

    pub fn npc_draws(&self) -> u64 {
        self.npc_draws
    }

    pub fn npc_redraws(&self) -> u64 {
        self.npc_redraws
    }

    /// Средняя эффективность; 0 если рук ещё не было.
    pub fn mean_effectiveness(&self) -> f64 {
        match self.hands_scored() {
            0 => 0.0,
            n => self.total_effectiveness as f64 / n as f64,
        }
    }

    /// Сложить счётчики с другого экземпляра (например, с другого шарда).
    pub fn merge(&mut self, other: &ResolutionMetrics) {
        for (a, b) in self.hands_by_rank.iter_mut().zip(other.hands_by_rank) {
            *a += b;
        }
        for (a, b) in self.outcomes.iter_mut().zip(other.outcomes) {
            *a += b;
        }
        self.total_effectiveness += other.total_effectiveness;
        self.npc_draws += other.npc_draws;
        self.npc_redraws += other.npc_redraws;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
