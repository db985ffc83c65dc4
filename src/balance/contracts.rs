// src/balance/contracts.rs

use serde::{Deserialize, Serialize};

use crate::engine::outcome::Difficulty;

/// Редкость контракта на доске объявлений.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContractTier {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// Условия контракта.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContractTerms {
    pub gold_min: u32,
    pub gold_max: u32,
    pub reputation: u32,
    pub time_limit_hours: u32,
    /// Тир таблицы исходов (1..=5).
    pub outcome_tier: u8,
    pub difficulty: Difficulty,
}

pub const fn contract_terms(tier: ContractTier) -> ContractTerms {
    match tier {
        ContractTier::Common => ContractTerms {
            gold_min: 50,
            gold_max: 150,
            reputation: 5,
            time_limit_hours: 24,
            outcome_tier: 1,
            difficulty: Difficulty::Easy,
        },
        ContractTier::Uncommon => ContractTerms {
            gold_min: 150,
            gold_max: 400,
            reputation: 15,
            time_limit_hours: 48,
            outcome_tier: 2,
            difficulty: Difficulty::Normal,
        },
        ContractTier::Rare => ContractTerms {
            gold_min: 400,
            gold_max: 1_000,
            reputation: 40,
            time_limit_hours: 72,
            outcome_tier: 3,
            difficulty: Difficulty::Hard,
        },
        ContractTier::Legendary => ContractTerms {
            gold_min: 1_000,
            gold_max: 3_000,
            reputation: 100,
            time_limit_hours: 168,
            outcome_tier: 5,
            difficulty: Difficulty::Extreme,
        },
    }
}

/// Награда золотом: середина вилки × множитель исхода.
pub fn contract_reward(tier: ContractTier, reward_multiplier: f64) -> u32 {
    let t = contract_terms(tier);
    let mid = (t.gold_min + t.gold_max) as f64 / 2.0;
    (mid * reward_multiplier).round() as u32
}
