//! Моральная репутация персонажа и доверие NPC.

use serde::{Deserialize, Serialize};

pub const MIN_MORALITY: i32 = -100;
pub const MAX_MORALITY: i32 = 100;
pub const MAX_TRUST: u32 = 100;

/// Моральный тир (-100..=100).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoralTier {
    Villainous,
    Outlaw,
    Neutral,
    Respected,
    Heroic,
}

pub fn moral_tier(morality: i32) -> MoralTier {
    match morality.clamp(MIN_MORALITY, MAX_MORALITY) {
        MIN_MORALITY..=-75 => MoralTier::Villainous,
        -74..=-25 => MoralTier::Outlaw,
        -24..=24 => MoralTier::Neutral,
        25..=74 => MoralTier::Respected,
        _ => MoralTier::Heroic,
    }
}

/// Доверие конкретного NPC (0..=100).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TrustLevel {
    Hostile,
    Wary,
    Neutral,
    Friendly,
    Trusted,
    Sworn,
}

impl TrustLevel {
    /// Множитель цен в лавке NPC.
    pub const fn price_modifier(self) -> f64 {
        match self {
            TrustLevel::Hostile => 1.50,
            TrustLevel::Wary => 1.20,
            TrustLevel::Neutral => 1.00,
            TrustLevel::Friendly => 0.95,
            TrustLevel::Trusted => 0.90,
            TrustLevel::Sworn => 0.80,
        }
    }

    /// Открыты ли особые задания.
    pub fn unlocks_quests(self) -> bool {
        self >= TrustLevel::Friendly
    }
}

pub fn trust_level(trust: u32) -> TrustLevel {
    match trust.min(MAX_TRUST) {
        0..=9 => TrustLevel::Hostile,
        10..=29 => TrustLevel::Wary,
        30..=49 => TrustLevel::Neutral,
        50..=74 => TrustLevel::Friendly,
        75..=89 => TrustLevel::Trusted,
        _ => TrustLevel::Sworn,
    }
}

/// Применить сдвиг морали, оставаясь в [-100, 100].
pub fn adjust_morality(morality: i32, delta: i32) -> i32 {
    morality.saturating_add(delta).clamp(MIN_MORALITY, MAX_MORALITY)
}
