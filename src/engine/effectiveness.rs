//! Эффективность руки — одно число, которое дальше кормит урон, золото,
//! шанс преступления и влияние в разговоре.
//!
//!   effectiveness = round(base(rank) × suit(matching) × skill(level))

use serde::{Deserialize, Serialize};

use crate::balance::config::DeckRules;
use crate::eval::HandRank;

const STANDARD: DeckRules = DeckRules::standard();

/// Разложение эффективности по множителям (для UI и логов).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EffectivenessBreakdown {
    pub rank: HandRank,
    pub base_value: u32,
    /// Учтённое число карт масти (уже обрезанное).
    pub matching_cards: u8,
    pub suit_multiplier: f64,
    /// Учтённый уровень навыка (уже обрезанный).
    pub skill_level: u32,
    pub skill_multiplier: f64,
    pub effectiveness: u32,
}

impl EffectivenessBreakdown {
    pub fn compute(rules: &DeckRules, rank: HandRank, matching_cards: u8, skill_level: u32) -> Self {
        let matching = matching_cards.min(rules.max_suit_cards);
        let level = skill_level.min(rules.skill_cap);

        let base = rules.base_value(rank);
        let suit_mult = 1.0 + rules.suit_bonus_per_card * matching as f64;
        let skill_mult = 1.0 + level as f64 / rules.skill_divisor;

        let effectiveness = (base as f64 * suit_mult * skill_mult).round() as u32;

        Self {
            rank,
            base_value: base,
            matching_cards: matching,
            suit_multiplier: suit_mult,
            skill_level: level,
            skill_multiplier: skill_mult,
            effectiveness,
        }
    }
}

/// Базовая ценность категории: 50 (старшая карта) .. 500 (роял-флеш).
pub fn base_value(rank: HandRank) -> u32 {
    STANDARD.base_value(rank)
}

/// 1.0 + 0.10 × clamp(n, 0, 5) → [1.0, 1.5].
pub fn suit_multiplier(matching_cards: u8) -> f64 {
    EffectivenessBreakdown::compute(&STANDARD, HandRank::HighCard, matching_cards, 0).suit_multiplier
}

/// 1 + min(level, 50) / 100 → [1.0, 1.5].
pub fn skill_multiplier(skill_level: u32) -> f64 {
    EffectivenessBreakdown::compute(&STANDARD, HandRank::HighCard, 0, skill_level).skill_multiplier
}

/// Эффективность по стандартным правилам.
pub fn calculate_effectiveness(rank: HandRank, matching_cards: u8, skill_level: u32) -> u32 {
    EffectivenessBreakdown::compute(&STANDARD, rank, matching_cards, skill_level).effectiveness
}

// Масштабирование ниже делает вызывающая сторона; здесь — общие формулы
// для `ActionResolver` и сервера.

/// Урон в бою: урон оружия + эффективность / 10.
pub fn combat_damage(effectiveness: u32, weapon_base: u32) -> u32 {
    weapon_base + effectiveness / 10
}

/// Множитель золота за работу: 1 + эффективность / 1000.
pub fn gold_multiplier(effectiveness: u32) -> f64 {
    1.0 + effectiveness as f64 / 1000.0
}

/// Преступление удалось, если эффективность не ниже порога.
pub fn crime_succeeds(effectiveness: u32, threshold: u32) -> bool {
    effectiveness >= threshold
}

/// Влияние в социальном действии.
pub fn social_influence(effectiveness: u32) -> u32 {
    effectiveness / 20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_clamps_inputs() {
        let b = EffectivenessBreakdown::compute(&STANDARD, HandRank::Flush, 9, 400);
        assert_eq!(b.matching_cards, 5);
        assert_eq!(b.skill_level, 50);
        assert_eq!(b.effectiveness, 675);
    }

    #[test]
    fn downstream_scaling() {
        assert_eq!(combat_damage(1125, 8), 120);
        assert!((gold_multiplier(500) - 1.5).abs() < 1e-9);
        assert!(crime_succeeds(200, 200));
        assert!(!crime_succeeds(199, 200));
        assert_eq!(social_influence(1000), 50);
    }
}
