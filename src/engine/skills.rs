use serde::{Deserialize, Serialize};

use crate::domain::card::Suit;

/// Семейство навыков. Каждой масти соответствует своё.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SkillFamily {
    /// ♣ — стрельба, драка.
    Combat,
    /// ♦ — ремесло, добыча.
    Craft,
    /// ♥ — дух, убеждение.
    Spirit,
    /// ♠ — хитрость, преступления.
    Cunning,
}

impl SkillFamily {
    pub const fn suit(self) -> Suit {
        match self {
            SkillFamily::Combat => Suit::Clubs,
            SkillFamily::Craft => Suit::Diamonds,
            SkillFamily::Spirit => Suit::Hearts,
            SkillFamily::Cunning => Suit::Spades,
        }
    }

    pub const fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Clubs => SkillFamily::Combat,
            Suit::Diamonds => SkillFamily::Craft,
            Suit::Hearts => SkillFamily::Spirit,
            Suit::Spades => SkillFamily::Cunning,
        }
    }
}

/// Откуда пришла прибавка к навыку.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BoostSource {
    Equipment,
    Perk,
    Buff,
    Debuff,
    Gang,
}

/// Одна прибавка (или штраф, если amount < 0).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillBoost {
    pub source: BoostSource,
    pub amount: i32,
}

impl SkillBoost {
    pub const fn new(source: BoostSource, amount: i32) -> Self {
        Self { source, amount }
    }
}

/// Итоговый уровень навыка: база + все прибавки, в пределах [0, cap].
pub fn compose_skill_level(base: u32, boosts: &[SkillBoost], cap: u32) -> u32 {
    let total = boosts
        .iter()
        .fold(base as i64, |acc, b| acc + b.amount as i64);
    total.clamp(0, cap as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suits_and_families_map_both_ways() {
        for suit in Suit::ALL {
            assert_eq!(SkillFamily::from_suit(suit).suit(), suit);
        }
    }

    #[test]
    fn debuffs_never_go_below_zero() {
        let boosts = [SkillBoost::new(BoostSource::Debuff, -40)];
        assert_eq!(compose_skill_level(10, &boosts, 50), 0);
    }

    #[test]
    fn boosts_stack_up_to_cap() {
        let boosts = [
            SkillBoost::new(BoostSource::Equipment, 5),
            SkillBoost::new(BoostSource::Perk, 3),
            SkillBoost::new(BoostSource::Gang, 2),
        ];
        assert_eq!(compose_skill_level(20, &boosts, 50), 30);
        assert_eq!(compose_skill_level(45, &boosts, 50), 50);
    }
}
