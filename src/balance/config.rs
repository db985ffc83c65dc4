//! Правила Destiny Deck: все числа, от которых зависит эффективность руки,
//! бонус к броску и добор карт у NPC.
//!
//! Здесь только "правила", без состояния. Загружаются один раз на старте.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::outcome::Difficulty;
use crate::eval::HandRank;

/// Ошибки загрузки/проверки правил.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("rules json is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rules rejected: {0}")]
    Invalid(String),
}

/// Профиль правил.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RulesProfile {
    /// Боевые сервера.
    Standard,
    /// Стартовые зоны: больше бонус от эффективности, NPC не перебирают.
    Lenient,
    /// Хардкор: меньше бонус к броску, NPC перебирают чаще.
    Harsh,
}

/// Правила Destiny Deck.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DeckRules {
    /// Базовая ценность каждой категории, индекс = `HandRank::index()`.
    pub base_values: [u32; 10],
    /// Прибавка к множителю за каждую карту "своей" масти.
    pub suit_bonus_per_card: f64,
    /// Сколько карт масти максимум учитывается.
    pub max_suit_cards: u8,
    /// Потолок уровня навыка для множителя.
    pub skill_cap: u32,
    /// Делитель навыка: множитель = 1 + min(level, cap) / divisor.
    pub skill_divisor: f64,
    /// Бонус к броску = эффективность / этот делитель.
    pub effectiveness_roll_divisor: f64,
    /// NPC перебирает руку, пока она слабее этой категории.
    pub npc_redraw_below: HandRank,
    /// Число переборов NPC, индекс = `Difficulty::index()`.
    pub npc_redraws: [u8; 4],
}

impl DeckRules {
    /// Стандартный профиль: база 50..500, масть и навык до ×1.5.
    pub const fn standard() -> Self {
        Self {
            base_values: [50, 100, 150, 200, 250, 300, 350, 400, 450, 500],
            suit_bonus_per_card: 0.10,
            max_suit_cards: 5,
            skill_cap: 50,
            skill_divisor: 100.0,
            effectiveness_roll_divisor: 50.0,
            npc_redraw_below: HandRank::Pair,
            npc_redraws: [0, 1, 2, 3],
        }
    }

    /// Получить правила по профилю.
    pub const fn from_profile(profile: RulesProfile) -> Self {
        let base = Self::standard();
        match profile {
            RulesProfile::Standard => base,
            RulesProfile::Lenient => Self {
                effectiveness_roll_divisor: 40.0,
                npc_redraws: [0, 0, 1, 2],
                ..base
            },
            RulesProfile::Harsh => Self {
                effectiveness_roll_divisor: 65.0,
                npc_redraw_below: HandRank::TwoPair,
                npc_redraws: [1, 2, 3, 4],
                ..base
            },
        }
    }

    /// Загрузить правила из JSON и сразу проверить.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let rules: DeckRules = serde_json::from_str(json)?;
        if let Err(err) = rules.validate() {
            log::warn!("rejecting deck rules: {err}");
            return Err(err);
        }
        log::info!(
            "loaded deck rules: skill cap {}, roll divisor {}",
            rules.skill_cap,
            rules.effectiveness_roll_divisor
        );
        Ok(rules)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_values[0] == 0 {
            return Err(ConfigError::Invalid("base value of HighCard must be positive".into()));
        }
        if self.base_values.windows(2).any(|w| w[1] <= w[0]) {
            return Err(ConfigError::Invalid(
                "base values must strictly increase with hand rank".into(),
            ));
        }
        if !self.suit_bonus_per_card.is_finite() || self.suit_bonus_per_card < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "suit_bonus_per_card = {}",
                self.suit_bonus_per_card
            )));
        }
        if self.max_suit_cards as usize > crate::domain::HAND_SIZE {
            return Err(ConfigError::Invalid(format!(
                "max_suit_cards = {} exceeds hand size",
                self.max_suit_cards
            )));
        }
        if !(self.skill_divisor.is_finite() && self.skill_divisor > 0.0) {
            return Err(ConfigError::Invalid(format!("skill_divisor = {}", self.skill_divisor)));
        }
        if !(self.effectiveness_roll_divisor.is_finite() && self.effectiveness_roll_divisor > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "effectiveness_roll_divisor = {}",
                self.effectiveness_roll_divisor
            )));
        }
        Ok(())
    }

    pub fn base_value(&self, rank: HandRank) -> u32 {
        self.base_values[rank.index()]
    }

    pub fn npc_redraws_for(&self, difficulty: Difficulty) -> u8 {
        self.npc_redraws[difficulty.index()]
    }

    pub fn with_npc_redraws(mut self, difficulty: Difficulty, redraws: u8) -> Self {
        self.npc_redraws[difficulty.index()] = redraws;
        self
    }

    pub fn with_effectiveness_roll_divisor(mut self, divisor: f64) -> Self {
        self.effectiveness_roll_divisor = divisor;
        self
    }
}

impl Default for DeckRules {
    fn default() -> Self {
        Self::standard()
    }
}
