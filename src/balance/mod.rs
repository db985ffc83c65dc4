//! Балансные таблицы игры.
//!
//! Всё здесь — статические данные и маленькие тотальные функции:
//! - правила Destiny Deck (config.rs);
//! - экономика и износ бизнеса (economy.rs, decay.rs);
//! - добыча и скупщики (mining.rs);
//! - налёты и войны банд (raids.rs);
//! - контракты (contracts.rs);
//! - престиж и репутация (prestige.rs, reputation.rs);
//! - тексты для игрока (narrative.rs).

pub mod config;
pub mod contracts;
pub mod decay;
pub mod economy;
pub mod mining;
pub mod narrative;
pub mod prestige;
pub mod raids;
pub mod reputation;

pub use config::{ConfigError, DeckRules, RulesProfile};
pub use decay::{condition_tier, ConditionTier};
pub use economy::BusinessType;
pub use mining::{suspicion_level, OreType, SuspicionLevel};
pub use prestige::{prestige_rank, PrestigeRank};
pub use reputation::{moral_tier, trust_level, MoralTier, TrustLevel};
