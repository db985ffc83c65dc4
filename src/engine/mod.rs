//! Движок Destiny Deck: эффективность руки, навыки, добор NPC, исходы.
//!
//! Высокоуровневый объект: `ActionResolver`
//! Основные операции:
//!   - `calculate_effectiveness` – рука + масть + навык → число
//!   - `OutcomeTable::resolve` – бросок → исход и множитель награды
//!   - `npc_draw` – рука NPC с возможным перебором
//!   - `ActionResolver::resolve_action` – всё вместе для одного действия

pub mod effectiveness;
pub mod errors;
pub mod npc;
pub mod outcome;
pub mod resolver;
pub mod skills;

pub use effectiveness::{
    base_value, calculate_effectiveness, skill_multiplier, suit_multiplier, EffectivenessBreakdown,
};
pub use errors::EngineError;
pub use npc::{npc_draw, NpcDraw};
pub use outcome::{ActivityKind, Difficulty, Outcome, OutcomeResult, OutcomeTable};
pub use resolver::{ActionRequest, ActionResolution, ActionResolver, ScoredHand};
pub use skills::{compose_skill_level, BoostSource, SkillBoost, SkillFamily};

/// RNG интерфейс для движка.
/// Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Равномерный бросок в [0, 100).
    fn roll_percent(&mut self) -> f64;
}
