// src/engine/resolver.rs

use serde::{Deserialize, Serialize};

use crate::balance::config::{ConfigError, DeckRules};
use crate::domain::{CharacterId, Deck, Hand};
use crate::engine::effectiveness::EffectivenessBreakdown;
use crate::engine::errors::EngineError;
use crate::engine::npc::{npc_draw, NpcDraw};
use crate::engine::outcome::{ActivityKind, Difficulty, OutcomeResult, OutcomeTable, ROLL_MAX};
use crate::engine::skills::{compose_skill_level, SkillBoost, SkillFamily};
use crate::engine::RandomSource;
use crate::eval::{evaluate_strength, HandRank, HandStrength};
use crate::infra::metrics::ResolutionMetrics;

/// Самый большой бросок после бонуса эффективности.
const MAX_ADJUSTED_ROLL: f64 = 99.99;

/// Запрос на одно действие персонажа.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActionRequest {
    pub character_id: CharacterId,
    pub family: SkillFamily,
    pub base_skill: u32,
    pub boosts: Vec<SkillBoost>,
    pub activity: ActivityKind,
    pub tier: u8,
    pub difficulty: Difficulty,
}

/// Оценённая рука.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScoredHand {
    pub hand: Hand,
    pub rank: HandRank,
    pub strength: HandStrength,
    pub breakdown: EffectivenessBreakdown,
}

/// Полный результат действия.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActionResolution {
    pub character_id: CharacterId,
    pub scored: ScoredHand,
    /// Чистый бросок RNG до бонуса.
    pub raw_roll: f64,
    pub outcome: OutcomeResult,
}

/// Разрешатель действий: правила + RNG + счётчики.
///
/// Один экземпляр на игровой сервер/шард; передаётся по `&mut`.
pub struct ActionResolver<R: RandomSource> {
    rules: DeckRules,
    rng: R,
    metrics: ResolutionMetrics,
}

impl<R: RandomSource> ActionResolver<R> {
    /// Правила проверяются сразу: с битым делителем бросок ушёл бы за [0, 100).
    pub fn new(rules: DeckRules, rng: R) -> Result<Self, ConfigError> {
        rules.validate()?;
        Ok(Self {
            rules,
            rng,
            metrics: ResolutionMetrics::new(),
        })
    }

    pub fn rules(&self) -> &DeckRules {
        &self.rules
    }

    pub fn metrics(&self) -> &ResolutionMetrics {
        &self.metrics
    }

    /// Забрать счётчики, обнулив внутренние.
    pub fn take_metrics(&mut self) -> ResolutionMetrics {
        std::mem::take(&mut self.metrics)
    }

    /// Перемешать свежую колоду и снять 5 карт.
    pub fn draw_hand(&mut self) -> Result<Hand, EngineError> {
        let mut deck = Deck::standard_52();
        self.rng.shuffle(&mut deck.cards);
        Ok(deck.draw_hand()?)
    }

    /// Оценить руку под семейство навыков и уровень.
    ///
    /// В счётчики не попадает: туда пишет только `resolve_action`.
    pub fn score(&self, hand: Hand, family: SkillFamily, skill_level: u32) -> ScoredHand {
        let strength = evaluate_strength(&hand);
        let rank = strength.rank();
        let matching = hand.count_suit(family.suit());
        let breakdown = EffectivenessBreakdown::compute(&self.rules, rank, matching, skill_level);

        ScoredHand {
            hand,
            rank,
            strength,
            breakdown,
        }
    }

    /// Бросок + бонус эффективности, не выше 99.99.
    pub fn adjusted_roll(&self, raw_roll: f64, effectiveness: u32) -> f64 {
        let bonus = effectiveness as f64 / self.rules.effectiveness_roll_divisor;
        (raw_roll + bonus).min(MAX_ADJUSTED_ROLL)
    }

    /// Разрешить уже известный бросок (сервер принёс свой).
    pub fn resolve_roll(
        &mut self,
        activity: ActivityKind,
        tier: u8,
        difficulty: Difficulty,
        roll: f64,
    ) -> Result<OutcomeResult, EngineError> {
        let table = OutcomeTable::for_activity_scaled(activity, tier, difficulty);
        let result = table.resolve(roll)?;
        self.metrics.record_outcome(result.outcome);
        Ok(result)
    }

    /// Полный цикл: навык → рука → эффективность → бросок → исход.
    pub fn resolve_action(&mut self, request: &ActionRequest) -> Result<ActionResolution, EngineError> {
        let skill_level = compose_skill_level(request.base_skill, &request.boosts, self.rules.skill_cap);
        let hand = self.draw_hand()?;
        let scored = self.score(hand, request.family, skill_level);
        self.metrics.record_hand(scored.rank, scored.breakdown.effectiveness);

        let raw_roll = self.rng.roll_percent();
        debug_assert!(raw_roll < ROLL_MAX);
        let roll = self.adjusted_roll(raw_roll, scored.breakdown.effectiveness);

        let outcome = self.resolve_roll(request.activity, request.tier, request.difficulty, roll)?;

        log::debug!(
            "character {} {:?} t{} {:?}: [{}] {} eff={} roll={:.2}->{:.2} => {:?}",
            request.character_id,
            request.activity,
            request.tier,
            request.difficulty,
            scored.hand,
            scored.rank,
            scored.breakdown.effectiveness,
            raw_roll,
            roll,
            outcome.outcome
        );

        Ok(ActionResolution {
            character_id: request.character_id,
            scored,
            raw_roll,
            outcome,
        })
    }

    /// Рука противника-NPC.
    pub fn npc_draw(&mut self, difficulty: Difficulty) -> Result<NpcDraw, EngineError> {
        let draw = npc_draw(&self.rules, difficulty, &mut self.rng)?;
        self.metrics.record_npc_draw(draw.redraws_used);
        Ok(draw)
    }
}
