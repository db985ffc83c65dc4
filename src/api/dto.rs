use serde::{Deserialize, Serialize};

use crate::balance::narrative::{hand_flavor, outcome_flavor};
use crate::domain::{CharacterId, Hand};
use crate::engine::outcome::{ActivityKind, Outcome};
use crate::engine::{ActionResolution, EffectivenessBreakdown, NpcDraw, OutcomeResult, ScoredHand};
use crate::eval::{describe_hand, HandRank};

/// DTO руки: карты строками + категория + текст.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandDto {
    pub cards: Vec<String>,
    pub rank: HandRank,
    pub description: String,
    pub flavor: String,
}

/// DTO оценённой руки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScoredHandDto {
    pub hand: HandDto,
    pub breakdown: EffectivenessBreakdown,
}

/// DTO исхода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OutcomeDto {
    pub outcome: Outcome,
    pub reward_multiplier: f64,
    pub roll: f64,
    pub flavor: String,
}

/// DTO полного действия.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActionResolutionDto {
    pub character_id: CharacterId,
    pub scored: ScoredHandDto,
    pub raw_roll: f64,
    pub outcome: OutcomeDto,
}

/// DTO руки NPC.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NpcDrawDto {
    pub hand: HandDto,
    pub redraws_used: u8,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandResponse {
    Evaluated(HandDto),
    Scored(ScoredHandDto),
    ActionResolved(ActionResolutionDto),
    NpcHand(NpcDrawDto),
    OutcomeResolved(OutcomeDto),
}

pub fn hand_to_dto(hand: &Hand, rank: HandRank) -> HandDto {
    HandDto {
        cards: hand.iter().map(|c| c.to_string()).collect(),
        rank,
        description: describe_hand(rank).to_string(),
        flavor: hand_flavor(rank).to_string(),
    }
}

pub fn scored_to_dto(scored: &ScoredHand) -> ScoredHandDto {
    ScoredHandDto {
        hand: hand_to_dto(&scored.hand, scored.rank),
        breakdown: scored.breakdown.clone(),
    }
}

pub fn outcome_to_dto(activity: ActivityKind, result: &OutcomeResult) -> OutcomeDto {
    OutcomeDto {
        outcome: result.outcome,
        reward_multiplier: result.reward_multiplier,
        roll: result.roll,
        flavor: outcome_flavor(activity, result.outcome).to_string(),
    }
}

pub fn resolution_to_dto(activity: ActivityKind, res: &ActionResolution) -> ActionResolutionDto {
    ActionResolutionDto {
        character_id: res.character_id,
        scored: scored_to_dto(&res.scored),
        raw_roll: res.raw_roll,
        outcome: outcome_to_dto(activity, &res.outcome),
    }
}

pub fn npc_draw_to_dto(draw: &NpcDraw) -> NpcDrawDto {
    NpcDrawDto {
        hand: hand_to_dto(&draw.hand, draw.rank),
        redraws_used: draw.redraws_used,
    }
}
