use serde::{Deserialize, Serialize};

use crate::domain::{Card, DeckError, Hand};
use crate::engine::outcome::{ActivityKind, Difficulty};
use crate::engine::resolver::{ActionRequest, ActionResolver};
use crate::engine::skills::SkillFamily;
use crate::engine::RandomSource;
use crate::eval::evaluate_hand;

use super::dto::{
    hand_to_dto, npc_draw_to_dto, outcome_to_dto, resolution_to_dto, scored_to_dto, CommandResponse,
};
use super::errors::ApiError;

/// Команда верхнего уровня от игрового сервера.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Только категория руки.
    EvaluateHand(EvaluateHandCommand),

    /// Рука, уже известная серверу, + навык → эффективность.
    ScoreHand(ScoreHandCommand),

    /// Полное действие: раздать, оценить, бросить, разрешить.
    DrawForAction(ActionRequest),

    /// Рука противника-NPC.
    NpcDraw(NpcDrawCommand),

    /// Разрешить бросок, сделанный на стороне сервера.
    ResolveOutcome(ResolveOutcomeCommand),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvaluateHandCommand {
    /// Карты строками: "Ah", "10d", "7c".
    pub cards: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoreHandCommand {
    pub cards: Vec<String>,
    pub family: SkillFamily,
    pub skill_level: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NpcDrawCommand {
    pub difficulty: Difficulty,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResolveOutcomeCommand {
    pub activity: ActivityKind,
    pub tier: u8,
    pub difficulty: Difficulty,
    pub roll: f64,
}

/// Разобрать и проверить руку из строк.
pub fn parse_hand(cards: &[String]) -> Result<Hand, DeckError> {
    let parsed = cards
        .iter()
        .map(|s| s.trim().parse::<Card>())
        .collect::<Result<Vec<_>, _>>()?;
    Hand::from_cards(&parsed)
}

/// Выполнить команду на переданном разрешателе.
pub fn execute_command<R: RandomSource>(
    resolver: &mut ActionResolver<R>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::EvaluateHand(cmd) => {
            let hand = parse_hand(&cmd.cards)?;
            Ok(CommandResponse::Evaluated(hand_to_dto(&hand, evaluate_hand(&hand))))
        }
        Command::ScoreHand(cmd) => {
            let hand = parse_hand(&cmd.cards)?;
            let scored = resolver.score(hand, cmd.family, cmd.skill_level);
            Ok(CommandResponse::Scored(scored_to_dto(&scored)))
        }
        Command::DrawForAction(request) => {
            let res = resolver.resolve_action(&request)?;
            Ok(CommandResponse::ActionResolved(resolution_to_dto(request.activity, &res)))
        }
        Command::NpcDraw(cmd) => {
            let draw = resolver.npc_draw(cmd.difficulty)?;
            Ok(CommandResponse::NpcHand(npc_draw_to_dto(&draw)))
        }
        Command::ResolveOutcome(cmd) => {
            let result = resolver.resolve_roll(cmd.activity, cmd.tier, cmd.difficulty, cmd.roll)?;
            Ok(CommandResponse::OutcomeResolved(outcome_to_dto(cmd.activity, &result)))
        }
    }
}

/// То же, но команда приходит JSON-строкой.
pub fn execute_json<R: RandomSource>(
    resolver: &mut ActionResolver<R>,
    json: &str,
) -> Result<CommandResponse, ApiError> {
    let command: Command = serde_json::from_str(json)?;
    execute_command(resolver, command)
}
