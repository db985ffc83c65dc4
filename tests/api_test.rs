//! API-слой: команды, JSON, маппинг ошибок.

use destiny_deck::api::*;
use destiny_deck::balance::DeckRules;
use destiny_deck::domain::DeckError;
use destiny_deck::engine::*;
use destiny_deck::eval::HandRank;
use destiny_deck::infra::DeterministicRng;
use destiny_deck::mock::mock_action_request;

fn resolver(seed: u64) -> ActionResolver<DeterministicRng> {
    ActionResolver::new(DeckRules::standard(), DeterministicRng::from_u64(seed)).unwrap()
}

fn cards(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn evaluate_hand_command() {
    let mut r = resolver(1);
    let resp = execute_command(
        &mut r,
        Command::EvaluateHand(EvaluateHandCommand {
            cards: cards(&["As", "Ks", "Qs", "Js", "10s"]),
        }),
    )
    .unwrap();

    match resp {
        CommandResponse::Evaluated(dto) => {
            assert_eq!(dto.rank, HandRank::RoyalFlush);
            assert_eq!(dto.description, "Royal flush");
            assert_eq!(dto.cards.len(), 5);
        }
        other => panic!("unexpected response {other:?}"),
    }
}

#[test]
fn score_hand_command_counts_family_suit() {
    let mut r = resolver(1);
    let resp = execute_command(
        &mut r,
        Command::ScoreHand(ScoreHandCommand {
            cards: cards(&["Ah", "Ad", "9c", "7c", "3c"]),
            family: SkillFamily::Combat,
            skill_level: 0,
        }),
    )
    .unwrap();

    let CommandResponse::Scored(dto) = resp else {
        panic!("expected Scored");
    };
    assert_eq!(dto.breakdown.rank, HandRank::Pair);
    assert_eq!(dto.breakdown.matching_cards, 3);
    // 100 × 1.3 = 130
    assert_eq!(dto.breakdown.effectiveness, 130);
    // Оценка по запросу сервера — не разрешение действия, счётчики не трогает.
    assert_eq!(r.metrics().hands_scored(), 0);
}

#[test]
fn invalid_cards_map_to_invalid_hand() {
    let mut r = resolver(1);
    let bad = [
        cards(&["Ah", "Zz", "9c", "7c", "3c"]),
        cards(&["Ah", "Ah", "9c", "7c", "3c"]),
        cards(&["Ah", "9c"]),
    ];
    for list in bad {
        let err = execute_command(&mut r, Command::EvaluateHand(EvaluateHandCommand { cards: list }))
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidHand(_)), "{err:?}");
    }
}

#[test]
fn resolve_outcome_rejects_rolls_outside_range() {
    let mut r = resolver(1);
    let err = execute_command(
        &mut r,
        Command::ResolveOutcome(ResolveOutcomeCommand {
            activity: ActivityKind::Contract,
            tier: 1,
            difficulty: Difficulty::Normal,
            roll: 140.0,
        }),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[test]
fn draw_for_action_and_npc_draw() {
    let mut r = resolver(5);
    let resp = execute_command(&mut r, Command::DrawForAction(mock_action_request(8))).unwrap();
    let CommandResponse::ActionResolved(dto) = resp else {
        panic!("expected ActionResolved");
    };
    assert_eq!(dto.character_id, 8);
    assert!(dto.outcome.roll >= dto.raw_roll);
    assert!(!dto.outcome.flavor.is_empty());

    let resp = execute_command(
        &mut r,
        Command::NpcDraw(NpcDrawCommand {
            difficulty: Difficulty::Easy,
        }),
    )
    .unwrap();
    let CommandResponse::NpcHand(dto) = resp else {
        panic!("expected NpcHand");
    };
    assert_eq!(dto.redraws_used, 0);
}

#[test]
fn json_commands_roundtrip() {
    let mut r = resolver(1);
    let json = r#"{"ResolveOutcome":{"activity":"Expedition","tier":1,"difficulty":"Normal","roll":60.0}}"#;
    let resp = execute_json(&mut r, json).unwrap();
    let CommandResponse::OutcomeResolved(dto) = resp else {
        panic!("expected OutcomeResolved");
    };
    assert_eq!(dto.outcome, Outcome::Success);
    assert_eq!(dto.reward_multiplier, 1.0);

    assert!(matches!(execute_json(&mut r, "{oops"), Err(ApiError::BadRequest(_))));
}

#[test]
fn error_conversions() {
    assert_eq!(
        ApiError::from(DeckError::WrongCardCount(3)),
        ApiError::InvalidHand(DeckError::WrongCardCount(3).to_string())
    );
    assert!(matches!(
        ApiError::from(EngineError::InvalidOutcomeTable("x".into())),
        ApiError::EngineError(_)
    ));
    assert!(matches!(
        ApiError::from(EngineError::Deck(DeckError::WrongCardCount(3))),
        ApiError::InvalidHand(_)
    ));
}
