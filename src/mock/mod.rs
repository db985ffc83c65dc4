//! Генераторы тестовых данных: руки нужной категории, колоды, запросы.

pub mod hands;

pub use hands::mock_hand_by_rank;

use crate::domain::{Card, CharacterId, Deck};
use crate::engine::outcome::{ActivityKind, Difficulty};
use crate::engine::resolver::ActionRequest;
use crate::engine::skills::SkillFamily;

/// Полная колода без указанных карт (например, уже розданных).
pub fn mock_deck_without(used: &[Card]) -> Deck {
    let mut deck = Deck::standard_52();
    deck.remove_cards(used);
    deck
}

/// Типовой запрос: боевая экспедиция первого тира, навык 10.
pub fn mock_action_request(character_id: CharacterId) -> ActionRequest {
    ActionRequest {
        character_id,
        family: SkillFamily::Combat,
        base_skill: 10,
        boosts: Vec::new(),
        activity: ActivityKind::Expedition,
        tier: 1,
        difficulty: Difficulty::Normal,
    }
}
