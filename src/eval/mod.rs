//! Оценка рук Destiny Deck.
//!
//! Основная функция:
//!   `evaluate_hand(&Hand) -> HandRank`
//!
//! Для сравнения рук внутри категории есть `evaluate_strength`,
//! для 6–7 карт — `evaluate_best_hand`.

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::{evaluate_best_hand, evaluate_cards, evaluate_hand, evaluate_strength};
pub use hand_rank::{describe_hand, HandRank, HandStrength};
