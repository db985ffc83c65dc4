use thiserror::Error;

use crate::domain::card::Card;

/// Ошибки построения карт и рук.
///
/// Это нарушения предусловий на входе, а не восстанавливаемые
/// ошибки рантайма: вызывающий код передал кривые данные.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("hand must contain exactly 5 cards, got {0}")]
    WrongCardCount(usize),

    #[error("card {0} appears more than once")]
    DuplicateCard(Card),

    #[error("invalid card string: {0:?}")]
    InvalidCard(String),

    #[error("expected between {min} and {max} cards, got {got}")]
    CardCountOutOfRange { min: usize, max: usize, got: usize },

    #[error("deck has {remaining} cards left, need {needed}")]
    DeckExhausted { remaining: usize, needed: usize },
}
