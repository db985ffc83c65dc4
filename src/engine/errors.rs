use thiserror::Error;

use crate::domain::DeckError;

/// Ошибки движка Destiny Deck.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("roll {0} is outside [0, 100)")]
    RollOutOfRange(f64),

    #[error("invalid outcome table: {0}")]
    InvalidOutcomeTable(String),

    #[error(transparent)]
    Deck(#[from] DeckError),
}
