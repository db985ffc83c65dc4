use serde::{Deserialize, Serialize};

use crate::domain::DeckError;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём игровому серверу / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum ApiError {
    /// Неправильные входные данные (бросок вне диапазона, битый JSON).
    BadRequest(String),

    /// Карты/рука не прошли проверку.
    InvalidHand(String),

    /// Ошибка движка (таблицы исходов и т.п.).
    EngineError(String),
}

impl From<DeckError> for ApiError {
    fn from(err: DeckError) -> Self {
        ApiError::InvalidHand(err.to_string())
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let msg = err.to_string();
        match err {
            EngineError::Deck(_) => ApiError::InvalidHand(msg),
            EngineError::RollOutOfRange(_) => ApiError::BadRequest(msg),
            EngineError::InvalidOutcomeTable(_) => ApiError::EngineError(msg),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
