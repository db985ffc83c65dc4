//! Доменная модель Destiny Deck: карты, колода, рука из 5 карт.

pub mod card;
pub mod deck;
pub mod errors;
pub mod hand;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use errors::*;
pub use hand::*;

/// Идентификатор персонажа (приходит из игрового сервера).
pub type CharacterId = u64;

/// Идентификатор действия (одна попытка взять карты).
pub type ActionId = u64;
