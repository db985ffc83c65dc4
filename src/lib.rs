//! Destiny Deck — карточное разрешение действий Desperados Destiny.
//!
//! Рука из 5 карт → категория → эффективность (масть + навык) →
//! бросок по таблице исходов. Плюс балансные таблицы игры и генераторы
//! тестовых данных. Всё синхронно и без глобального состояния:
//! RNG и счётчики живут в `engine::ActionResolver`, который держит сервер.

pub mod api;
pub mod balance;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod mock;

pub use balance::DeckRules;
pub use domain::{Card, Deck, DeckError, Hand, Rank, Suit};
pub use engine::{calculate_effectiveness, ActionResolver, EngineError, Outcome, OutcomeTable};
pub use eval::{evaluate_hand, HandRank};
