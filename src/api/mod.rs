//! Внешний API Destiny Deck для игрового сервера.
//!
//! Здесь описываются:
//! - команды (commands.rs) — что сервер просит посчитать;
//! - DTO (dto.rs) — удобные структуры для фронта;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;

pub use commands::*;
pub use dto::*;
pub use errors::*;
