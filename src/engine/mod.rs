//! Движок раунда ставок: решения игроков, улицы, банк, шоудаун.
//!
//! Высокоуровневый объект: `HoldemGame`
//! Основные операции:
//!   - `start_round` – анте и старт раунда
//!   - `raise` / `call` / `fold` – решения игроков на улице
//!   - `end_street` – банк + новые общие карты
//!   - `settle` – шоудаун и следующий раунд

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod pot;
pub mod validation;

pub use actions::{Decision, PlayerAction, PlayerActionKind};
pub use betting::RoundEntry;
pub use errors::EngineError;
pub use game_loop::{HoldemGame, RoundPhase};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use pot::Pot;

use crate::domain::{Card, Deck, DeckError};

/// RNG интерфейс для источника карт.
/// Реализации лежат в infra (обёртка над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

/// Источник карт без возврата.
pub trait CardSource {
    /// Вернуть все карты и перемешать.
    fn shuffle(&mut self);

    /// Вытянуть ровно `n` карт. Если карт не хватает, ошибка, ничего не вынимается.
    fn draw(&mut self, n: usize) -> Result<Vec<Card>, DeckError>;
}

/// Колода с фиксированным порядком: `shuffle` ничего не делает.
impl CardSource for Deck {
    fn shuffle(&mut self) {}

    fn draw(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        self.draw_n(n)
    }
}
