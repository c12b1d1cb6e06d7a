//! Оценка рук Texas Hold'em и движок раунда ставок с общим банком.
//!
//! - `eval`: лучшая 5-карточная комбинация и шоудаун;
//! - `engine`: fold/call/raise, улицы, банк, расчёт;
//! - `domain`: карты, фишки, колода, игроки, конфиг;
//! - `infra`: RNG и перемешиваемая колода.

pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use domain::{Card, Chips, GameConfig, Rank, Suit};
pub use engine::{CardSource, EngineError, HoldemGame, RandomSource};
pub use eval::{compare_hands, compute_hand, HandCategory, HandValue, ShowdownResult};
