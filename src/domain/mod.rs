//! Доменная модель: карты, фишки, колода, игроки и конфиг игры.

pub mod card;
pub mod chips;
pub mod config;
pub mod deck;
pub mod player;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use config::*;
pub use deck::*;
pub use player::*;
