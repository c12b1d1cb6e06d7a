//! Инфраструктура вокруг движка:
//! - RNG-реализации;
//! - источник карт на их основе.

pub mod card_source;
pub mod rng;

pub use card_source::ShuffledDeck;
pub use rng::*;
