//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Основные функции:
//!   `compute_hand(all, main) -> HandValue`: лучшая комбинация;
//!   `compare_hands(hands, community) -> ShowdownResult`: победитель или ничья.

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;
pub mod showdown;

pub use evaluator::{compute_hand, evaluate_best_hand, evaluate_cards};
pub use hand_rank::{describe_hand, hand_category, HandCategory, HandRank, HandValue};
pub use showdown::{compare_hands, HighCard, ShowdownResult};
