use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

use super::evaluator::compute_hand;
use super::hand_rank::{HandCategory, HandValue};

/// Решающая карта при победе старшей картой.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HighCard {
    pub suit: Suit,
    pub rank: Rank,
}

impl fmt::Display for HighCard {
    /// Формат вида `A of hearts`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit.name())
    }
}

/// Итог сравнения рук.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ShowdownResult {
    Win {
        /// Индекс победителя во входном списке рук.
        index: usize,
        /// Лучшая рука победителя.
        hand: HandValue,
        /// Заполняется только для категории high card.
        high_card: Option<HighCard>,
    },
    Draw,
}

impl ShowdownResult {
    pub fn is_draw(&self) -> bool {
        matches!(self, ShowdownResult::Draw)
    }

    pub fn winner(&self) -> Option<usize> {
        match self {
            ShowdownResult::Win { index, .. } => Some(*index),
            ShowdownResult::Draw => None,
        }
    }

    /// Имя выигравшей комбинации.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            ShowdownResult::Win { hand, .. } => Some(hand.name()),
            ShowdownResult::Draw => None,
        }
    }

    /// Перевести индекс победителя (например, из позиции претендента в место за столом).
    pub fn map_index<F: FnOnce(usize) -> usize>(self, f: F) -> Self {
        match self {
            ShowdownResult::Win {
                index,
                hand,
                high_card,
            } => ShowdownResult::Win {
                index: f(index),
                hand,
                high_card,
            },
            ShowdownResult::Draw => ShowdownResult::Draw,
        }
    }
}

/// Сравнить руки игроков при общих картах `community`.
///
/// Одинаковое лучшее значение у нескольких игроков, ничья. Исключение:
/// если все лидеры собрали только high card, побеждает тот, чья старшая
/// карта старше по масти (Clubs < Diamonds < Hearts < Spades). В классическом
/// холдеме так не делают, это поведение продукта. Если у лидеров решающая
/// карта одна и та же (с борда), ничья.
pub fn compare_hands<H: AsRef<[Card]>>(hands: &[H], community: &[Card]) -> ShowdownResult {
    let values: Vec<HandValue> = hands
        .iter()
        .map(|hand| {
            let mut pool = hand.as_ref().to_vec();
            pool.extend_from_slice(community);
            compute_hand(&pool, &pool)
        })
        .collect();

    let best = match values.iter().map(|v| v.rank).max() {
        Some(best) => best,
        None => return ShowdownResult::Draw,
    };

    let leaders: Vec<usize> = values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.rank == best)
        .map(|(i, _)| i)
        .collect();

    let winner = match leaders.as_slice() {
        [single] => *single,
        _ if best.category() == HandCategory::HighCard => {
            // Ранги совпадают полностью. Старшая карта может оказаться общей
            // (одна и та же карта с борда), тогда масть ничего не решает.
            let suits: Vec<_> = leaders
                .iter()
                .map(|&i| values[i].decisive_card().map(|c| c.suit))
                .collect();
            let top = suits.iter().max().copied().flatten();
            let holders: Vec<usize> = leaders
                .iter()
                .zip(&suits)
                .filter(|(_, s)| **s == top)
                .map(|(&i, _)| i)
                .collect();
            match holders.as_slice() {
                [single] => *single,
                _ => return ShowdownResult::Draw,
            }
        }
        _ => return ShowdownResult::Draw,
    };

    let hand = values[winner].clone();
    let high_card = if hand.category() == HandCategory::HighCard {
        hand.decisive_card().map(|c| HighCard {
            suit: c.suit,
            rank: c.rank,
        })
    } else {
        None
    };

    ShowdownResult::Win {
        index: winner,
        hand,
        high_card,
    }
}
