use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;

/// Индекс игрока за столом (0..players.len()-1).
pub type SeatIndex = usize;

/// Состояние игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    /// Текущий баланс. Может быть отрицательным после анте.
    pub balance: Chips,
    /// Карманные карты (2 для холдема, пусто если игрок не участвует).
    pub hole_cards: Vec<Card>,
    /// Игрок сфолдил и больше не претендует на банк текущего раунда.
    pub folded: bool,
    /// Игрок участвует в раунде (баланс ≥ 0 на старте).
    pub active: bool,
}

impl Player {
    pub fn new(balance: Chips) -> Self {
        Self {
            balance,
            hole_cards: Vec::new(),
            folded: false,
            active: !balance.is_negative(),
        }
    }

    /// Претендует ли игрок на банк при шоудауне.
    pub fn is_claimant(&self) -> bool {
        self.active && !self.folded
    }
}
