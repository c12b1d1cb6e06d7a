use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex};

/// Решение игрока на улице.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Decision {
    Fold,
    Call,
    Raise,
}

/// Тип действия игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    Fold,
    /// Call не двигает фишки: сумму должен выставить вызывающий код.
    Call,
    /// Поставить ровно столько на этой улице.
    Raise(Chips),
}

impl PlayerActionKind {
    pub fn decision(&self) -> Decision {
        match self {
            PlayerActionKind::Fold => Decision::Fold,
            PlayerActionKind::Call => Decision::Call,
            PlayerActionKind::Raise(_) => Decision::Raise,
        }
    }
}

/// Конкретное действие игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    pub seat: SeatIndex,
    pub kind: PlayerActionKind,
}

impl PlayerAction {
    pub fn new(seat: SeatIndex, kind: PlayerActionKind) -> Self {
        Self { seat, kind }
    }
}
