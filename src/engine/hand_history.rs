use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::player::SeatIndex;
use crate::engine::actions::PlayerActionKind;
use crate::eval::ShowdownResult;

/// Тип события в игре.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum HandEventKind {
    /// Колода перемешана, карманные карты розданы.
    RoundDealt {
        round: u64,
        dealt: Vec<SeatIndex>,
    },

    /// Раунд начат, анте выставлены.
    RoundStarted {
        round: u64,
        ante: Chips,
        active: Vec<SeatIndex>,
    },

    /// Действие игрока.
    PlayerActed {
        seat: SeatIndex,
        action: PlayerActionKind,
        committed: Chips,
    },

    /// Улица закрыта: ставки ушли в банк, открыты общие карты.
    StreetEnded {
        street: usize,
        revealed: Vec<Card>,
        pot_after: Chips,
    },

    /// Шоудаун.
    Settled {
        pot: Chips,
        result: ShowdownResult,
    },

    /// Банк без претендентов (все сфолдили).
    PotForfeited {
        amount: Chips,
    },

    /// Игра не может продолжаться.
    GameOver {
        active: usize,
    },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// История игры, только дописывается. Охватывает все раунды с момента
/// создания игры или последнего `HoldemGame::take_history`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Последнее событие, если есть.
    pub fn last(&self) -> Option<&HandEventKind> {
        self.events.last().map(|e| &e.kind)
    }

    /// Выгрузить историю в JSON (для реплеера).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
