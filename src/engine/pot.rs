use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::engine::betting::RoundEntry;

/// Общий банк раунда. Растёт при закрытии каждой улицы, обнуляется
/// после шоудауна.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub total: Chips,
}

impl Pot {
    pub fn new() -> Self {
        Self { total: Chips::ZERO }
    }

    /// Забрать вклады улицы: баланс каждого игрока уменьшается на его
    /// вклад, записи обнуляются (вместе с решениями).
    /// Возвращает, сколько фишек пришло в банк.
    pub fn sweep(&mut self, players: &mut [Player], entries: &mut [RoundEntry]) -> Chips {
        let mut swept = Chips::ZERO;
        for (player, entry) in players.iter_mut().zip(entries.iter_mut()) {
            player.balance -= entry.committed;
            swept += entry.committed;
            *entry = RoundEntry::default();
        }
        self.total += swept;
        swept
    }

    pub fn reset(&mut self) {
        self.total = Chips::ZERO;
    }
}
