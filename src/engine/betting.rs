use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::{Player, SeatIndex};
use crate::engine::actions::Decision;

/// Вклад и решение игрока на текущей улице.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundEntry {
    /// Сколько фишек поставлено на этой улице.
    pub committed: Chips,
    /// None, если игрок ещё не действовал на этой улице.
    pub decision: Option<Decision>,
}

impl RoundEntry {
    pub fn with_ante(ante: Chips) -> Self {
        Self {
            committed: ante,
            decision: None,
        }
    }

    pub fn has_decided(&self) -> bool {
        self.decision.is_some()
    }
}

/// Записи раунда на старте: анте для активных, ноль для остальных.
pub fn opening_entries(players: &[Player], ante: Chips) -> Vec<RoundEntry> {
    players
        .iter()
        .map(|p| {
            if p.active {
                RoundEntry::with_ante(ante)
            } else {
                RoundEntry::default()
            }
        })
        .collect()
}

/// Сколько всего поставлено на текущей улице.
pub fn street_total(entries: &[RoundEntry]) -> Chips {
    entries.iter().map(|e| e.committed).sum()
}

/// Максимальная ставка на улице.
pub fn high_bet(entries: &[RoundEntry]) -> Chips {
    entries
        .iter()
        .map(|e| e.committed)
        .max()
        .unwrap_or(Chips::ZERO)
}

/// Кто из претендентов ещё не принял решение на этой улице.
pub fn awaiting_decision(players: &[Player], entries: &[RoundEntry]) -> Vec<SeatIndex> {
    players
        .iter()
        .zip(entries)
        .enumerate()
        .filter(|(_, (p, e))| p.is_claimant() && !e.has_decided())
        .map(|(seat, _)| seat)
        .collect()
}
