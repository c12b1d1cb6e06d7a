use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;

/// Размер стандартной колоды.
pub const DECK_SIZE: usize = 52;

/// Сколько карманных карт получает каждый игрок.
pub const HOLE_CARDS: usize = 2;

/// Ошибки конфигурации игры.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Лимит общих карт должен быть больше нуля")]
    ZeroCommunityCap,

    #[error("Лимит общих карт {0} больше пяти")]
    CommunityCapTooLarge(usize),

    #[error("За улицу должна открываться хотя бы одна карта")]
    ZeroReveal,

    #[error("Минимальная ставка не может быть отрицательной: {0}")]
    NegativeMinBet(Chips),

    #[error("Нужно хотя бы два игрока, передано {0}")]
    NotEnoughPlayers(usize),

    #[error("Колоды не хватит на {players} игроков и {community} общих карт")]
    TooManyPlayers { players: usize, community: usize },

    #[error("Некорректный JSON конфигурации: {0}")]
    Json(#[from] serde_json::Error),
}

/// Параметры игры: анте и формат открытия общих карт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Минимальная ставка, она же анте на старте раунда.
    pub min_bet: Chips,
    /// Максимум общих карт на столе (5 для полного холдема).
    pub community_cap: usize,
    /// Сколько карт открывает каждый `end_street`.
    pub reveal_per_street: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_bet: Chips(10),
            community_cap: 5,
            reveal_per_street: 1,
        }
    }
}

impl GameConfig {
    pub fn new(min_bet: Chips, community_cap: usize, reveal_per_street: usize) -> Self {
        Self {
            min_bet,
            community_cap,
            reveal_per_street,
        }
    }

    /// Загрузить конфиг из JSON. Отсутствующие поля берутся из `Default`.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Проверка конфига для заданного числа игроков.
    pub fn validate(&self, players: usize) -> Result<(), ConfigError> {
        if self.community_cap == 0 {
            return Err(ConfigError::ZeroCommunityCap);
        }
        if self.community_cap > 5 {
            return Err(ConfigError::CommunityCapTooLarge(self.community_cap));
        }
        if self.reveal_per_street == 0 {
            return Err(ConfigError::ZeroReveal);
        }
        if self.min_bet.is_negative() {
            return Err(ConfigError::NegativeMinBet(self.min_bet));
        }
        if players < 2 {
            return Err(ConfigError::NotEnoughPlayers(players));
        }
        if players * HOLE_CARDS + self.community_cap > DECK_SIZE {
            return Err(ConfigError::TooManyPlayers {
                players,
                community: self.community_cap,
            });
        }
        Ok(())
    }

    /// Сколько `end_street` нужно, чтобы открыть все общие карты.
    pub fn streets_to_showdown(&self) -> usize {
        if self.reveal_per_street == 0 {
            return 0;
        }
        self.community_cap.div_ceil(self.reveal_per_street)
    }
}
