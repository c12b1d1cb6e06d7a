use crate::domain::{Chips, ConfigError, DeckError, SeatIndex};

use thiserror::Error;

/// Ошибки движка раунда.
///
/// Отклонённая операция никогда не меняет состояние игры.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Раунд не начат")]
    NoActiveRound,

    #[error("Раунд уже идёт")]
    RoundAlreadyStarted,

    #[error("Игрока {0} нет за столом")]
    InvalidPlayer(SeatIndex),

    #[error("Игрок {0} не участвует в раунде")]
    PlayerInactive(SeatIndex),

    #[error("Игрок {0} уже сфолдил в этом раунде")]
    PlayerFolded(SeatIndex),

    #[error("Игрок {0} уже принял решение на этой улице, закройте улицу")]
    DecisionAlreadyMade(SeatIndex),

    #[error("Недопустимый размер ставки: {0}")]
    InvalidAmount(Chips),

    #[error("Недостаточно фишек: баланс {balance}, ставка {requested}")]
    InsufficientBalance { balance: Chips, requested: Chips },

    #[error("Ни одна улица ещё не закрыта")]
    NoStreetClosed,

    #[error("Все общие карты открыты, вызовите settle")]
    CommunityComplete,

    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error("Игра не может продолжаться: активных игроков {active}")]
    CannotContinue { active: usize },

    #[error("Игра окончена, нужно пересадить игроков")]
    GameOver,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl EngineError {
    /// Терминальный сигнал: без пересадки игроков новый раунд не начать.
    pub fn is_fatal(&self) -> bool {
        matches!(self, EngineError::CannotContinue { .. } | EngineError::GameOver)
    }
}
