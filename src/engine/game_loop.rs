use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::config::{GameConfig, HOLE_CARDS};
use crate::domain::player::{Player, SeatIndex};
use crate::engine::actions::{PlayerAction, PlayerActionKind};
use crate::engine::betting::{
    awaiting_decision, high_bet, opening_entries, street_total, RoundEntry,
};
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::pot::Pot;
use crate::engine::validation::validate_action;
use crate::engine::CardSource;
use crate::eval::{compare_hands, compute_hand, HandValue, ShowdownResult};

/// Фаза игры.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundPhase {
    /// Карманные карты розданы, ждём `start_round`.
    Dealt,
    /// Раунд идёт: игроки действуют, `end_street` открывает карты.
    StreetOpen,
    /// Меньше двух активных игроков. Нужен `reseat`.
    GameOver,
}

/// Движок одной игры: игроки, банк, общие карты и решения на улице.
///
/// Все изменения идут через методы ниже. Операции строго последовательны
/// (`&mut self`); если столов несколько, каждый экземпляр нужно держать
/// под своей блокировкой.
///
/// История событий НЕ очищается между раундами: долгоживущий хост
/// должен регулярно забирать её через [`HoldemGame::take_history`],
/// иначе она растёт с каждым сыгранным раундом.
pub struct HoldemGame<S: CardSource> {
    config: GameConfig,
    players: Vec<Player>,
    round: Vec<RoundEntry>,
    pot: Pot,
    table: Vec<Card>,
    source: S,
    phase: RoundPhase,
    streets_closed: usize,
    round_number: u64,
    history: HandHistory,
}

impl<S: CardSource> HoldemGame<S> {
    /// Создать игру и раздать первый раунд.
    pub fn new(config: GameConfig, balances: Vec<Chips>, source: S) -> Result<Self, EngineError> {
        config.validate(balances.len())?;

        let mut game = Self {
            config,
            players: Vec::new(),
            round: Vec::new(),
            pot: Pot::new(),
            table: Vec::new(),
            source,
            phase: RoundPhase::Dealt,
            streets_closed: 0,
            round_number: 0,
            history: HandHistory::new(),
        };

        let holes = game.draw_hole_cards(&balances)?;
        game.install_round(balances, holes);
        Ok(game)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Вклады и решения текущей улицы. Пусто, пока раунд не начат.
    pub fn round(&self) -> &[RoundEntry] {
        &self.round
    }

    pub fn pot(&self) -> Chips {
        self.pot.total
    }

    /// Открытые общие карты.
    pub fn table(&self) -> &[Card] {
        &self.table
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Номер текущей улицы (0 до первой открытой карты).
    pub fn street(&self) -> usize {
        self.streets_closed
    }

    pub fn round_number(&self) -> u64 {
        self.round_number
    }

    pub fn history(&self) -> &HandHistory {
        &self.history
    }

    /// Забрать накопленную историю (например, чтобы сохранить её).
    /// После вызова история пуста и снова копится с нуля.
    pub fn take_history(&mut self) -> HandHistory {
        std::mem::take(&mut self.history)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Кто из претендентов ещё не принял решение на этой улице.
    pub fn awaiting(&self) -> Vec<SeatIndex> {
        awaiting_decision(&self.players, &self.round)
    }

    /// Наибольшая ставка на текущей улице. Движок её не навязывает:
    /// минимальный рейз и размер call проверяет вызывающий код.
    pub fn high_bet(&self) -> Chips {
        high_bet(&self.round)
    }

    /// Все ли общие карты открыты.
    pub fn is_community_complete(&self) -> bool {
        self.table.len() >= self.config.community_cap
    }

    /// Сила руки только по переданным картам (общие карты не учитываются).
    pub fn compute_hand(&self, cards: &[Card]) -> HandValue {
        compute_hand(cards, cards)
    }

    /// Старт раунда: игроки с отрицательным балансом выбывают,
    /// активные ставят анте размером `min_bet`.
    ///
    /// Если активных меньше двух, терминальная ошибка `CannotContinue`,
    /// записи раунда не создаются, игра переходит в `GameOver`.
    pub fn start_round(&mut self) -> Result<(), EngineError> {
        match self.phase {
            RoundPhase::Dealt => {}
            RoundPhase::StreetOpen => return Err(EngineError::RoundAlreadyStarted),
            RoundPhase::GameOver => return Err(EngineError::GameOver),
        }

        for p in self.players.iter_mut() {
            if p.balance.is_negative() {
                p.active = false;
            }
        }

        let active: Vec<SeatIndex> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.active)
            .map(|(seat, _)| seat)
            .collect();

        if active.len() < 2 {
            self.round.clear();
            self.phase = RoundPhase::GameOver;
            self.history.push(HandEventKind::GameOver {
                active: active.len(),
            });
            log::info!("game over: {} active player(s) left", active.len());
            return Err(EngineError::CannotContinue {
                active: active.len(),
            });
        }

        let ante = self.config.min_bet;
        self.round = opening_entries(&self.players, ante);
        self.phase = RoundPhase::StreetOpen;

        self.history.push(HandEventKind::RoundStarted {
            round: self.round_number,
            ante,
            active: active.clone(),
        });
        log::info!(
            "round {} started: {} active players, ante {}",
            self.round_number,
            active.len(),
            ante
        );
        Ok(())
    }

    /// Рейз: поставить `amount` на этой улице. Не больше баланса игрока.
    pub fn raise(&mut self, player: SeatIndex, amount: Chips) -> Result<(), EngineError> {
        self.act(PlayerAction::new(player, PlayerActionKind::Raise(amount)))
    }

    /// Call: решение записывается, ставка не меняется.
    pub fn call(&mut self, player: SeatIndex) -> Result<(), EngineError> {
        self.act(PlayerAction::new(player, PlayerActionKind::Call))
    }

    /// Fold: игрок теряет право на банк до конца раунда.
    pub fn fold(&mut self, player: SeatIndex) -> Result<(), EngineError> {
        self.act(PlayerAction::new(player, PlayerActionKind::Fold))
    }

    /// Применить действие игрока.
    pub fn act(&mut self, action: PlayerAction) -> Result<(), EngineError> {
        self.ensure_round_in_progress()?;

        let seat = action.seat;
        validate_action(
            seat,
            self.players.get(seat),
            self.round.get(seat),
            &action.kind,
        )?;

        let entry = &mut self.round[seat];
        entry.decision = Some(action.kind.decision());
        match action.kind {
            PlayerActionKind::Raise(amount) => entry.committed = amount,
            PlayerActionKind::Fold => self.players[seat].folded = true,
            PlayerActionKind::Call => {}
        }
        let committed = entry.committed;

        self.history.push(HandEventKind::PlayerActed {
            seat,
            action: action.kind,
            committed,
        });
        log::debug!("seat {seat}: {:?}, committed {committed}", action.kind);
        Ok(())
    }

    /// Закрыть улицу: все ставки уходят в банк (и списываются с балансов),
    /// решения сбрасываются, открываются новые общие карты.
    pub fn end_street(&mut self) -> Result<(), EngineError> {
        self.ensure_round_in_progress()?;
        if self.is_community_complete() {
            return Err(EngineError::CommunityComplete);
        }

        let count = self
            .config
            .reveal_per_street
            .min(self.config.community_cap - self.table.len());
        // Сначала карты: если колода кончилась, состояние не трогаем.
        let revealed = self.source.draw(count)?;

        self.sweep_street();
        self.table.extend_from_slice(&revealed);
        self.streets_closed += 1;

        self.history.push(HandEventKind::StreetEnded {
            street: self.streets_closed,
            revealed: revealed.clone(),
            pot_after: self.pot.total,
        });
        log::debug!(
            "street {} closed: pot {}, board {}",
            self.streets_closed,
            self.pot.total,
            format_cards(&self.table)
        );
        Ok(())
    }

    /// Шоудаун: сравнить руки претендентов и разыграть банк.
    ///
    /// Победитель забирает весь банк. При ничьей банк делится поровну
    /// между всеми не сфолдившими игроками, лишние фишки по одной
    /// уходят младшим местам. Затем раздаётся следующий раунд.
    pub fn settle(&mut self) -> Result<ShowdownResult, EngineError> {
        self.ensure_round_in_progress()?;
        if self.streets_closed == 0 {
            return Err(EngineError::NoStreetClosed);
        }

        // Ставки после последней открытой карты тоже идут в банк.
        let outstanding = street_total(&self.round);
        let pot_total = self.pot.total + outstanding;
        let mut balances: Vec<Chips> = self
            .players
            .iter()
            .zip(&self.round)
            .map(|(p, e)| p.balance - e.committed)
            .collect();

        let claimants: Vec<SeatIndex> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_claimant())
            .map(|(seat, _)| seat)
            .collect();
        let hands: Vec<&[Card]> = claimants
            .iter()
            .map(|&seat| self.players[seat].hole_cards.as_slice())
            .collect();

        let result = compare_hands(&hands, &self.table).map_index(|i| claimants[i]);
        let forfeited = distribute_pot(&result, &claimants, pot_total, &mut balances);

        let holes = self.draw_hole_cards(&balances)?;

        if let Some(amount) = forfeited {
            self.history.push(HandEventKind::PotForfeited { amount });
            log::warn!("pot of {amount} forfeited: no claimants left");
        }
        self.history.push(HandEventKind::Settled {
            pot: pot_total,
            result: result.clone(),
        });
        match &result {
            ShowdownResult::Win {
                index,
                high_card: Some(card),
                ..
            } => log::info!("seat {index} wins {pot_total} with high card {card}"),
            ShowdownResult::Win { index, hand, .. } => {
                log::info!("seat {index} wins {pot_total} with {}", hand.name())
            }
            ShowdownResult::Draw => log::info!("draw: pot {pot_total} split"),
        }

        self.install_round(balances, holes);
        Ok(result)
    }

    /// Пересадить игроков с новыми балансами и раздать новый раунд.
    /// Выход из `GameOver`.
    pub fn reseat(&mut self, balances: Vec<Chips>) -> Result<(), EngineError> {
        if self.phase == RoundPhase::StreetOpen {
            return Err(EngineError::RoundAlreadyStarted);
        }
        self.config.validate(balances.len())?;

        let holes = self.draw_hole_cards(&balances)?;
        self.install_round(balances, holes);
        Ok(())
    }

    fn ensure_round_in_progress(&self) -> Result<(), EngineError> {
        match self.phase {
            RoundPhase::StreetOpen => Ok(()),
            RoundPhase::Dealt => Err(EngineError::NoActiveRound),
            RoundPhase::GameOver => Err(EngineError::GameOver),
        }
    }

    /// Перенести ставки улицы в банк и обнулить записи.
    fn sweep_street(&mut self) {
        let swept = self.pot.sweep(&mut self.players, &mut self.round);
        log::trace!("swept {swept} into the pot");
    }

    /// Перемешать источник и вытянуть по две карты каждому игроку
    /// с неотрицательным балансом. Карты берутся одним `draw`: если колоды
    /// не хватает, из источника не уходит ни одной карты.
    fn draw_hole_cards(&mut self, balances: &[Chips]) -> Result<Vec<Vec<Card>>, EngineError> {
        self.source.shuffle();
        let dealt = balances.iter().filter(|b| !b.is_negative()).count();
        let drawn = self.source.draw(HOLE_CARDS * dealt)?;

        let mut pairs = drawn.chunks(HOLE_CARDS);
        let holes = balances
            .iter()
            .map(|balance| {
                if balance.is_negative() {
                    Vec::new()
                } else {
                    pairs.next().map(<[Card]>::to_vec).unwrap_or_default()
                }
            })
            .collect();
        Ok(holes)
    }

    /// Новый раунд с перенесёнными балансами.
    fn install_round(&mut self, balances: Vec<Chips>, holes: Vec<Vec<Card>>) {
        self.players = balances
            .into_iter()
            .zip(holes)
            .map(|(balance, hole_cards)| Player {
                hole_cards,
                ..Player::new(balance)
            })
            .collect();
        self.round.clear();
        self.pot.reset();
        self.table.clear();
        self.streets_closed = 0;
        self.phase = RoundPhase::Dealt;
        self.round_number += 1;

        let dealt: Vec<SeatIndex> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.hole_cards.is_empty())
            .map(|(seat, _)| seat)
            .collect();
        self.history.push(HandEventKind::RoundDealt {
            round: self.round_number,
            dealt,
        });
    }
}

/// Раздать банк по результату шоудауна.
/// Возвращает сумму, которую некому отдать (все сфолдили).
fn distribute_pot(
    result: &ShowdownResult,
    claimants: &[SeatIndex],
    pot: Chips,
    balances: &mut [Chips],
) -> Option<Chips> {
    match result {
        ShowdownResult::Win { index, .. } => {
            balances[*index] += pot;
            None
        }
        ShowdownResult::Draw if claimants.is_empty() => {
            if pot.is_zero() {
                None
            } else {
                Some(pot)
            }
        }
        ShowdownResult::Draw => {
            let (share, remainder) = pot.split(claimants.len());
            for (i, &seat) in claimants.iter().enumerate() {
                balances[seat] += share;
                if (i as i64) < remainder.0 {
                    balances[seat] += Chips(1);
                }
            }
            None
        }
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
