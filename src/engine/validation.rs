use crate::domain::chips::Chips;
use crate::domain::player::{Player, SeatIndex};
use crate::engine::actions::PlayerActionKind;
use crate::engine::betting::RoundEntry;
use crate::engine::errors::EngineError;

/// Проверка, может ли игрок принять решение на текущей улице.
///
/// Соответствие суммы call текущей ставке не проверяется:
/// это ответственность вызывающего кода.
pub fn validate_action(
    seat: SeatIndex,
    player: Option<&Player>,
    entry: Option<&RoundEntry>,
    action: &PlayerActionKind,
) -> Result<(), EngineError> {
    let (player, entry) = match (player, entry) {
        (Some(p), Some(e)) => (p, e),
        _ => return Err(EngineError::InvalidPlayer(seat)),
    };

    if !player.active {
        return Err(EngineError::PlayerInactive(seat));
    }
    if player.folded {
        return Err(EngineError::PlayerFolded(seat));
    }
    if entry.has_decided() {
        return Err(EngineError::DecisionAlreadyMade(seat));
    }

    match action {
        PlayerActionKind::Fold | PlayerActionKind::Call => Ok(()),
        // Минимальный рейз не проверяется, только баланс.
        PlayerActionKind::Raise(amount) => validate_raise_amount(player, *amount),
    }
}

fn validate_raise_amount(player: &Player, amount: Chips) -> Result<(), EngineError> {
    if amount.is_negative() {
        return Err(EngineError::InvalidAmount(amount));
    }
    if amount > player.balance {
        return Err(EngineError::InsufficientBalance {
            balance: player.balance,
            requested: amount,
        });
    }
    Ok(())
}
