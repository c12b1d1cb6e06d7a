use holdem_round::domain::{Chips, GameConfig};
use holdem_round::engine::{EngineError, HoldemGame};
use holdem_round::eval::{HandCategory, ShowdownResult};
use holdem_round::infra::{DeterministicRng, ShuffledDeck};

// Параметры прогона, можно смело крутить.
const PLAYERS: usize = 4;
const START_BALANCE: i64 = 200;
const MAX_ROUNDS: u32 = 500;

/// Использование: `holdem_dev_cli [seed] [config.json]`
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let config = match args.next() {
        Some(path) => match load_config(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("[DEV] не удалось загрузить конфиг {path}: {e}");
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    println!("holdem_dev_cli: seed={seed}, config={config:?}");

    let source = ShuffledDeck::new(DeterministicRng::from_seed(seed));
    let balances = vec![Chips(START_BALANCE); PLAYERS];
    let mut game = match HoldemGame::new(config, balances, source) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("[DEV] не удалось создать игру: {e}");
            std::process::exit(1);
        }
    };

    let mut wins = 0u32;
    let mut draws = 0u32;
    let mut played = 0u32;
    let mut events = 0usize;

    for _ in 0..MAX_ROUNDS {
        match play_round(&mut game) {
            Ok(ShowdownResult::Win {
                index, high_card: Some(card), ..
            }) => {
                wins += 1;
                println!(
                    "[ROUND {}] место {index} выигрывает старшей картой: {card}",
                    game.round_number() - 1
                );
            }
            Ok(ShowdownResult::Win { index, hand, .. }) => {
                wins += 1;
                println!(
                    "[ROUND {}] место {index} выигрывает: {}",
                    game.round_number() - 1,
                    hand.name()
                );
            }
            Ok(ShowdownResult::Draw) => {
                draws += 1;
                println!("[ROUND {}] ничья", game.round_number() - 1);
            }
            Err(e) if e.is_fatal() => {
                println!("[DEV] игра окончена: {e}");
                break;
            }
            Err(e) => {
                eprintln!("[DEV] ОШИБКА в ходе раунда: {e}");
                break;
            }
        }
        played += 1;
        events += game.take_history().len();
    }

    println!();
    println!("=========== SUMMARY ===========");
    println!("Сыграно раундов: {played}");
    println!("Побед: {wins}, ничьих: {draws}");
    println!("Событий в истории: {events}");
    for (seat, p) in game.players().iter().enumerate() {
        println!("  место {seat}: баланс {}", p.balance);
    }
    println!("===============================");
}

fn load_config(path: &str) -> Result<GameConfig, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(GameConfig::from_json_str(&text)?)
}

/// Один раунд с простой бот-логикой:
/// пара и сильнее, рейз на min_bet поверх старшей ставки, high card с открытыми
/// картами, fold (если останется кому играть), иначе call.
fn play_round<S: holdem_round::engine::CardSource>(
    game: &mut HoldemGame<S>,
) -> Result<ShowdownResult, EngineError> {
    game.start_round()?;
    let min_bet = game.config().min_bet;

    loop {
        for seat in game.awaiting() {
            let player = &game.players()[seat];
            let mut cards = player.hole_cards.clone();
            cards.extend_from_slice(game.table());
            let strength = game.compute_hand(&cards).category();
            let claimants = game.players().iter().filter(|p| p.is_claimant()).count();

            let target = game.high_bet() + min_bet;
            if strength >= HandCategory::OnePair && player.balance >= target {
                game.raise(seat, target)?;
            } else if strength == HandCategory::HighCard && !game.table().is_empty() && claimants > 2 {
                game.fold(seat)?;
            } else {
                game.call(seat)?;
            }
        }

        if game.is_community_complete() {
            break;
        }
        game.end_street()?;
    }

    game.settle()
}
