use crate::domain::card::{Card, Rank, Suit};

use super::hand_rank::{HandCategory, HandRank, HandValue};
use super::lookup_tables::{detect_straight, rank_to_bit, straight_ranks, RankMask};

/// Сколько карт в полной покерной комбинации.
pub const HAND_SIZE: usize = 5;

/// Лучшая рука из `all_cards`.
///
/// `main_cards` задают «якорные» карты, каждая рассматриваемая комбинация
/// обязана содержать хотя бы одну из них. Карты из `main_cards`, которых
/// нет в `all_cards`, добавляются в пул. При `main_cards == all_cards`
/// ограничение ничего не отсекает; пустой `main_cards` тоже ничего не отсекает.
///
/// Перебираются все подмножества размера `min(5, пул)`. Карт может быть
/// от 1 до 7; пустой пул считается нарушением контракта (паника).
pub fn compute_hand(all_cards: &[Card], main_cards: &[Card]) -> HandValue {
    let mut pool: Vec<Card> = all_cards.to_vec();
    for card in main_cards {
        if !pool.contains(card) {
            pool.push(*card);
        }
    }
    assert!(!pool.is_empty(), "compute_hand ожидает хотя бы одну карту");

    let k = pool.len().min(HAND_SIZE);
    let mut best: Option<HandValue> = None;

    for_each_combination(pool.len(), k, |idx| {
        let combo: Vec<Card> = idx.iter().map(|&i| pool[i]).collect();
        if !main_cards.is_empty() && !combo.iter().any(|c| main_cards.contains(c)) {
            return;
        }
        let rank = evaluate_cards(&combo);
        if best.as_ref().map_or(true, |b| rank > b.rank) {
            best = Some(HandValue { rank, cards: combo });
        }
    });

    // Якорь всегда лежит в пуле, значит хотя бы одна комбинация его содержит.
    best.unwrap_or_else(|| HandValue {
        rank: evaluate_cards(&pool[..k]),
        cards: pool[..k].to_vec(),
    })
}

/// Главная функция для шоудауна: лучшая рука из hole + board.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> HandRank {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);

    compute_hand(&all_cards, &all_cards).rank
}

/// Обойти все сочетания из `n` по `k` (индексы по возрастанию).
fn for_each_combination<F: FnMut(&[usize])>(n: usize, k: usize, mut f: F) {
    if k > n {
        return;
    }
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        f(&idx);

        // Найти самую правую позицию, которую ещё можно сдвинуть.
        let mut i = k;
        loop {
            if i == 0 {
                return;
            }
            i -= 1;
            if idx[i] < n - k + i {
                break;
            }
        }
        idx[i] += 1;
        for j in (i + 1)..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

/// Оценка одной комбинации из 1..=5 карт.
///
/// Стрит, флеш, фулл-хаус и стрит-флеш возможны только на пяти картах.
pub fn evaluate_cards(cards: &[Card]) -> HandRank {
    let mut suit_counts = [0u8; 4];
    let mut rank_counts = [0u8; 15]; // индексы 2..=14
    let mut rank_mask: RankMask = 0;

    for card in cards {
        let suit_idx = match card.suit {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        };
        suit_counts[suit_idx] += 1;
        rank_counts[card.rank.value() as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    let full = cards.len() == HAND_SIZE;
    let is_flush = full && suit_counts.iter().any(|&c| c as usize == HAND_SIZE);
    let straight_high = if full { detect_straight(rank_mask) } else { None };

    // (ранг, количество), сначала по количеству, затем по рангу, по убыванию.
    // Такой порядок и есть последовательность тай-брейка для всех
    // категорий, кроме стрита.
    let mut rc_list: Vec<(Rank, u8)> = Rank::ALL
        .iter()
        .rev()
        .filter(|r| rank_counts[r.value() as usize] > 0)
        .map(|&r| (r, rank_counts[r.value() as usize]))
        .collect();
    rc_list.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

    let pattern: Vec<u8> = rc_list.iter().map(|rc| rc.1).collect();
    let ordered: Vec<Rank> = rc_list.iter().map(|rc| rc.0).collect();

    let category = match (is_flush, straight_high, pattern.as_slice()) {
        (true, Some(_), _) => HandCategory::StraightFlush,
        (_, _, [4, ..]) => HandCategory::FourOfAKind,
        (_, _, [3, 2]) => HandCategory::FullHouse,
        (true, None, _) => HandCategory::Flush,
        (false, Some(_), _) => HandCategory::Straight,
        (_, _, [3, ..]) => HandCategory::ThreeOfAKind,
        (_, _, [2, 2, ..]) => HandCategory::TwoPair,
        (_, _, [2, ..]) => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    match (category, straight_high) {
        (HandCategory::StraightFlush | HandCategory::Straight, Some(high)) => {
            HandRank::from_category_and_ranks(category, &straight_ranks(high))
        }
        _ => HandRank::from_category_and_ranks(category, &ordered),
    }
}
