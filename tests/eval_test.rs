//! Тесты оценщика рук: категории, тай-брейки, стриты, неполные руки.

use holdem_round::domain::card::{parse_cards, Card, Rank, Suit};
use holdem_round::domain::deck::Deck;
use holdem_round::engine::RandomSource;
use holdem_round::eval::{
    compute_hand, describe_hand, evaluate_best_hand, evaluate_cards, HandCategory, HandRank,
};
use holdem_round::infra::DeterministicRng;

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap()
}

fn category_of(s: &str) -> HandCategory {
    let hand = cards(s);
    compute_hand(&hand, &hand).category()
}

fn rank_of(s: &str) -> HandRank {
    let hand = cards(s);
    compute_hand(&hand, &hand).rank
}

#[test]
fn detects_every_category_on_five_cards() {
    assert_eq!(category_of("Ah Kd 9c 7s 3h"), HandCategory::HighCard);
    assert_eq!(category_of("Ah Ad 9c 7s 3h"), HandCategory::OnePair);
    assert_eq!(category_of("Ah Ad 9c 9s 3h"), HandCategory::TwoPair);
    assert_eq!(category_of("Ah Ad Ac 9s 3h"), HandCategory::ThreeOfAKind);
    assert_eq!(category_of("9h Td Jc Qs Kh"), HandCategory::Straight);
    assert_eq!(category_of("2h 7h 9h Jh Kh"), HandCategory::Flush);
    assert_eq!(category_of("Ah Ad Ac 9s 9h"), HandCategory::FullHouse);
    assert_eq!(category_of("Ah Ad Ac As 9h"), HandCategory::FourOfAKind);
    assert_eq!(category_of("5d 6d 7d 8d 9d"), HandCategory::StraightFlush);
}

#[test]
fn royal_flush_is_named_but_shares_category() {
    let hand = cards("Ts Js Qs Ks As");
    let value = compute_hand(&hand, &hand);
    assert_eq!(value.category(), HandCategory::StraightFlush);
    assert!(value.is_royal());
    assert_eq!(value.name(), "royal flush");
    assert_eq!(describe_hand(value.rank), "Royal flush");

    let lower = cards("9s Ts Js Qs Ks");
    let lower_value = compute_hand(&lower, &lower);
    assert!(!lower_value.is_royal());
    assert_eq!(lower_value.name(), "straight flush");
    assert!(value.rank > lower_value.rank);
}

#[test]
fn wheel_is_a_five_high_straight() {
    let wheel = rank_of("Ah 2d 3c 4s 5h");
    assert_eq!(wheel.category(), HandCategory::Straight);
    assert_eq!(wheel.tiebreak().first(), Some(&Rank::Five));

    let six_high = rank_of("2d 3c 4s 5h 6c");
    assert!(six_high > wheel, "6-high стрит старше wheel");
}

#[test]
fn wrap_around_run_is_not_a_straight() {
    assert_eq!(category_of("Qh Kd Ac 2s 3h"), HandCategory::HighCard);
    assert_eq!(category_of("Jh Qd Kc As 2h"), HandCategory::HighCard);
}

#[test]
fn weakest_quads_beat_strongest_full_house() {
    let quads = rank_of("2h 2d 2c 2s 3h");
    let boat = rank_of("Ah Ad Ac Ks Kh");
    assert!(quads > boat);
}

#[test]
fn category_dominates_every_kicker() {
    let ordered = [
        "7h 5d 4c 3s 2h", // худший high card
        "2h 2d 3c 4s 5h", // худшая пара
        "3h 3d 2c 2s 4h",
        "2h 2d 2c 3s 4h",
        "Ah 2d 3c 4s 5h", // wheel
        "2h 3h 4h 5h 7h",
        "2h 2d 2c 3s 3h",
        "2h 2d 2c 2s 3h",
        "Ah 2h 3h 4h 5h",
    ];
    let best_of_previous = [
        "Ah Kd Qc Js 9h",
        "Ah Ad Kc Qs Jh",
        "Ah Ad Kc Ks Qh",
        "Ah Ad Ac Ks Qh",
        "Ah Kd Qc Js Th",
        "Ah Kh Qh Jh 9h",
        "Ah Ad Ac Ks Kh",
        "Ah Ad Ac As Kh",
    ];
    for i in 1..ordered.len() {
        let weakest = rank_of(ordered[i]);
        let strongest_below = rank_of(best_of_previous[i - 1]);
        assert_eq!(weakest.category() as u8, i as u8);
        assert!(
            weakest > strongest_below,
            "{} должен быть сильнее {}",
            ordered[i],
            best_of_previous[i - 1]
        );
    }
}

#[test]
fn kickers_break_ties_within_category() {
    assert!(rank_of("Ah Ad Kc 9s 3h") > rank_of("Ah Ad Qc 9s 3h"));
    assert!(rank_of("Kh Kd 5c 5s 2h") > rank_of("Kh Kd 4c 4s Ah"));
    assert!(rank_of("Kh Kd 5c 5s 3h") > rank_of("Kc Ks 5h 5d 2h"));
    assert!(rank_of("9h 9d 9c As 2h") > rank_of("9h 9d 9c Ks Qh"));
    assert!(rank_of("3h 3d 3c As Ah") > rank_of("2h 2d 2c As Ah"));
    assert!(rank_of("Ah Jh 9h 7h 3h") > rank_of("Ah Jh 9h 7h 2h"));
}

#[test]
fn equal_ranks_in_different_suits_tie() {
    assert_eq!(rank_of("Ah Kd 9c 7s 3h"), rank_of("Ad Kc 9s 7h 3c"));
}

#[test]
fn best_five_are_chosen_from_seven() {
    // Флеш-дро + стрит на борде: лучший вариант, стрит-флеш.
    let hole = cards("8c Kc");
    let board = cards("9c Tc Jc Qc 2d");
    let rank = evaluate_best_hand(&hole, &board);
    assert_eq!(rank.category(), HandCategory::StraightFlush);
    assert_eq!(rank.tiebreak().first(), Some(&Rank::King));

    // Два сета: выбирается фулл-хаус со старшим сетом.
    let all = cards("Qh Qd Qc 7s 7h 7d 2c");
    let value = compute_hand(&all, &all);
    assert_eq!(value.category(), HandCategory::FullHouse);
    assert_eq!(value.rank.tiebreak(), vec![Rank::Queen, Rank::Seven]);
    assert_eq!(value.cards.len(), 5);
}

#[test]
fn fewer_than_five_cards_use_multiplicity_categories_only() {
    assert_eq!(category_of("Ah Ad"), HandCategory::OnePair);
    assert_eq!(category_of("Ah Kd"), HandCategory::HighCard);
    assert_eq!(category_of("Ah Ad Kc Ks"), HandCategory::TwoPair);
    assert_eq!(category_of("7h 7d 7c"), HandCategory::ThreeOfAKind);
    assert_eq!(category_of("7h 7d 7c 7s"), HandCategory::FourOfAKind);
    // Четыре одномастные подряд, ещё не стрит и не флеш.
    assert_eq!(category_of("9h Th Jh Qh"), HandCategory::HighCard);

    assert!(rank_of("Ah Ad") > rank_of("Kh Kd"));
    assert!(rank_of("Ah Kd") > rank_of("Ah Qd"));
}

#[test]
fn main_cards_anchor_every_combination() {
    // На борде роял, но каждая комбинация обязана включать карманную карту.
    let hole = cards("2c 3d");
    let mut all = hole.clone();
    all.extend(cards("As Ks Qs Js Ts"));

    let anchored = compute_hand(&all, &hole);
    assert_eq!(anchored.category(), HandCategory::HighCard);
    assert!(anchored.cards.iter().any(|c| hole.contains(c)));

    let free = compute_hand(&all, &all);
    assert_eq!(free.category(), HandCategory::StraightFlush);
}

#[test]
fn main_cards_missing_from_pool_are_added() {
    let value = compute_hand(&cards("Ah"), &cards("Ad"));
    assert_eq!(value.category(), HandCategory::OnePair);
}

#[test]
fn decisive_card_is_highest_card_of_best_hand() {
    let hand = cards("Kd 9c 7s 3h As");
    let value = compute_hand(&hand, &hand);
    let top = value.decisive_card().unwrap();
    assert_eq!(top.rank, Rank::Ace);
    assert_eq!(top.suit, Suit::Spades);
}

/// Независимая классификация ровно пяти карт «в лоб».
fn reference_category(hand: &[Card]) -> HandCategory {
    let mut counts = [0u8; 15];
    for card in hand {
        counts[card.rank.value() as usize] += 1;
    }
    let mut groups: Vec<u8> = counts.iter().copied().filter(|&n| n > 0).collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let flush = hand.iter().all(|c| c.suit == hand[0].suit);
    let mut values: Vec<u8> = hand.iter().map(|c| c.rank.value()).collect();
    values.sort_unstable();
    let distinct = groups.len() == 5;
    let straight = distinct
        && (values[4] - values[0] == 4 || values == vec![2, 3, 4, 5, 14]);

    match (straight, flush, groups.as_slice()) {
        (true, true, _) => HandCategory::StraightFlush,
        (_, _, [4, 1]) => HandCategory::FourOfAKind,
        (_, _, [3, 2]) => HandCategory::FullHouse,
        (false, true, _) => HandCategory::Flush,
        (true, false, _) => HandCategory::Straight,
        (_, _, [3, 1, 1]) => HandCategory::ThreeOfAKind,
        (_, _, [2, 2, 1]) => HandCategory::TwoPair,
        (_, _, [2, 1, 1, 1]) => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    }
}

#[test]
fn every_sampled_five_card_set_matches_exactly_its_reference_category() {
    let mut rng = DeterministicRng::from_seed(7);
    let mut deck = Deck::standard_52();

    for _ in 0..5_000 {
        rng.shuffle(&mut deck.cards);
        let hand = &deck.cards[..5];
        let rank = evaluate_cards(hand);
        assert_eq!(
            rank.category(),
            reference_category(hand),
            "рука {:?}",
            hand
        );
    }
}
