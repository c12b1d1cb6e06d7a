//! Шоудаун: кто сильнее, ничьи, тай-брейк мастью для high card.

use holdem_round::domain::card::{parse_cards, Card, Rank, Suit};
use holdem_round::eval::{compare_hands, HandCategory, HighCard, ShowdownResult};

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap()
}

#[test]
fn straight_flush_beats_four_of_a_kind() {
    let board = cards("9c Tc Jc Qc 2d");
    let hands = vec![cards("8c Kc"), cards("Qd Qh")];

    let result = compare_hands(&hands, &board);
    assert_eq!(result.winner(), Some(0));
    assert_eq!(result.name(), Some("straight flush"));
}

#[test]
fn winner_carries_category_and_no_high_card() {
    let board = cards("Kc Kd 3c 3d 7s");
    let hands = vec![cards("3h 7h"), cards("Kh Ks")];

    match compare_hands(&hands, &board) {
        ShowdownResult::Win {
            index,
            hand,
            high_card,
        } => {
            assert_eq!(index, 1);
            assert_eq!(hand.category(), HandCategory::FourOfAKind);
            assert_eq!(high_card, None);
        }
        ShowdownResult::Draw => panic!("ожидалась победа каре"),
    }
}

#[test]
fn board_straight_is_a_draw() {
    let board = cards("5c 6d 7h 8s 9c");
    let hands = vec![cards("Ac Ad"), cards("Kc Kd")];

    assert!(compare_hands(&hands, &board).is_draw());
}

#[test]
fn draw_only_among_leaders_counts() {
    // Двое делят стрит, третий хуже, всё равно ничья.
    let board = cards("5c 6d 7h 8s Kc");
    let hands = vec![cards("9h 2c"), cards("9d 3c"), cards("Ac Ad")];

    assert!(compare_hands(&hands, &board).is_draw());
}

#[test]
fn high_card_tie_is_broken_by_suit_of_decisive_card() {
    let board = cards("Ks Jd 9c 7h 4s");
    let hands = vec![cards("Ad 2c"), cards("Ah 2d")];

    match compare_hands(&hands, &board) {
        ShowdownResult::Win {
            index, high_card, ..
        } => {
            assert_eq!(index, 1, "туз червей старше туза бубен");
            assert_eq!(
                high_card,
                Some(HighCard {
                    suit: Suit::Hearts,
                    rank: Rank::Ace
                })
            );
        }
        ShowdownResult::Draw => panic!("high card с разными мастями не должен давать ничью"),
    }
}

#[test]
fn high_card_tie_on_shared_board_card_is_a_draw() {
    // Лучшие пять карт у обоих, сам борд, решающая карта общая.
    let board = cards("Ks Jd 9c 7h 5s");
    let hands = vec![cards("2c 3d"), cards("2d 3c")];

    assert!(compare_hands(&hands, &board).is_draw());
}

#[test]
fn high_card_renders_rank_and_suit_name() {
    let card = HighCard {
        suit: Suit::Hearts,
        rank: Rank::Ace,
    };
    assert_eq!(card.to_string(), "A of hearts");

    let card = HighCard {
        suit: Suit::Clubs,
        rank: Rank::Ten,
    };
    assert_eq!(card.to_string(), "T of clubs");
}

#[test]
fn single_high_card_winner_reports_decisive_card() {
    let board = cards("Ks Jd 9c 7h 4s");
    let hands = vec![cards("Ac 2c"), cards("Qh 2d")];

    match compare_hands(&hands, &board) {
        ShowdownResult::Win {
            index, high_card, ..
        } => {
            assert_eq!(index, 0);
            assert_eq!(
                high_card,
                Some(HighCard {
                    suit: Suit::Clubs,
                    rank: Rank::Ace
                })
            );
        }
        ShowdownResult::Draw => panic!("ожидалась победа"),
    }
}

#[test]
fn result_is_symmetric_under_permutation() {
    let board = cards("2h 7d 9s Jc Kd");
    let hands = vec![cards("Ah Qc"), cards("9h 9d"), cards("Kh 3c"), cards("4s 5s")];
    let base = compare_hands(&hands, &board);
    let base_winner = base.winner().unwrap();

    let permutations: [[usize; 4]; 4] = [[3, 2, 1, 0], [1, 0, 3, 2], [2, 3, 0, 1], [0, 2, 3, 1]];
    for perm in permutations {
        let permuted: Vec<Vec<Card>> = perm.iter().map(|&i| hands[i].clone()).collect();
        let result = compare_hands(&permuted, &board);
        let winner = result.winner().unwrap();
        assert_eq!(perm[winner], base_winner);
    }

    let tie_board = cards("5c 6d 7h 8s 9c");
    let tie_hands = vec![cards("Ac Ad"), cards("Kc Kd"), cards("2s 3s")];
    let reversed: Vec<Vec<Card>> = tie_hands.iter().rev().cloned().collect();
    assert!(compare_hands(&tie_hands, &tie_board).is_draw());
    assert!(compare_hands(&reversed, &tie_board).is_draw());
}

#[test]
fn empty_hand_list_is_a_draw() {
    let hands: Vec<Vec<Card>> = Vec::new();
    assert!(compare_hands(&hands, &cards("2h 7d 9s")).is_draw());
}

#[test]
fn works_with_partial_board() {
    let board = cards("Kd");
    let hands = vec![cards("Kh 2c"), cards("Ac Qd")];

    let result = compare_hands(&hands, &board);
    assert_eq!(result.winner(), Some(0));
    assert_eq!(result.name(), Some("pair"));
}

#[test]
fn map_index_translates_winner() {
    let board = cards("Kd 7c 2s");
    let hands = vec![cards("Kh 2c"), cards("Ac Qd")];

    let result = compare_hands(&hands, &board).map_index(|i| [4, 9][i]);
    assert_eq!(result.winner(), Some(4));
}
