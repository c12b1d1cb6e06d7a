use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    /// От слабейшей к сильнейшей.
    pub const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "high card",
            HandCategory::OnePair => "pair",
            HandCategory::TwoPair => "two pairs",
            HandCategory::ThreeOfAKind => "three of a kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full house",
            HandCategory::FourOfAKind => "four of a kind",
            HandCategory::StraightFlush => "straight flush",
        }
    }
}

/// Сравнимое значение руки.
///
/// Схема кодирования (u32):
///   [категория:4 бита][t0:4][t1:4][t2:4][t3:4][t4:4]
/// где t0..t4 это ранги тай-брейка от старшего к младшему (2..14),
/// а 0 означает пустой слот (в руке меньше пяти карт или категории хватает
/// меньшего числа рангов).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);

impl HandRank {
    /// Собрать HandRank из категории и до пяти рангов тай-брейка.
    pub fn from_category_and_ranks(category: HandCategory, ranks: &[Rank]) -> Self {
        let mut value = (category as u32) & 0x0F;
        for slot in 0..5 {
            let nibble = ranks.get(slot).map(|r| r.value() as u32).unwrap_or(0);
            value = (value << 4) | (nibble & 0x0F);
        }
        HandRank(value)
    }

    /// Вытащить категорию из HandRank.
    pub fn category(&self) -> HandCategory {
        let cat_id = ((self.0 >> 20) & 0x0F) as usize;
        HandCategory::ALL
            .get(cat_id)
            .copied()
            .unwrap_or(HandCategory::HighCard)
    }

    /// Ранги тай-брейка; пустые слоты пропускаются.
    pub fn tiebreak(&self) -> Vec<Rank> {
        (0..5)
            .rev()
            .filter_map(|slot| Rank::from_value(((self.0 >> (slot * 4)) & 0x0F) as u8))
            .collect()
    }
}

/// Результат оценки руки: значение для сравнения и карты, которые его дали.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandValue {
    pub rank: HandRank,
    /// Лучшая комбинация (5 карт, либо меньше если карт меньше пяти).
    pub cards: Vec<Card>,
}

impl HandValue {
    pub fn category(&self) -> HandCategory {
        self.rank.category()
    }

    /// Числовое значение, согласованное с порядком рук.
    pub fn value(&self) -> u32 {
        self.rank.0
    }

    /// Стрит-флеш до туза.
    pub fn is_royal(&self) -> bool {
        self.category() == HandCategory::StraightFlush
            && self.rank.tiebreak().first() == Some(&Rank::Ace)
    }

    pub fn name(&self) -> &'static str {
        if self.is_royal() {
            "royal flush"
        } else {
            self.category().name()
        }
    }

    /// Старшая карта комбинации. Решает исход при равенстве high card.
    pub fn decisive_card(&self) -> Option<Card> {
        self.cards
            .iter()
            .copied()
            .max_by(|a, b| a.rank.cmp(&b.rank).then(a.suit.cmp(&b.suit)))
    }
}

/// Удобная функция – получить категорию из HandRank.
pub fn hand_category(rank: HandRank) -> HandCategory {
    rank.category()
}

/// Человеческое описание руки по категории.
pub fn describe_hand(rank: HandRank) -> String {
    let cat = rank.category();
    let top = rank.tiebreak().first().map(|r| r.to_string()).unwrap_or_default();
    match cat {
        HandCategory::StraightFlush if top == "A" => "Royal flush".to_string(),
        HandCategory::HighCard => format!("High card {top}"),
        HandCategory::OnePair => format!("Pair of {top}"),
        HandCategory::TwoPair => format!("Two pairs, {top} high"),
        HandCategory::ThreeOfAKind => format!("Three of a kind, {top}"),
        HandCategory::Straight => format!("Straight to {top}"),
        HandCategory::Flush => format!("Flush, {top} high"),
        HandCategory::FullHouse => format!("Full house, {top} full"),
        HandCategory::FourOfAKind => format!("Four of a kind, {top}"),
        HandCategory::StraightFlush => format!("Straight flush to {top}"),
    }
}
