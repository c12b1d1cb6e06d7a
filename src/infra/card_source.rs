use crate::domain::{Card, Deck, DeckError};
use crate::engine::{CardSource, RandomSource};

/// Полная 52-карточная колода, перемешиваемая через `RandomSource`.
#[derive(Clone, Debug)]
pub struct ShuffledDeck<R: RandomSource> {
    deck: Deck,
    rng: R,
}

impl<R: RandomSource> ShuffledDeck<R> {
    /// Новая колода, сразу перемешанная.
    pub fn new(rng: R) -> Self {
        let mut source = Self {
            deck: Deck::standard_52(),
            rng,
        };
        source.shuffle();
        source
    }

    /// Сколько карт ещё не роздано.
    pub fn remaining(&self) -> usize {
        self.deck.len()
    }
}

impl<R: RandomSource> CardSource for ShuffledDeck<R> {
    fn shuffle(&mut self) {
        self.deck = Deck::standard_52();
        self.rng.shuffle(&mut self.deck.cards);
    }

    fn draw(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        self.deck.draw_n(n)
    }
}
