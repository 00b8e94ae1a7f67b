//! The 52-card deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered, shrinking sequence of distinct cards.
///
/// Cards are dealt from the top; the deck never grows after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards. The top of the deck is the end of the vector.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the full 52-card set and shuffles it with `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Self::full_set();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a deck that deals `cards` in the given order.
    ///
    /// The first card is on top. No check is made that the cards are
    /// distinct; this is meant for replaying a known ordering.
    #[must_use]
    pub fn stacked<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    fn full_set() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain. The deck is left unchanged.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
