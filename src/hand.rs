//! Hand scoring and the hand container.

use alloc::vec::Vec;

use crate::card::Card;

/// Blackjack: the highest non-bust score.
pub const BLACKJACK: u16 = 21;

fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let mut value: u16 = 0;
    let mut soft_aces: u16 = 0;

    for card in cards {
        if card.is_ace() {
            soft_aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > BLACKJACK && soft_aces > 0 {
        value -= 10;
        soft_aces -= 1;
    }

    (value, soft_aces > 0)
}

/// Scores a hand.
///
/// Every ace starts at 11 and is converted to 1, one at a time, only while the
/// total is over 21.
///
/// ```
/// use bjtable::{Card, Rank, Suit, hand::score};
///
/// let aces = [Card::new(Rank::Ace, Suit::Hearts), Card::new(Rank::Ace, Suit::Spades)];
/// assert_eq!(score(&aces), 12);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u16 {
    evaluate_cards(cards).0
}

/// Returns whether the hand holds an ace still counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// An ordered sequence of cards held by one participant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        score(&self.cards)
    }

    /// Value of the first card alone, as seen while the hole card is down.
    #[must_use]
    pub fn visible_value(&self) -> u16 {
        self.cards.first().map_or(0, |c| c.value())
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
