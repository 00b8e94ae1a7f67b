//! Players and the dealer.

use alloc::string::String;
use alloc::vec::Vec;

use serde::Serialize;

use crate::card::Card;
use crate::hand::Hand;

/// Name under which the dealer is rendered.
pub const DEALER_NAME: &str = "Dealer";

/// One settled round in a player's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    /// Bet that was settled.
    pub bet: u64,
    /// Result line, e.g. `"Won 100"` or `"Push"`.
    pub result: String,
    /// Bankroll after the settlement.
    pub resulting_bankroll: u64,
}

/// A seat at the table: a player or the dealer.
///
/// A participant owns its hand and history outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    hand: Hand,
    bankroll: u64,
    current_bet: u64,
    stopped: bool,
    is_dealer: bool,
    history: Vec<RoundRecord>,
}

impl Participant {
    /// Seats a player with an empty hand.
    #[must_use]
    pub fn player(name: impl Into<String>, bankroll: u64) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            bankroll,
            current_bet: 0,
            stopped: false,
            is_dealer: false,
            history: Vec::new(),
        }
    }

    /// Creates the dealer. The dealer has no bankroll.
    #[must_use]
    pub fn dealer() -> Self {
        Self {
            is_dealer: true,
            ..Self::player(DEALER_NAME, 0)
        }
    }

    /// Seats a returning player for a new round, keeping bankroll and history.
    #[must_use]
    pub(crate) fn carried_over(&self) -> Self {
        Self {
            history: self.history.clone(),
            ..Self::player(self.name.clone(), self.bankroll)
        }
    }

    /// Appends a card to the hand.
    pub fn receive_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Scores the hand.
    #[must_use]
    pub fn current_score(&self) -> u16 {
        self.hand.value()
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns the bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> u64 {
        self.bankroll
    }

    /// Returns the bet for this round.
    #[must_use]
    pub const fn current_bet(&self) -> u64 {
        self.current_bet
    }

    pub(crate) const fn set_bet(&mut self, amount: u64) {
        self.current_bet = amount;
    }

    /// Returns whether the participant has finished acting this round.
    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub(crate) const fn stop(&mut self) {
        self.stopped = true;
    }

    /// Whether the participant is done for the round, by standing or busting.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.stopped || self.is_bust()
    }

    /// Returns whether this is the dealer.
    #[must_use]
    pub const fn is_dealer(&self) -> bool {
        self.is_dealer
    }

    /// Returns the settled rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub(crate) fn record(&mut self, bankroll: u64, result: String) {
        self.bankroll = bankroll;
        self.history.push(RoundRecord {
            bet: self.current_bet,
            result,
            resulting_bankroll: bankroll,
        });
    }
}
