//! Round result types for settlement.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::Serialize;

use crate::hand::BLACKJACK;

/// Result of one player's hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Player went over 21. Settled before the dealer is considered.
    Bust,
    /// Dealer busts or player has the higher score.
    Won,
    /// Equal scores.
    Push,
    /// Dealer has the higher score.
    Lost,
}

impl Outcome {
    /// Settles a player score against the dealer score.
    #[must_use]
    pub const fn decide(player_score: u16, dealer_score: u16) -> Self {
        if player_score > BLACKJACK {
            Self::Bust
        } else if dealer_score > BLACKJACK || player_score > dealer_score {
            Self::Won
        } else if player_score == dealer_score {
            Self::Push
        } else {
            Self::Lost
        }
    }

    /// Applies the outcome of a `bet` to `bankroll`.
    ///
    /// A win adds the bet, a loss or bust removes it, a push leaves the
    /// bankroll unchanged.
    ///
    /// Tables that credit `2 x bet` on a win without debiting the stake at bet
    /// time pay one extra bet per win; bankrolls carried over from such a
    /// table will not reconcile with this rule.
    #[must_use]
    pub const fn apply(self, bankroll: u64, bet: u64) -> u64 {
        match self {
            Self::Won => bankroll.saturating_add(bet),
            Self::Push => bankroll,
            Self::Bust | Self::Lost => bankroll.saturating_sub(bet),
        }
    }
}

/// Settlement for a single player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    /// Player name.
    pub player: String,
    /// The outcome.
    pub outcome: Outcome,
    /// The bet that was settled.
    pub bet: u64,
    /// Player score.
    pub player_score: u16,
    /// Bankroll after settlement.
    pub resulting_bankroll: u64,
}

impl Settlement {
    /// Renders the human-readable result line recorded in round history.
    #[must_use]
    pub fn summary(&self) -> String {
        alloc::format!("{self}")
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Bust => write!(f, "Bust! Lost {}", self.bet),
            Outcome::Won => write!(f, "Won {}", self.bet),
            Outcome::Push => f.write_str("Push"),
            Outcome::Lost => write!(f, "Lost {}", self.bet),
        }
    }
}

/// Result of the entire round after the dealer plays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    /// Settlements in turn order.
    pub settlements: Vec<Settlement>,
    /// The dealer's final score.
    pub dealer_score: u16,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
