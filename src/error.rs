//! Error types for table operations.

use alloc::string::String;

use thiserror::Error;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to deal.
    #[error("no cards left in the deck")]
    Empty,
}

/// No participant with the given name is seated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no player named {0:?}")]
pub struct UnknownPlayerError(pub String);

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BetError {
    /// The bet names a player who is not seated.
    #[error(transparent)]
    UnknownPlayer(#[from] UnknownPlayerError),
    /// The bet is larger than the player's bankroll.
    #[error("bet of {amount} exceeds bankroll of {bankroll}")]
    ExceedsBankroll {
        /// Requested bet.
        amount: u64,
        /// Bankroll at the time of the bet.
        bankroll: u64,
    },
    /// The bet is under the table minimum.
    #[error("bet of {amount} is below the table minimum of {min}")]
    BelowMinimum {
        /// Requested bet.
        amount: u64,
        /// Table minimum.
        min: u64,
    },
}

/// Errors that can occur when seating a roster and dealing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// No players were given.
    #[error("roster is empty")]
    Empty,
    /// The same name appears twice.
    #[error("duplicate player name {0:?}")]
    DuplicateName(String),
    /// A player asked for the name reserved for the dealer.
    #[error("player name {0:?} is reserved for the dealer")]
    ReservedName(String),
    /// A round is still being played and has not been settled.
    #[error("the current round has not been settled")]
    RoundInProgress,
    /// The deck cannot cover the initial deal.
    #[error("initial deal needs {needed} cards but the deck has {remaining}")]
    NotEnoughCards {
        /// Cards needed for two passes over players and dealer.
        needed: usize,
        /// Cards in the deck.
        remaining: usize,
    },
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No cards have been dealt this round.
    #[error("no round has been dealt")]
    NotDealt,
    /// Every player has already finished their turn.
    #[error("no player is left to act")]
    NoActivePlayer,
    /// The deck ran out.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur while the dealer plays and bets are settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// No cards have been dealt this round.
    #[error("no round has been dealt")]
    NotDealt,
    /// At least one player has not stopped.
    #[error("players are still acting")]
    PlayersStillActive,
    /// The round has already been settled.
    #[error("round already settled")]
    AlreadySettled,
    /// The deck ran out while the dealer was drawing.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
