//! Round phase types.

/// Where a session is in its round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// No cards have been dealt since the last roster change or reset.
    AwaitingStart,
    /// Players act in seat order.
    PlayerTurns,
    /// Every player has stopped; the dealer has not played yet.
    DealerTurn,
    /// The dealer has played and bets are settled.
    RoundOver,
}
