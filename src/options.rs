//! Table configuration options.

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_bankroll(500)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Bankroll given to every player seated by a new roster.
    pub starting_bankroll: u64,
    /// Score at which the dealer stops drawing.
    pub dealer_stands_at: u16,
    /// Whether the dealer also stands on a soft total equal to `dealer_stands_at`.
    pub stand_on_soft_17: bool,
    /// Smallest accepted bet.
    pub min_bet: u64,
    /// Whether a dealer view with the hole card down reports only the up-card value.
    pub hide_dealer_score: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_bankroll: 20_000,
            dealer_stands_at: 17,
            stand_on_soft_17: true,
            min_bet: 0,
            hide_dealer_score: false,
        }
    }
}

impl TableOptions {
    /// Sets the starting bankroll for new rosters.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_bankroll(1_000);
    /// assert_eq!(options.starting_bankroll, 1_000);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: u64) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the score at which the dealer stops drawing.
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, value: u16) -> Self {
        self.dealer_stands_at = value;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_stand_on_soft_17(false);
    /// assert!(!options.stand_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the table minimum bet.
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: u64) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets whether the dealer score is masked along with the hole card.
    #[must_use]
    pub const fn with_hide_dealer_score(mut self, hide: bool) -> Self {
        self.hide_dealer_score = hide;
        self
    }
}
