//! Shared handle around a single session.

use alloc::string::String;

use log::{info, warn};
use serde::Serialize;

use crate::card::Card;
use crate::error::{ActionError, BetError, RosterError, ShowdownError};
use crate::options::TableOptions;
use crate::session::Session;
use crate::sync::RwLock;
use crate::view::SessionView;

/// Confirmation returned by [`Table::reset`].
pub const RESET_MESSAGE: &str = "Game reset.";

/// A placed bet and the session after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BetConfirmation {
    /// Human-readable confirmation, e.g. `"Bet of 100 placed for Alice."`.
    pub message: String,
    /// The session after the bet.
    #[serde(flatten)]
    pub view: SessionView,
}

/// A blackjack table shared between concurrent callers.
///
/// All mutating operations take one exclusive lock over the whole session;
/// [`Table::current_view`] takes a shared lock. Each operation returns the
/// rendered session so callers never observe a half-applied change.
pub struct Table {
    session: RwLock<Session>,
}

impl Table {
    /// Creates a table with an empty session.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::from_session(Session::new(options, seed))
    }

    /// Wraps an existing session.
    #[must_use]
    pub const fn from_session(session: Session) -> Self {
        Self {
            session: RwLock::new(session),
        }
    }

    /// Seats a new roster and deals. See [`Session::start_round`].
    ///
    /// # Errors
    ///
    /// Returns an error if the roster is rejected.
    pub fn start_round<I>(&self, names: I) -> Result<SessionView, RosterError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut session = self.session.write();
        session
            .start_round(names)
            .inspect_err(|err| warn!("start round rejected: {err}"))?;
        Ok(session.view())
    }

    /// Deals another round to the same roster. See [`Session::next_round`].
    ///
    /// # Errors
    ///
    /// Returns an error if no players are seated.
    pub fn next_round(&self) -> Result<SessionView, RosterError> {
        let mut session = self.session.write();
        session
            .next_round()
            .inspect_err(|err| warn!("next round rejected: {err}"))?;
        Ok(session.view())
    }

    /// Places a bet. See [`Session::place_bet`].
    ///
    /// # Errors
    ///
    /// Returns an error if the player is unknown or the amount is not allowed.
    pub fn place_bet(&self, name: &str, amount: u64) -> Result<BetConfirmation, BetError> {
        let mut session = self.session.write();
        session
            .place_bet(name, amount)
            .inspect_err(|err| warn!("bet by {name} rejected: {err}"))?;

        Ok(BetConfirmation {
            message: alloc::format!("Bet of {amount} placed for {name}."),
            view: session.view(),
        })
    }

    /// Deals a card to the player whose turn it is. See [`Session::hit`].
    ///
    /// # Errors
    ///
    /// Returns an error if nobody can act or the deck is empty.
    pub fn hit(&self) -> Result<(Card, SessionView), ActionError> {
        let mut session = self.session.write();
        let card = session
            .hit()
            .inspect_err(|err| warn!("hit rejected: {err}"))?;
        Ok((card, session.view()))
    }

    /// Ends the current player's turn. See [`Session::stand`].
    ///
    /// # Errors
    ///
    /// Returns an error if nobody can act.
    pub fn stand(&self) -> Result<SessionView, ActionError> {
        let mut session = self.session.write();
        session
            .stand()
            .inspect_err(|err| warn!("stand rejected: {err}"))?;
        Ok(session.view())
    }

    /// Plays the dealer and settles bets. See [`Session::resolve_dealer_turn`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not ready to settle or the deck runs out.
    pub fn resolve_dealer_turn(&self) -> Result<SessionView, ShowdownError> {
        let mut session = self.session.write();
        let result = session
            .resolve_dealer_turn()
            .inspect_err(|err| warn!("dealer turn rejected: {err}"))?;

        for settlement in &result.settlements {
            info!("{}: {settlement}", settlement.player);
        }
        Ok(session.view())
    }

    /// Clears the round, keeping bankrolls and histories. See [`Session::reset`].
    pub fn reset(&self) -> &'static str {
        self.session.write().reset();
        RESET_MESSAGE
    }

    /// Renders the session under a shared lock.
    #[must_use]
    pub fn current_view(&self) -> SessionView {
        self.session.read().view()
    }

    /// Runs `f` against the session under a shared lock.
    pub fn inspect<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.session.read())
    }
}
