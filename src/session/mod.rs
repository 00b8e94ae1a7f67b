//! Session state and round lifecycle.

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::DECK_SIZE;
use crate::deck::Deck;
use crate::error::{DeckError, RosterError, UnknownPlayerError};
use crate::options::TableOptions;
use crate::participant::{DEALER_NAME, Participant};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::RoundPhase;

/// Player name -> seat in the roster.
type Seats = HashMap<String, usize>;

/// Cards needed for the two opening passes over `players` and the dealer.
const fn opening_cards(players: usize) -> usize {
    (players + 1) * 2
}

/// One game session: the deck, the seated players, the dealer, and whose turn it is.
///
/// Every operation validates before it mutates, so a failed call leaves the
/// session exactly as it was. A `Session` is not synchronized; share it
/// through [`Table`](crate::Table).
#[derive(Debug, Clone)]
pub struct Session {
    options: TableOptions,
    deck: Deck,
    /// Players in turn order.
    players: Vec<Participant>,
    seats: Seats,
    dealer: Participant,
    /// Seat of the player to act. Only increases within a round.
    active_player_index: usize,
    round_over: bool,
    rng: ChaCha8Rng,
}

impl Session {
    /// Creates an empty session with the given seed.
    ///
    /// Every deck the session shuffles is drawn from a generator seeded here,
    /// so two sessions with the same seed and the same calls play identically.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{RoundPhase, Session, TableOptions};
    ///
    /// let mut session = Session::new(TableOptions::default(), 42);
    /// session.start_round(["Alice", "Bob"]).unwrap();
    /// assert_eq!(session.phase(), RoundPhase::PlayerTurns);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        Self {
            options,
            deck,
            players: Vec::new(),
            seats: HashMap::new(),
            dealer: Participant::dealer(),
            active_player_index: 0,
            round_over: false,
            rng,
        }
    }

    /// Seats a fresh roster, shuffles a new deck, and deals the opening cards.
    ///
    /// Every player starts with the configured bankroll; balances from an
    /// earlier roster are not carried over. Use [`Session::next_round`] to keep
    /// playing with the same players.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster is empty, contains a name twice, uses
    /// the dealer's name, or is too large to deal two cards to everyone from
    /// one deck.
    pub fn start_round<I>(&mut self, names: I) -> Result<(), RosterError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let (players, seats) = self.new_roster(names)?;
        let needed = opening_cards(players.len());
        if needed > DECK_SIZE {
            return Err(RosterError::NotEnoughCards {
                needed,
                remaining: DECK_SIZE,
            });
        }

        let deck = Deck::shuffled(&mut self.rng);
        self.seat_and_deal(players, seats, deck)
    }

    /// Like [`Session::start_round`], dealing from `deck` instead of a fresh shuffle.
    ///
    /// # Errors
    ///
    /// Same as [`Session::start_round`].
    pub fn start_round_with_deck<I>(&mut self, names: I, deck: Deck) -> Result<(), RosterError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let (players, seats) = self.new_roster(names)?;
        self.seat_and_deal(players, seats, deck)
    }

    /// Starts another round with the current roster.
    ///
    /// Bankrolls and histories carry over; hands, bets, and the deck do not.
    /// Only allowed once the previous round has settled or after
    /// [`Session::reset`].
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Empty`] if no players are seated, or
    /// [`RosterError::RoundInProgress`] while players or the dealer still
    /// have to act.
    pub fn next_round(&mut self) -> Result<(), RosterError> {
        if self.players.is_empty() {
            return Err(RosterError::Empty);
        }
        if matches!(self.phase(), RoundPhase::PlayerTurns | RoundPhase::DealerTurn) {
            return Err(RosterError::RoundInProgress);
        }

        let players = self.players.iter().map(Participant::carried_over).collect();
        let seats = self.seats.clone();
        let deck = Deck::shuffled(&mut self.rng);
        self.seat_and_deal(players, seats, deck)
    }

    /// Clears the round but keeps every player's bankroll and history.
    ///
    /// The session returns to [`RoundPhase::AwaitingStart`] with a fresh deck
    /// and a fresh dealer.
    pub fn reset(&mut self) {
        self.players = self.players.iter().map(Participant::carried_over).collect();
        self.deck = Deck::shuffled(&mut self.rng);
        self.dealer = Participant::dealer();
        self.active_player_index = 0;
        self.round_over = false;
        info!("session reset with {} players", self.players.len());
    }

    fn new_roster<I>(&self, names: I) -> Result<(Vec<Participant>, Seats), RosterError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let players: Vec<Participant> = names
            .into_iter()
            .map(|name| Participant::player(name, self.options.starting_bankroll))
            .collect();

        if players.is_empty() {
            return Err(RosterError::Empty);
        }

        let seats = Self::index_seats(&players)?;
        Ok((players, seats))
    }

    fn index_seats(players: &[Participant]) -> Result<Seats, RosterError> {
        let mut seats = Seats::with_capacity(players.len());
        for (seat, player) in players.iter().enumerate() {
            if player.name() == DEALER_NAME {
                return Err(RosterError::ReservedName(String::from(DEALER_NAME)));
            }
            if seats.insert(String::from(player.name()), seat).is_some() {
                return Err(RosterError::DuplicateName(String::from(player.name())));
            }
        }
        Ok(seats)
    }

    /// Deals the opening hands and installs the new round.
    ///
    /// Dealing happens on local values; `self` is only touched once the deal succeeded.
    fn seat_and_deal(
        &mut self,
        mut players: Vec<Participant>,
        seats: Seats,
        mut deck: Deck,
    ) -> Result<(), RosterError> {
        let mut dealer = Participant::dealer();

        let needed = opening_cards(players.len());
        let remaining = deck.remaining();
        Self::deal_opening(&mut deck, &mut players, &mut dealer)
            .map_err(|DeckError::Empty| RosterError::NotEnoughCards { needed, remaining })?;

        info!(
            "dealt round to {} players, {} cards left",
            players.len(),
            deck.remaining()
        );

        self.deck = deck;
        self.players = players;
        self.seats = seats;
        self.dealer = dealer;
        self.active_player_index = 0;
        self.round_over = false;

        Ok(())
    }

    /// Two passes: one card to every player, then one to the dealer.
    fn deal_opening(
        deck: &mut Deck,
        players: &mut [Participant],
        dealer: &mut Participant,
    ) -> Result<(), DeckError> {
        for _ in 0..2 {
            for player in players.iter_mut() {
                player.receive_card(deck.deal()?);
            }
            dealer.receive_card(deck.deal()?);
        }
        Ok(())
    }

    /// Returns the current round phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        if self.round_over {
            RoundPhase::RoundOver
        } else if self.dealer.hand().is_empty() {
            RoundPhase::AwaitingStart
        } else if self.active_player_index >= self.players.len() {
            RoundPhase::DealerTurn
        } else {
            RoundPhase::PlayerTurns
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Participant] {
        &self.players
    }

    /// Looks up a player by name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownPlayerError`] if no player with that name is seated.
    pub fn player(&self, name: &str) -> Result<&Participant, UnknownPlayerError> {
        let seat = self.seat_of(name)?;
        Ok(&self.players[seat])
    }

    fn seat_of(&self, name: &str) -> Result<usize, UnknownPlayerError> {
        self.seats
            .get(name)
            .copied()
            .ok_or_else(|| UnknownPlayerError(String::from(name)))
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the seat index of the player to act.
    ///
    /// Equal to the number of players once everyone has stopped.
    #[must_use]
    pub const fn active_player_index(&self) -> usize {
        self.active_player_index
    }

    /// Returns the player whose turn it is, if any.
    #[must_use]
    pub fn current_player(&self) -> Option<&Participant> {
        self.players.get(self.active_player_index)
    }

    /// Returns whether the dealer has played and bets are settled.
    #[must_use]
    pub const fn is_round_over(&self) -> bool {
        self.round_over
    }

    /// Whether every player has stood or busted.
    #[must_use]
    pub fn all_players_finished(&self) -> bool {
        self.players.iter().all(Participant::is_finished)
    }

    fn advance_turn(&mut self) {
        self.active_player_index += 1;
        match self.current_player() {
            Some(next) => debug!("turn passes to {}", next.name()),
            None => debug!("all players stopped, dealer to play"),
        }
    }
}
