//! A multi-player blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Session`] that runs one table through its rounds:
//! dealing, betting, player turns, dealer play, and settlement. A [`Table`]
//! wraps a session behind a single reader/writer lock for hosts that serve
//! concurrent requests.
//!
//! # Example
//!
//! ```
//! use bjtable::{Table, TableOptions};
//!
//! let table = Table::new(TableOptions::default(), 42);
//! let view = table.start_round(["Alice", "Bob"]).unwrap();
//! assert_eq!(view.current_turn, "Alice");
//! assert_eq!(view.dealer.hand[1].rank, "back");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod session;
mod sync;
pub mod table;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DeckError, RosterError, ShowdownError, UnknownPlayerError};
pub use hand::{Hand, score};
pub use options::TableOptions;
pub use participant::{DEALER_NAME, Participant, RoundRecord};
pub use result::{Outcome, RoundResult, Settlement};
pub use session::{RoundPhase, Session};
pub use table::{BetConfirmation, RESET_MESSAGE, Table};
pub use view::{CardView, ParticipantView, SessionView};
