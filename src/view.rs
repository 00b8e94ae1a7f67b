//! Externally visible snapshots of a session.
//!
//! Views are pure projections: building one never mutates the session, so
//! any number of readers may render concurrently.

use alloc::string::String;
use alloc::vec::Vec;

use serde::Serialize;

use crate::card::Card;
use crate::participant::{DEALER_NAME, Participant, RoundRecord};
use crate::session::Session;

/// A card as shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// Rank name, or `"back"` for a face-down card.
    pub rank: &'static str,
    /// Suit name, or `"back"` for a face-down card.
    pub suit: &'static str,
}

impl CardView {
    /// Placeholder rendered in place of the dealer's hole card.
    pub const FACE_DOWN: Self = Self {
        rank: "back",
        suit: "back",
    };

    /// Returns whether this is the face-down placeholder.
    #[must_use]
    pub fn is_face_down(&self) -> bool {
        *self == Self::FACE_DOWN
    }
}

impl From<Card> for CardView {
    fn from(card: Card) -> Self {
        Self {
            rank: card.rank.as_str(),
            suit: card.suit.as_str(),
        }
    }
}

/// One participant as shown to players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantView {
    /// Participant name.
    pub name: String,
    /// Cards in dealing order.
    pub hand: Vec<CardView>,
    /// Hand score.
    pub score: u16,
    /// Bankroll.
    pub bankroll: u64,
    /// Bet for this round.
    pub current_bet: u64,
    /// Whether the participant has stopped.
    pub stopped: bool,
    /// Settled rounds, oldest first.
    pub round_history: Vec<RoundRecord>,
}

/// A whole session as shown to players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// Players in turn order.
    pub players: Vec<ParticipantView>,
    /// The dealer.
    pub dealer: ParticipantView,
    /// Name of the player to act, or `"Dealer"`.
    pub current_turn: String,
    /// Whether the round is (or is about to be) over.
    pub round_over: bool,
}

impl Participant {
    /// Renders the participant.
    ///
    /// With `hide_hole_card`, a dealer holding two or more cards shows its
    /// second card face down. The score is always the full hand score.
    #[must_use]
    pub fn view(&self, hide_hole_card: bool) -> ParticipantView {
        self.render(hide_hole_card, false)
    }

    fn render(&self, hide_hole_card: bool, mask_score: bool) -> ParticipantView {
        let hide = hide_hole_card && self.is_dealer() && self.hand().len() >= 2;

        let mut hand: Vec<CardView> = self
            .hand()
            .cards()
            .iter()
            .copied()
            .map(CardView::from)
            .collect();
        if hide {
            hand[1] = CardView::FACE_DOWN;
        }

        let score = if hide && mask_score {
            self.hand().visible_value()
        } else {
            self.current_score()
        };

        ParticipantView {
            name: String::from(self.name()),
            hand,
            score,
            bankroll: self.bankroll(),
            current_bet: self.current_bet(),
            stopped: self.is_stopped(),
            round_history: self.history().to_vec(),
        }
    }
}

impl Session {
    /// Renders the session as players see it.
    ///
    /// Once every player has stood or busted but the dealer has not played,
    /// this returns the dealer's hand revealed with `currentTurn` set to
    /// `"Dealer"` and `roundOver` set, without changing the session. The
    /// session itself only becomes over through
    /// [`Session::resolve_dealer_turn`].
    #[must_use]
    pub fn view(&self) -> SessionView {
        let all_finished = self.all_players_finished();

        if all_finished && !self.is_round_over() {
            return self.render(true, DEALER_NAME, true);
        }

        let current_turn = self.current_player().map_or(DEALER_NAME, Participant::name);
        self.render(all_finished, current_turn, self.is_round_over())
    }

    /// Projects the session with the dealer's hole card shown or hidden.
    #[must_use]
    pub fn render(&self, reveal_dealer: bool, current_turn: &str, round_over: bool) -> SessionView {
        SessionView {
            players: self.players().iter().map(|p| p.view(false)).collect(),
            dealer: self
                .dealer()
                .render(!reveal_dealer, self.options().hide_dealer_score),
            current_turn: String::from(current_turn),
            round_over,
        }
    }
}
