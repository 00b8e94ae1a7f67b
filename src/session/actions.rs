use log::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::BLACKJACK;

use super::{RoundPhase, Session};

impl Session {
    /// Returns the seat of the player allowed to act.
    fn ensure_player_turn(&self) -> Result<usize, ActionError> {
        match self.phase() {
            RoundPhase::PlayerTurns => Ok(self.active_player_index),
            RoundPhase::AwaitingStart => Err(ActionError::NotDealt),
            RoundPhase::DealerTurn | RoundPhase::RoundOver => Err(ActionError::NoActivePlayer),
        }
    }

    /// Player action: Hit (deal one card to the player whose turn it is).
    ///
    /// A player whose score reaches 21 or more is stopped and the turn passes
    /// to the next seat, so hitting into exactly 21 ends the turn just like
    /// busting does.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is dealt, every player has already
    /// stopped, or the deck is empty. The session is unchanged on error.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        let seat = self.ensure_player_turn()?;
        let card = self.deck.deal()?;

        let player = &mut self.players[seat];
        player.receive_card(card);
        let score = player.current_score();
        debug!("{} hits {card}, score {score}", player.name());

        if score >= BLACKJACK {
            player.stop();
            self.advance_turn();
        }

        Ok(card)
    }

    /// Player action: Stand (end the current player's turn).
    ///
    /// # Errors
    ///
    /// Returns an error if no round is dealt or every player has already stopped.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        let seat = self.ensure_player_turn()?;

        let player = &mut self.players[seat];
        player.stop();
        debug!("{} stands on {}", player.name(), player.current_score());

        self.advance_turn();
        Ok(())
    }
}
