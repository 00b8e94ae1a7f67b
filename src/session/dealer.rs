use alloc::vec::Vec;

use log::{debug, info};

use crate::error::ShowdownError;
use crate::hand::Hand;
use crate::result::{Outcome, RoundResult, Settlement};

use super::{RoundPhase, Session};

impl Session {
    /// Whether the dealer must take another card.
    ///
    /// The dealer draws below `dealer_stands_at` and, unless
    /// `stand_on_soft_17` is set, also on a soft total equal to it.
    fn dealer_must_draw(&self, hand: &Hand) -> bool {
        let value = hand.value();
        let threshold = self.options.dealer_stands_at;

        value < threshold
            || (value == threshold && hand.is_soft() && !self.options.stand_on_soft_17)
    }

    /// Dealer plays their hand and every player's bet is settled.
    ///
    /// Settlement per player, checked in order:
    /// 1. Player busts: the bet is lost.
    /// 2. Dealer busts or the player scores higher: the bet is won.
    /// 3. Equal scores: push, bankroll unchanged.
    /// 4. Otherwise the bet is lost.
    ///
    /// Each settlement is appended to the player's round history.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is dealt, a player is still acting, the
    /// round was already settled, or the deck runs out while the dealer
    /// draws. The session is unchanged on error.
    pub fn resolve_dealer_turn(&mut self) -> Result<RoundResult, ShowdownError> {
        match self.phase() {
            RoundPhase::DealerTurn => {}
            RoundPhase::AwaitingStart => return Err(ShowdownError::NotDealt),
            RoundPhase::PlayerTurns => return Err(ShowdownError::PlayersStillActive),
            RoundPhase::RoundOver => return Err(ShowdownError::AlreadySettled),
        }

        // Draw against copies so an empty deck leaves the round as it was.
        let mut deck = self.deck.clone();
        let mut dealer = self.dealer.clone();
        while self.dealer_must_draw(dealer.hand()) {
            let card = deck.deal()?;
            debug!("dealer draws {card}");
            dealer.receive_card(card);
        }
        dealer.stop();
        self.deck = deck;
        self.dealer = dealer;

        let dealer_score = self.dealer.current_score();
        let mut settlements = Vec::with_capacity(self.players.len());

        for player in &mut self.players {
            let player_score = player.current_score();
            let outcome = Outcome::decide(player_score, dealer_score);
            let bet = player.current_bet();

            let settlement = Settlement {
                player: player.name().into(),
                outcome,
                bet,
                player_score,
                resulting_bankroll: outcome.apply(player.bankroll(), bet),
            };
            player.record(settlement.resulting_bankroll, settlement.summary());
            settlements.push(settlement);
        }

        self.round_over = true;
        info!(
            "round settled, dealer {dealer_score}, {} players",
            settlements.len()
        );

        Ok(RoundResult {
            settlements,
            dealer_score,
            dealer_bust: self.dealer.is_bust(),
        })
    }
}
