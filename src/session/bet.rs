use log::debug;

use crate::error::BetError;

use super::Session;

impl Session {
    /// Places a bet for the named player, replacing any earlier bet this round.
    ///
    /// The bankroll is not touched until the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not seated, the amount is larger than
    /// the player's bankroll, or it is below the table minimum.
    pub fn place_bet(&mut self, name: &str, amount: u64) -> Result<(), BetError> {
        let seat = self.seat_of(name)?;
        let player = &mut self.players[seat];

        if amount > player.bankroll() {
            return Err(BetError::ExceedsBankroll {
                amount,
                bankroll: player.bankroll(),
            });
        }

        let min = self.options.min_bet;
        if amount < min {
            return Err(BetError::BelowMinimum { amount, min });
        }

        player.set_bet(amount);
        debug!("{name} bets {amount}");

        Ok(())
    }
}
