use crate::error::SettleError;
use crate::payout::Payout;

use super::HandState;

impl HandState {
    /// Settles a finished hand, awarding the whole pot to `winner`.
    ///
    /// Folded seats lose everything they committed.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is still in progress, `winner` is not a
    /// seat, `winner` has folded, or the pot overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use pokernight::{Action, HandState, TableOptions};
    ///
    /// let mut hand = HandState::new(2, &TableOptions::default()).unwrap();
    /// hand.apply_action(Action::Fold).unwrap();
    /// assert!(hand.is_hand_over());
    ///
    /// let payout = hand.settle(1).unwrap();
    /// assert_eq!(payout.deltas, vec![-5, 5]);
    /// ```
    pub fn settle(&self, winner: usize) -> Result<Payout, SettleError> {
        if !self.is_hand_over() {
            return Err(SettleError::HandInProgress);
        }

        if winner >= self.seats() {
            return Err(SettleError::SeatOutOfRange(winner));
        }

        if self.is_folded(winner) {
            return Err(SettleError::WinnerFolded(winner));
        }

        let payout = Payout::from_bets(&self.bets, winner)?;
        tracing::info!(winner, pot = payout.pot, "hand settled");
        Ok(payout)
    }
}
