use crate::error::ActionError;

use super::{HandState, Street};

impl HandState {
    /// Passes the turn to the next seat without an action and runs the
    /// street-closure check.
    ///
    /// [`apply_action`](Self::apply_action) already does this after resolving
    /// an action; call it directly only to skip the seat on turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is over.
    pub fn advance_turn(&mut self) -> Result<Street, ActionError> {
        if self.is_hand_over() {
            return Err(ActionError::HandOver);
        }
        Ok(self.rotate())
    }

    /// Moves the turn to the next seat that has not folded, then closes the
    /// street if action has wrapped and that seat has matched the standing bet.
    pub(super) fn rotate(&mut self) -> Street {
        let seats = self.seats();
        let mut seat = self.current_player;

        // At least one seat is always unfolded, so this stops within one lap.
        for _ in 0..seats {
            seat += 1;
            if seat == seats {
                seat = 0;
                self.looped = true;
            }
            if !self.is_folded(seat) {
                break;
            }
        }
        self.current_player = seat;
        tracing::debug!(seat, looped = self.looped, "turn advanced");

        if self.looped && self.bets[seat] >= self.current_bet {
            self.close_street();
        }

        self.street
    }

    fn close_street(&mut self) {
        self.looped = false;
        self.current_player = self.first_active_seat();

        if !self.street.is_terminal() {
            self.street = self.street.next();
            tracing::info!(street = %self.street, current_bet = self.current_bet, "street closed");
        }
    }
}
