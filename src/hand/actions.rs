use crate::action::{Action, ActionKind, PendingAction};
use crate::error::ActionError;

use super::{HandState, Street};

impl HandState {
    /// Applies `action` for the seat on turn and advances the turn.
    ///
    /// Returns the street after the action, which differs from the street
    /// before it when the action closed the street.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is over, or if a raise is below the
    /// standing bet. A rejected action leaves the state untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use pokernight::{Action, HandState, Street, TableOptions};
    ///
    /// let mut hand = HandState::new(3, &TableOptions::default()).unwrap();
    /// hand.apply_action(Action::Call).unwrap();
    /// hand.apply_action(Action::Call).unwrap();
    /// let street = hand.apply_action(Action::Call).unwrap();
    /// assert_eq!(street, Street::Flop);
    /// assert_eq!(hand.current_player(), 0);
    /// ```
    pub fn apply_action(&mut self, action: Action) -> Result<Street, ActionError> {
        if self.is_hand_over() {
            return Err(ActionError::HandOver);
        }

        let seat = self.current_player;
        match action {
            Action::Fold => {
                self.folds.insert(seat);
            }
            Action::Raise { to } => {
                if to < self.current_bet {
                    tracing::warn!(seat, to, current_bet = self.current_bet, "raise rejected");
                    return Err(ActionError::RaiseBelowCurrentBet {
                        to,
                        current_bet: self.current_bet,
                    });
                }
                self.last_raise = to - self.current_bet;
                self.bets[seat] = to;
                self.current_bet = to;
            }
            Action::Call => {
                self.bets[seat] = self.current_bet;
            }
        }
        tracing::debug!(seat, ?action, committed = self.bets[seat], "action resolved");

        self.pending = PendingAction::default();
        let street = self.rotate();

        if self.is_hand_over() {
            tracing::info!(
                street = %self.street,
                pot = self.pot(),
                remaining = ?self.remaining_player(),
                "hand over"
            );
        }

        Ok(street)
    }

    /// Applies `action` on behalf of `seat`.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is over, if it is not `seat`'s turn, or
    /// if the action itself is rejected.
    pub fn submit_action(&mut self, seat: usize, action: Action) -> Result<Street, ActionError> {
        if self.is_hand_over() {
            return Err(ActionError::HandOver);
        }

        if seat != self.current_player {
            tracing::warn!(seat, current = self.current_player, "action out of turn");
            return Err(ActionError::NotYourTurn);
        }

        self.apply_action(action)
    }

    /// Selects the pending action kind for the seat on turn.
    pub const fn select_action(&mut self, kind: ActionKind) {
        self.pending.kind = kind;
    }

    /// Sets the pending raise-to amount for the seat on turn.
    pub const fn set_raise_amount(&mut self, amount: u64) {
        self.pending.raise_to = amount;
    }

    /// Applies the pending action for the seat on turn.
    ///
    /// The pending input is kept when the action is rejected, so the player
    /// can correct it.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is over or the pending raise is below the
    /// standing bet.
    pub fn submit_pending(&mut self) -> Result<Street, ActionError> {
        self.apply_action(self.pending.into_action())
    }
}
