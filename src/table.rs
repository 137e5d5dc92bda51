//! Table session: one hand at a time, committed to a ledger.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::action::{Action, ActionKind};
use crate::error::{ActionError, HandError, TableError};
use crate::hand::{HandState, Street};
use crate::ledger::{LedgerRow, LedgerStore};
use crate::options::TableOptions;
use crate::payout::Payout;
use crate::roster::Roster;
use crate::sync::Mutex;

/// A settled hand that has not been written to the ledger yet.
#[derive(Debug, Clone)]
struct Unsaved {
    payout: Payout,
    row: LedgerRow,
}

/// A poker table that plays hands and records them in a ledger.
///
/// The table holds at most one hand in progress. Every method takes `&self`
/// and serializes access internally, so a presentation layer can share one
/// table between its handlers.
///
/// # Example
///
/// ```
/// use pokernight::{Action, Ledger, Roster, Table, TableOptions};
///
/// let ledger = Ledger::with_players(["Ann", "Bob"]).unwrap();
/// let table = Table::new(TableOptions::default(), ledger);
///
/// table.start_hand(Roster::new(["Ann", "Bob"]).unwrap()).unwrap();
/// table.submit_action(Action::Fold).unwrap();
/// assert!(table.is_hand_over());
///
/// let payout = table.settle(1).unwrap();
/// assert_eq!(payout.deltas, vec![-5, 5]);
/// assert_eq!(table.ledger.lock().total_for("Bob"), Some(5));
/// ```
pub struct Table<S> {
    /// Table options.
    pub options: TableOptions,
    /// Ledger that receives one row per settled hand.
    pub ledger: Mutex<S>,
    /// Players seated for the hand in progress.
    roster: Mutex<Option<Roster>>,
    /// Hand in progress.
    hand: Mutex<Option<HandState>>,
    /// Settled hand waiting for a successful ledger write.
    unsaved: Mutex<Option<Unsaved>>,
}

impl<S: LedgerStore> Table<S> {
    /// Creates a table that records hands in `ledger`.
    #[must_use]
    pub const fn new(options: TableOptions, ledger: S) -> Self {
        Self {
            options,
            ledger: Mutex::new(ledger),
            roster: Mutex::new(None),
            hand: Mutex::new(None),
            unsaved: Mutex::new(None),
        }
    }

    /// Consumes the table and returns its ledger.
    pub fn into_ledger(self) -> S {
        self.ledger.into_inner()
    }

    /// Seats `roster` and starts a hand with the configured blinds.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand is in progress, a settled hand is still
    /// uncommitted, a player has no ledger column, or the ledger cannot be read.
    pub fn start_hand(&self, roster: Roster) -> Result<(), TableError<S::Error>> {
        let options = self.options;
        self.seat(roster, |seats| HandState::new(seats, &options))
    }

    /// Seats `roster` and starts a hand with explicit opening commitments,
    /// one per seat, instead of the configured blinds.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`start_hand`](Self::start_hand), and an
    /// error if `bets` does not have one entry per seat.
    pub fn start_hand_with_bets(
        &self,
        roster: Roster,
        bets: Vec<u64>,
    ) -> Result<(), TableError<S::Error>> {
        self.seat(roster, |seats| HandState::for_seats(seats, bets))
    }

    fn seat<F>(&self, roster: Roster, start: F) -> Result<(), TableError<S::Error>>
    where
        F: FnOnce(usize) -> Result<HandState, HandError>,
    {
        let mut hand = self.hand.lock();
        if hand.is_some() {
            return Err(TableError::HandInProgress);
        }
        if self.unsaved.lock().is_some() {
            return Err(TableError::UncommittedPayout);
        }

        let players = self.ledger.lock().players().map_err(TableError::Store)?;
        if let Some((_, name)) = roster
            .iter()
            .find(|(_, name)| !players.iter().any(|player| player == *name))
        {
            return Err(TableError::UnknownPlayer(name.into()));
        }

        let state = start(roster.len()).map_err(TableError::Hand)?;
        tracing::info!(players = roster.len(), "hand started");
        *self.roster.lock() = Some(roster);
        *hand = Some(state);
        Ok(())
    }

    fn with_hand<T>(
        &self,
        f: impl FnOnce(&mut HandState) -> Result<T, ActionError>,
    ) -> Result<T, TableError<S::Error>> {
        let mut hand = self.hand.lock();
        let Some(state) = hand.as_mut() else {
            return Err(TableError::NoHand);
        };
        f(state).map_err(TableError::Action)
    }

    /// Applies `action` for the player on turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is in progress or the action is rejected.
    pub fn submit_action(&self, action: Action) -> Result<Street, TableError<S::Error>> {
        self.with_hand(|hand| hand.apply_action(action))
    }

    /// Applies `action` for `seat`, rejecting it if `seat` is not on turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is in progress, it is not `seat`'s turn, or
    /// the action is rejected.
    pub fn submit_action_for(
        &self,
        seat: usize,
        action: Action,
    ) -> Result<Street, TableError<S::Error>> {
        self.with_hand(|hand| hand.submit_action(seat, action))
    }

    /// Selects the pending action kind for the player on turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is in progress.
    pub fn select_action(&self, kind: ActionKind) -> Result<(), TableError<S::Error>> {
        self.with_hand(|hand| {
            hand.select_action(kind);
            Ok(())
        })
    }

    /// Sets the pending raise-to amount for the player on turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is in progress.
    pub fn set_raise_amount(&self, amount: u64) -> Result<(), TableError<S::Error>> {
        self.with_hand(|hand| {
            hand.set_raise_amount(amount);
            Ok(())
        })
    }

    /// Applies the pending action for the player on turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is in progress or the action is rejected.
    pub fn submit_pending(&self) -> Result<Street, TableError<S::Error>> {
        self.with_hand(HandState::submit_pending)
    }

    /// Passes the turn without an action.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is in progress or the hand is over.
    pub fn advance_turn(&self) -> Result<Street, TableError<S::Error>> {
        self.with_hand(HandState::advance_turn)
    }

    /// Returns whether the hand in progress has terminated.
    ///
    /// Returns `false` when no hand is in progress.
    pub fn is_hand_over(&self) -> bool {
        self.hand.lock().as_ref().is_some_and(HandState::is_hand_over)
    }

    /// Returns the seat on turn.
    pub fn current_player(&self) -> Option<usize> {
        self.hand.lock().as_ref().map(HandState::current_player)
    }

    /// Returns the name of the player on turn.
    pub fn current_player_name(&self) -> Option<String> {
        let seat = self.current_player()?;
        self.roster
            .lock()
            .as_ref()
            .and_then(|roster| roster.name(seat).map(String::from))
    }

    /// Returns the current street.
    pub fn street(&self) -> Option<Street> {
        self.hand.lock().as_ref().map(HandState::street)
    }

    /// Returns the players seated for the hand in progress.
    pub fn roster(&self) -> Option<Roster> {
        self.roster.lock().clone()
    }

    /// Returns a copy of the hand in progress.
    pub fn snapshot(&self) -> Option<HandState> {
        self.hand.lock().clone()
    }

    /// Settles the finished hand and commits the result to the ledger.
    ///
    /// The hand is cleared once settled. If the ledger write fails the payout
    /// is kept; see [`pending_payout`](Self::pending_payout) and
    /// [`retry_commit`](Self::retry_commit).
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is in progress, settlement is rejected, or
    /// the ledger write fails.
    pub fn settle(&self, winner: usize) -> Result<Payout, TableError<S::Error>> {
        let mut hand = self.hand.lock();
        let Some(state) = hand.as_ref() else {
            return Err(TableError::NoHand);
        };
        let mut seated = self.roster.lock();
        let Some(roster) = seated.as_ref() else {
            return Err(TableError::NoHand);
        };

        let payout = state.settle(winner).map_err(TableError::Settle)?;
        let row = payout.to_row(roster);

        // The hand slot stays locked until the payout is parked, so no new
        // hand can be seated in between.
        *self.unsaved.lock() = Some(Unsaved {
            payout: payout.clone(),
            row,
        });
        *seated = None;
        *hand = None;
        drop(seated);
        drop(hand);

        self.retry_commit()?;
        Ok(payout)
    }

    /// Returns the settled payout still waiting to be committed.
    pub fn pending_payout(&self) -> Option<Payout> {
        self.unsaved
            .lock()
            .as_ref()
            .map(|unsaved| unsaved.payout.clone())
    }

    /// Writes the settled payout to the ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if there is nothing to commit or the ledger write
    /// fails again.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "the payout is only released after the ledger accepted it"
    )]
    pub fn retry_commit(&self) -> Result<(), TableError<S::Error>> {
        let mut unsaved = self.unsaved.lock();
        let Some(pending) = unsaved.as_ref() else {
            return Err(TableError::NothingToCommit);
        };

        match self.ledger.lock().append(&pending.row) {
            Ok(()) => {
                tracing::info!(winner = pending.payout.winner, "hand committed");
                *unsaved = None;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "ledger commit failed");
                Err(TableError::Store(err))
            }
        }
    }

    /// Discards the hand in progress without touching the ledger.
    ///
    /// Returns the discarded hand, if any.
    pub fn abandon_hand(&self) -> Option<HandState> {
        let mut hand = self.hand.lock();
        let abandoned = hand.take();
        self.roster.lock().take();
        drop(hand);
        if abandoned.is_some() {
            tracing::info!("hand abandoned");
        }
        abandoned
    }
}
