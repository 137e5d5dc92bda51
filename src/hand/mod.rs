//! Betting-round engine.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::action::PendingAction;
use crate::error::HandError;
use crate::options::TableOptions;

mod actions;
mod settle;
pub mod street;
mod turn;

pub use street::Street;

/// State of one hand in progress.
///
/// A `HandState` is created once the roster is seated and lives until the
/// hand is settled. Seats are indices into the roster: seat 0 acts first and
/// the last two seats post the blinds.
///
/// Committed bets carry over from street to street. Nothing is reset when a
/// street closes, so `bets` is each seat's total commitment for the hand and
/// folded seats keep their chips in the pot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandState {
    /// Current street.
    street: Street,
    /// Seat on turn. Never a folded seat.
    current_player: usize,
    /// Standing bet-to amount.
    current_bet: u64,
    /// Committed amount per seat.
    bets: Vec<u64>,
    /// Folded seats.
    folds: HashSet<usize>,
    /// Whether action has wrapped past the last seat on this street.
    looped: bool,
    /// Scratch input for the seat on turn.
    pending: PendingAction,
    /// Size of the last raise, for display.
    last_raise: u64,
}

impl HandState {
    /// Starts a hand for `seats` players and posts the blinds.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two seats are given.
    ///
    /// # Example
    ///
    /// ```
    /// use pokernight::{HandState, Street, TableOptions};
    ///
    /// let hand = HandState::new(3, &TableOptions::default()).unwrap();
    /// assert_eq!(hand.street(), Street::PreFlop);
    /// assert_eq!(hand.bets(), &[0, 5, 10]);
    /// assert_eq!(hand.current_bet(), 10);
    /// ```
    pub fn new(seats: usize, options: &TableOptions) -> Result<Self, HandError> {
        if seats < 2 {
            return Err(HandError::TooFewPlayers);
        }

        let mut bets = alloc::vec![0; seats];
        bets[seats - 2] = options.small_blind;
        bets[seats - 1] = options.big_blind;
        Self::with_bets(bets)
    }

    /// Starts a hand with arbitrary committed amounts, one per seat.
    ///
    /// The standing bet is the largest seeded amount.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two bets are given.
    pub fn with_bets(bets: Vec<u64>) -> Result<Self, HandError> {
        if bets.len() < 2 {
            return Err(HandError::TooFewPlayers);
        }

        let current_bet = bets.iter().copied().max().unwrap_or(0);
        tracing::debug!(seats = bets.len(), current_bet, "hand started");

        Ok(Self {
            street: Street::PreFlop,
            current_player: 0,
            current_bet,
            bets,
            folds: HashSet::new(),
            looped: false,
            pending: PendingAction::default(),
            last_raise: 0,
        })
    }

    /// Starts a hand for exactly `seats` players with the given commitments.
    ///
    /// # Errors
    ///
    /// Returns an error if `bets` does not have one entry per seat, or if
    /// fewer than two seats are given.
    pub fn for_seats(seats: usize, bets: Vec<u64>) -> Result<Self, HandError> {
        if bets.len() != seats {
            return Err(HandError::SeatMismatch {
                expected: seats,
                found: bets.len(),
            });
        }
        Self::with_bets(bets)
    }

    /// Returns the number of seats.
    #[must_use]
    pub fn seats(&self) -> usize {
        self.bets.len()
    }

    /// Returns the current street.
    #[must_use]
    pub const fn street(&self) -> Street {
        self.street
    }

    /// Returns the index of the current street in [`Street::ALL`].
    #[must_use]
    pub const fn round_index(&self) -> usize {
        self.street.index()
    }

    /// Returns the seat on turn.
    #[must_use]
    pub const fn current_player(&self) -> usize {
        self.current_player
    }

    /// Returns the standing bet-to amount.
    #[must_use]
    pub const fn current_bet(&self) -> u64 {
        self.current_bet
    }

    /// Returns the committed amount for every seat.
    #[must_use]
    pub fn bets(&self) -> &[u64] {
        &self.bets
    }

    /// Returns the committed amount for `seat`.
    #[must_use]
    pub fn bet(&self, seat: usize) -> Option<u64> {
        self.bets.get(seat).copied()
    }

    /// Returns the folded seats in ascending order.
    #[must_use]
    pub fn folds(&self) -> Vec<usize> {
        let mut folds: Vec<usize> = self.folds.iter().copied().collect();
        folds.sort_unstable();
        folds
    }

    /// Returns whether `seat` has folded.
    #[must_use]
    pub fn is_folded(&self, seat: usize) -> bool {
        self.folds.contains(&seat)
    }

    /// Returns the number of seats still in the hand.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.seats() - self.folds.len()
    }

    /// Returns whether action has wrapped around on the current street.
    #[must_use]
    pub const fn looped(&self) -> bool {
        self.looped
    }

    /// Returns the size of the last raise.
    #[must_use]
    pub const fn last_raise(&self) -> u64 {
        self.last_raise
    }

    /// Returns the sum of all committed amounts, folded seats included.
    #[must_use]
    pub fn pot(&self) -> u64 {
        self.bets
            .iter()
            .fold(0, |pot, bet| pot.saturating_add(*bet))
    }

    /// Returns the pending input for the seat on turn.
    #[must_use]
    pub const fn pending(&self) -> PendingAction {
        self.pending
    }

    /// Returns whether the hand has terminated.
    ///
    /// A hand ends when the terminal street is reached or when every seat
    /// but one has folded.
    #[must_use]
    pub fn is_hand_over(&self) -> bool {
        self.street.is_terminal() || self.folds.len() + 1 >= self.seats()
    }

    /// Returns the only seat left in the hand, if everyone else folded.
    #[must_use]
    pub fn remaining_player(&self) -> Option<usize> {
        if self.active_count() == 1 {
            (0..self.seats()).find(|seat| !self.is_folded(*seat))
        } else {
            None
        }
    }

    /// Returns the first seat, from seat 0, that has not folded.
    fn first_active_seat(&self) -> usize {
        (0..self.seats())
            .find(|seat| !self.is_folded(*seat))
            .unwrap_or(0)
    }
}
