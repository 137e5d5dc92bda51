//! Settlement results.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::SettleError;
use crate::ledger::LedgerRow;
use crate::roster::Roster;

/// Net result of a settled hand.
///
/// Every seat loses what it committed and the winner collects the whole pot,
/// so the deltas always sum to zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Payout {
    /// Seat that won the pot.
    pub winner: usize,
    /// Total of all committed amounts.
    pub pot: u64,
    /// Net change per seat (positive = profit, negative = loss).
    pub deltas: Vec<i64>,
}

impl Payout {
    /// Computes the payout for `bets` with the pot going to `winner`.
    ///
    /// This does not check whether the winner folded; see
    /// [`HandState::settle`](crate::HandState::settle) for the checked version.
    ///
    /// # Errors
    ///
    /// Returns an error if `winner` is not a seat, or if the pot does not fit
    /// in an `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use pokernight::Payout;
    ///
    /// let payout = Payout::from_bets(&[10, 10, 10], 0).unwrap();
    /// assert_eq!(payout.deltas, vec![20, -10, -10]);
    /// assert_eq!(payout.total(), 0);
    /// ```
    pub fn from_bets(bets: &[u64], winner: usize) -> Result<Self, SettleError> {
        if winner >= bets.len() {
            return Err(SettleError::SeatOutOfRange(winner));
        }

        let pot = bets
            .iter()
            .try_fold(0_u64, |pot, bet| pot.checked_add(*bet))
            .ok_or(SettleError::PotOverflow)?;
        let signed_pot = i64::try_from(pot).map_err(|_| SettleError::PotOverflow)?;

        #[expect(
            clippy::cast_possible_wrap,
            reason = "every bet is at most the pot, which fits in i64"
        )]
        let mut deltas: Vec<i64> = bets.iter().map(|bet| -(*bet as i64)).collect();
        deltas[winner] += signed_pot;

        Ok(Self {
            winner,
            pot,
            deltas,
        })
    }

    /// Returns the net change for `seat`.
    #[must_use]
    pub fn delta(&self, seat: usize) -> Option<i64> {
        self.deltas.get(seat).copied()
    }

    /// Returns the sum of all deltas. Always zero for a computed payout.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.deltas.iter().sum()
    }

    /// Converts the payout into a ledger row keyed by the roster's names.
    ///
    /// Seats beyond the roster are ignored.
    #[must_use]
    pub fn to_row(&self, roster: &Roster) -> LedgerRow {
        roster
            .names()
            .iter()
            .zip(&self.deltas)
            .map(|(name, delta)| (name.clone(), *delta))
            .collect()
    }
}
