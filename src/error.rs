//! Error types for hand, ledger, and table operations.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when starting a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// A hand needs at least two seats.
    #[error("a hand needs at least two players")]
    TooFewPlayers,
    /// Seeded bets do not cover exactly the seated players.
    #[error("expected {expected} seeded bets, found {found}")]
    SeatMismatch {
        /// Number of seats at the table.
        expected: usize,
        /// Number of bets supplied.
        found: usize,
    },
}

/// Errors that can occur while applying a player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The hand has already terminated.
    #[error("the hand is over")]
    HandOver,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Raise-to amount is below the standing bet.
    #[error("raise to {to} is below the current bet of {current_bet}")]
    RaiseBelowCurrentBet {
        /// Requested raise-to amount.
        to: u64,
        /// Standing bet at the table.
        current_bet: u64,
    },
}

/// Errors that can occur when settling a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// The hand has not terminated yet.
    #[error("the hand is still in progress")]
    HandInProgress,
    /// Winner seat does not exist.
    #[error("seat {0} is not at the table")]
    SeatOutOfRange(usize),
    /// Winner has folded.
    #[error("seat {0} has folded and cannot win the pot")]
    WinnerFolded(usize),
    /// Pot or a payout does not fit in a signed 64-bit amount.
    #[error("pot overflows a signed 64-bit amount")]
    PotOverflow,
}

/// Errors that can occur when building a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A roster needs at least two players.
    #[error("a roster needs at least two players")]
    TooFewPlayers,
    /// A player name is empty or whitespace.
    #[error("player name is blank")]
    BlankName,
    /// The same name is seated twice.
    #[error("player name is seated twice")]
    DuplicateName,
}

/// Errors reported by the in-memory [`Ledger`](crate::Ledger).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Player is not a ledger column.
    #[error("player {0:?} is not in the ledger")]
    UnknownPlayer(String),
    /// Player is already a ledger column.
    #[error("player {0:?} is already in the ledger")]
    DuplicatePlayer(String),
    /// Player name is empty or whitespace.
    #[error("player name is blank")]
    BlankName,
    /// A stored row does not have one cell per player.
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        /// Index of the offending row.
        row: usize,
        /// Number of players.
        expected: usize,
        /// Number of cells in the row.
        found: usize,
    },
}

/// Errors returned by [`Table`](crate::Table) operations.
///
/// `E` is the error type of the attached [`LedgerStore`](crate::LedgerStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError<E> {
    /// No hand is in progress.
    #[error("no hand is in progress")]
    NoHand,
    /// A hand is already in progress.
    #[error("a hand is already in progress")]
    HandInProgress,
    /// A settled hand has not been committed to the ledger yet.
    #[error("a settled hand is waiting to be committed")]
    UncommittedPayout,
    /// There is no settled hand waiting to be committed.
    #[error("nothing to commit")]
    NothingToCommit,
    /// A roster player has no ledger column.
    #[error("player {0:?} is not in the ledger")]
    UnknownPlayer(String),
    /// Starting the hand failed.
    #[error(transparent)]
    Hand(#[from] HandError),
    /// The action was rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Settlement was rejected.
    #[error(transparent)]
    Settle(#[from] SettleError),
    /// The ledger store failed. A settled payout is kept for [`retry_commit`](crate::Table::retry_commit).
    #[error("ledger store failed: {0}")]
    Store(E),
}
