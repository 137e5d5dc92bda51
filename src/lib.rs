//! A betting-round engine and earnings ledger for home poker nights, with
//! optional `no_std` support.
//!
//! The crate provides a [`HandState`] that tracks turn order, folds, street
//! closure and hand termination, and settles a finished hand into a zero-sum
//! [`Payout`]. A [`Table`] wraps one hand at a time and commits every payout
//! as a row of a [`LedgerStore`], whose running column sums are each
//! player's cumulative earnings.
//!
//! # Example
//!
//! ```
//! use pokernight::{Action, HandState, Street, TableOptions};
//!
//! let mut hand = HandState::new(3, &TableOptions::default()).unwrap();
//! for _ in 0..3 {
//!     hand.apply_action(Action::Call).unwrap();
//! }
//! assert_eq!(hand.street(), Street::Flop);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod error;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod payout;
pub mod roster;
mod sync;
pub mod table;

// Re-export main types
pub use action::{Action, ActionKind, PendingAction};
pub use error::{ActionError, HandError, LedgerError, RosterError, SettleError, TableError};
pub use hand::{HandState, Street};
pub use ledger::{Ledger, LedgerRow, LedgerStore};
pub use options::TableOptions;
pub use payout::Payout;
pub use roster::Roster;
pub use table::Table;
