//! Cumulative earnings ledger.
//!
//! The ledger is a table with one column per player and one row per settled
//! hand. Each cell is that player's net result for the hand, so the running
//! column-wise sum is the player's cumulative earnings.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::error::LedgerError;

/// Net results for one settled hand, keyed by player name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LedgerRow {
    entries: Vec<(String, i64)>,
}

impl LedgerRow {
    /// Creates an empty row.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry for `name`.
    pub fn push(&mut self, name: impl Into<String>, delta: i64) {
        self.entries.push((name.into(), delta));
    }

    /// Returns the entry for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, delta)| *delta)
    }

    /// Iterates over `(name, delta)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries
            .iter()
            .map(|(name, delta)| (name.as_str(), *delta))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the row has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the sum of all entries.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.entries
            .iter()
            .fold(0_i64, |total, (_, delta)| total.saturating_add(*delta))
    }
}

impl FromIterator<(String, i64)> for LedgerRow {
    fn from_iter<T: IntoIterator<Item = (String, i64)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Persistent storage for settled hands.
///
/// A store is append-only from the table's point of view: each settled hand
/// becomes exactly one row.
pub trait LedgerStore {
    /// Error reported by the store.
    type Error: fmt::Debug + fmt::Display;

    /// Returns the players that have a column in the ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn players(&self) -> Result<Vec<String>, Self::Error>;

    /// Appends one settled hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the row cannot be stored. Nothing is appended in
    /// that case and the caller may retry.
    fn append(&mut self, row: &LedgerRow) -> Result<(), Self::Error>;

    /// Returns every stored row, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn rows(&self) -> Result<Vec<LedgerRow>, Self::Error>;
}

/// In-memory ledger.
///
/// ```
/// use pokernight::{Ledger, LedgerRow, LedgerStore};
///
/// let mut ledger = Ledger::with_players(["Ann", "Bob"]).unwrap();
///
/// let mut first = LedgerRow::new();
/// first.push("Ann", 15);
/// first.push("Bob", -15);
/// ledger.append(&first).unwrap();
///
/// let mut second = LedgerRow::new();
/// second.push("Ann", -5);
/// second.push("Bob", 5);
/// ledger.append(&second).unwrap();
///
/// assert_eq!(ledger.total_for("Ann"), Some(10));
/// assert_eq!(ledger.cumulative(), vec![vec![15, -15], vec![10, -10]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ledger {
    /// Column names.
    players: Vec<String>,
    /// One cell per player for every settled hand.
    rows: Vec<Vec<i64>>,
}

impl Ledger {
    /// Creates an empty ledger with no players.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            players: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Creates an empty ledger with the given players.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is blank or appears twice.
    pub fn with_players<I, S>(players: I) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ledger = Self::new();
        for name in players {
            ledger.add_player(name)?;
        }
        Ok(ledger)
    }

    /// Loads a ledger from stored cells.
    ///
    /// Missing cells count as zero, and rows that are zero for every player
    /// are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if a player name is invalid or a row does not have
    /// one cell per player.
    pub fn from_rows<I, S>(players: I, rows: Vec<Vec<Option<i64>>>) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ledger = Self::with_players(players)?;
        let width = ledger.players.len();

        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(LedgerError::RowWidth {
                    row: index,
                    expected: width,
                    found: row.len(),
                });
            }
            ledger
                .rows
                .push(row.into_iter().map(Option::unwrap_or_default).collect());
        }

        let dropped = ledger.prune_empty_rows();
        tracing::debug!(rows = ledger.rows.len(), dropped, "ledger loaded");
        Ok(ledger)
    }

    /// Returns the player names in column order.
    #[must_use]
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Returns the stored cells, one vector per settled hand.
    #[must_use]
    pub fn history(&self) -> &[Vec<i64>] {
        &self.rows
    }

    /// Returns the number of settled hands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether no hands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|player| player == name)
    }

    /// Adds a player column. Existing rows get zero for the new player.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or already present.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<(), LedgerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LedgerError::BlankName);
        }
        if self.column(&name).is_some() {
            return Err(LedgerError::DuplicatePlayer(name));
        }

        for row in &mut self.rows {
            row.push(0);
        }
        tracing::info!(player = %name, "player added to ledger");
        self.players.push(name);
        Ok(())
    }

    /// Removes a player column and its whole history.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not in the ledger.
    pub fn remove_player(&mut self, name: &str) -> Result<(), LedgerError> {
        let column = self
            .column(name)
            .ok_or_else(|| LedgerError::UnknownPlayer(name.into()))?;

        self.players.remove(column);
        for row in &mut self.rows {
            row.remove(column);
        }
        tracing::info!(player = name, "player removed from ledger");
        Ok(())
    }

    /// Drops rows that are zero for every player. Returns how many were dropped.
    pub fn prune_empty_rows(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| row.iter().any(|cell| *cell != 0));
        before - self.rows.len()
    }

    /// Returns the running column-wise sum, one vector per settled hand.
    ///
    /// Sums saturate at the `i64` bounds.
    #[must_use]
    pub fn cumulative(&self) -> Vec<Vec<i64>> {
        let mut running = alloc::vec![0_i64; self.players.len()];
        self.rows
            .iter()
            .map(|row| {
                for (sum, cell) in running.iter_mut().zip(row) {
                    *sum = sum.saturating_add(*cell);
                }
                running.clone()
            })
            .collect()
    }

    /// Returns each player's cumulative earnings over every recorded hand.
    #[must_use]
    pub fn totals(&self) -> LedgerRow {
        let mut totals = alloc::vec![0_i64; self.players.len()];
        for row in &self.rows {
            for (sum, cell) in totals.iter_mut().zip(row) {
                *sum = sum.saturating_add(*cell);
            }
        }
        self.players.iter().cloned().zip(totals).collect()
    }

    /// Returns the cumulative earnings of `name`.
    #[must_use]
    pub fn total_for(&self, name: &str) -> Option<i64> {
        let column = self.column(name)?;
        Some(
            self.rows
                .iter()
                .fold(0_i64, |total, row| total.saturating_add(row[column])),
        )
    }
}

impl LedgerStore for Ledger {
    type Error = LedgerError;

    fn players(&self) -> Result<Vec<String>, Self::Error> {
        Ok(self.players.clone())
    }

    fn append(&mut self, row: &LedgerRow) -> Result<(), Self::Error> {
        let mut cells = alloc::vec![0_i64; self.players.len()];
        let mut seen: Vec<usize> = Vec::with_capacity(row.len());

        for (name, delta) in row.iter() {
            let column = self
                .column(name)
                .ok_or_else(|| LedgerError::UnknownPlayer(name.into()))?;
            if seen.contains(&column) {
                return Err(LedgerError::DuplicatePlayer(name.into()));
            }
            seen.push(column);
            cells[column] = delta;
        }

        self.rows.push(cells);
        tracing::info!(hand = self.rows.len(), "ledger row appended");
        Ok(())
    }

    fn rows(&self) -> Result<Vec<LedgerRow>, Self::Error> {
        Ok(self
            .rows
            .iter()
            .map(|row| self.players.iter().cloned().zip(row.iter().copied()).collect())
            .collect())
    }
}
