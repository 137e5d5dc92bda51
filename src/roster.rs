//! Seated players for a hand.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::RosterError;

/// An ordered list of the players seated for a hand.
///
/// Seat order is fixed once built: seat 0 acts first and the last two seats
/// post the small and big blind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Seats the given players in order.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two players are given, a name is blank,
    /// or a name appears twice.
    ///
    /// # Example
    ///
    /// ```
    /// use pokernight::Roster;
    ///
    /// let roster = Roster::new(["Ann", "Bob", "Cid"]).unwrap();
    /// assert_eq!(roster.seat_of("Bob"), Some(1));
    /// assert_eq!(roster.name(2), Some("Cid"));
    /// ```
    pub fn new<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seated: Vec<String> = Vec::new();

        for name in names {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(RosterError::BlankName);
            }
            if seated.contains(&name) {
                return Err(RosterError::DuplicateName);
            }
            seated.push(name);
        }

        if seated.len() < 2 {
            return Err(RosterError::TooFewPlayers);
        }

        Ok(Self { names: seated })
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`; a roster has at least two players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the player names in seat order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the name seated at `seat`.
    #[must_use]
    pub fn name(&self, seat: usize) -> Option<&str> {
        self.names.get(seat).map(String::as_str)
    }

    /// Returns the seat of `name`.
    #[must_use]
    pub fn seat_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|seated| seated == name)
    }

    /// Iterates over `(seat, name)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().map(String::as_str).enumerate()
    }
}
