//! Street types.

use core::fmt;

/// A betting street.
///
/// Streets run in a fixed order and never go backwards within a hand.
/// [`Street::End`] is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Street {
    /// Betting before any community cards.
    #[default]
    PreFlop,
    /// Betting after the flop.
    Flop,
    /// Betting after the turn card.
    Turn,
    /// Betting after the river card.
    River,
    /// No further betting; only settlement remains.
    End,
}

impl Street {
    /// All streets in play order.
    pub const ALL: [Self; 5] = [Self::PreFlop, Self::Flop, Self::Turn, Self::River, Self::End];

    /// Index of the terminal street.
    pub const TERMINAL_INDEX: usize = Self::ALL.len() - 1;

    /// Returns the position of this street in [`Street::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::PreFlop => 0,
            Self::Flop => 1,
            Self::Turn => 2,
            Self::River => 3,
            Self::End => 4,
        }
    }

    /// Returns the street at `index`, if any.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Returns the following street. [`Street::End`] stays at `End`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::PreFlop => Self::Flop,
            Self::Flop => Self::Turn,
            Self::Turn => Self::River,
            Self::River | Self::End => Self::End,
        }
    }

    /// Returns whether this is the terminal street.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::End)
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PreFlop => "Pre-flop",
            Self::Flop => "Flop",
            Self::Turn => "Turn",
            Self::River => "River",
            Self::End => "End",
        })
    }
}
