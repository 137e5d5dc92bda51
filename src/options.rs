//! Table configuration options.

/// Configuration options for a poker table.
///
/// The small and big blind are posted by the last two seats of the roster
/// before the first action. A blind of zero posts nothing.
///
/// ```
/// use pokernight::TableOptions;
///
/// let options = TableOptions::default()
///     .with_small_blind(1)
///     .with_big_blind(2);
/// assert_eq!(options.small_blind, 1);
/// assert_eq!(options.big_blind, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Small blind, posted by the second-to-last seat.
    pub small_blind: u64,
    /// Big blind, posted by the last seat. Seeds the standing bet.
    pub big_blind: u64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            small_blind: 5,
            big_blind: 10,
        }
    }
}

impl TableOptions {
    /// Sets the small blind.
    ///
    /// # Example
    ///
    /// ```
    /// use pokernight::TableOptions;
    ///
    /// let options = TableOptions::default().with_small_blind(25);
    /// assert_eq!(options.small_blind, 25);
    /// ```
    #[must_use]
    pub const fn with_small_blind(mut self, amount: u64) -> Self {
        self.small_blind = amount;
        self
    }

    /// Sets the big blind.
    ///
    /// # Example
    ///
    /// ```
    /// use pokernight::TableOptions;
    ///
    /// let options = TableOptions::default().with_big_blind(50);
    /// assert_eq!(options.big_blind, 50);
    /// ```
    #[must_use]
    pub const fn with_big_blind(mut self, amount: u64) -> Self {
        self.big_blind = amount;
        self
    }

    /// Disables both blinds, so every hand starts with nothing committed.
    ///
    /// # Example
    ///
    /// ```
    /// use pokernight::TableOptions;
    ///
    /// let options = TableOptions::default().without_blinds();
    /// assert_eq!((options.small_blind, options.big_blind), (0, 0));
    /// ```
    #[must_use]
    pub const fn without_blinds(self) -> Self {
        self.with_small_blind(0).with_big_blind(0)
    }
}
