//! Player action types.

/// An action taken by the player on turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Match the standing bet. Also used to check when already matched.
    Call,
    /// Raise the standing bet to an absolute amount.
    Raise {
        /// Raise-to amount, not an increment.
        to: u64,
    },
    /// Give up the hand. Chips already committed stay in the pot.
    Fold,
}

/// The kind of action currently selected for the player on turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActionKind {
    /// Call.
    #[default]
    Call,
    /// Raise.
    Raise,
    /// Fold.
    Fold,
}

/// Scratch input for the player on turn.
///
/// A presentation layer fills this in while the player decides and submits it
/// with [`HandState::submit_pending`](crate::HandState::submit_pending). It is
/// reset to the default after every resolved turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PendingAction {
    /// Selected action kind.
    pub kind: ActionKind,
    /// Raise-to amount. Only read when `kind` is [`ActionKind::Raise`].
    pub raise_to: u64,
}

impl PendingAction {
    /// Converts the selection into an [`Action`].
    #[must_use]
    pub const fn into_action(self) -> Action {
        match self.kind {
            ActionKind::Call => Action::Call,
            ActionKind::Raise => Action::Raise { to: self.raise_to },
            ActionKind::Fold => Action::Fold,
        }
    }
}

impl From<Action> for ActionKind {
    fn from(action: Action) -> Self {
        match action {
            Action::Call => Self::Call,
            Action::Raise { .. } => Self::Raise,
            Action::Fold => Self::Fold,
        }
    }
}
