//! Turn phases.

use serde::{Deserialize, Serialize};

use crate::core::ActionKind;

/// Where the game is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The side to act still has pieces in hand and must place one.
    Placing,
    /// The side to act has placed everything and must move a piece.
    Moving,
    /// The side to act just closed a mill and must remove an opponent piece.
    Removing,
    /// Terminal. No further actions are accepted.
    GameOver,
}

impl Phase {
    /// The only action kind accepted in this phase.
    #[must_use]
    pub const fn accepts(self) -> Option<ActionKind> {
        match self {
            Phase::Placing => Some(ActionKind::Place),
            Phase::Moving => Some(ActionKind::Move),
            Phase::Removing => Some(ActionKind::Remove),
            Phase::GameOver => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Placing => write!(f, "placing"),
            Phase::Moving => write!(f, "moving"),
            Phase::Removing => write!(f, "removing"),
            Phase::GameOver => write!(f, "game over"),
        }
    }
}
