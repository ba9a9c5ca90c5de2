//! Actions and the records they leave in the move log.
//!
//! An `Action` is what a mover asks the engine to do. A `MoveRecord` is what
//! the engine writes down after it has done it. Records are immutable once
//! appended and the log only grows.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::side::Side;

/// The three kinds of action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Put a piece from hand onto an empty point.
    Place,
    /// Slide (or fly) a piece already on the board.
    Move,
    /// Take an opponent piece off the board after closing a mill.
    Remove,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Place => write!(f, "place"),
            ActionKind::Move => write!(f, "move"),
            ActionKind::Remove => write!(f, "remove"),
        }
    }
}

/// A requested action.
///
/// ## Example
///
/// ```
/// use rust_morris::core::{Action, ActionKind, Coord};
///
/// let slide = Action::Move { from: Coord::new('A', 1), to: Coord::new('D', 1) };
/// assert_eq!(slide.kind(), ActionKind::Move);
/// assert_eq!(slide.to_string(), "move A1-D1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place a piece at the given point.
    Place(Coord),
    /// Move a piece between two points.
    Move {
        /// Source point (must hold one of the mover's pieces).
        from: Coord,
        /// Destination point (must be empty).
        to: Coord,
    },
    /// Remove the opponent piece at the given point.
    Remove(Coord),
}

impl Action {
    /// The kind of this action.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Action::Place(_) => ActionKind::Place,
            Action::Move { .. } => ActionKind::Move,
            Action::Remove(_) => ActionKind::Remove,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place(at) => write!(f, "place {at}"),
            Action::Move { from, to } => write!(f, "move {from}-{to}"),
            Action::Remove(at) => write!(f, "remove {at}"),
        }
    }
}

/// An applied action as kept in the move log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// What kind of action was applied.
    pub kind: ActionKind,

    /// The side that acted.
    pub side: Side,

    /// The point acted on: placement target, movement source, or removal target.
    pub source: Coord,

    /// Movement destination. Always `None` for placements and removals.
    pub destination: Option<Coord>,

    /// Number of completed turns before this action (starts at 0).
    pub turn: u32,
}

impl MoveRecord {
    /// Record an applied action.
    #[must_use]
    pub fn new(side: Side, action: Action, turn: u32) -> Self {
        let (source, destination) = match action {
            Action::Place(at) | Action::Remove(at) => (at, None),
            Action::Move { from, to } => (from, Some(to)),
        };
        Self {
            kind: action.kind(),
            side,
            source,
            destination,
            turn,
        }
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.kind, self.destination) {
            (ActionKind::Place, _) => write!(f, "{} places {}", self.side, self.source),
            (ActionKind::Remove, _) => write!(f, "{} removes {}", self.side, self.source),
            (ActionKind::Move, Some(to)) => {
                write!(f, "{} moves {}-{}", self.side, self.source, to)
            }
            (ActionKind::Move, None) => write!(f, "{} moves {}", self.side, self.source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kind() {
        assert_eq!(Action::Place(Coord::new('A', 1)).kind(), ActionKind::Place);
        assert_eq!(Action::Remove(Coord::new('A', 1)).kind(), ActionKind::Remove);
        assert_eq!(
            Action::Move {
                from: Coord::new('A', 1),
                to: Coord::new('A', 4)
            }
            .kind(),
            ActionKind::Move
        );
    }

    #[test]
    fn test_record_from_place() {
        let record = MoveRecord::new(Side::White, Action::Place(Coord::new('D', 2)), 0);

        assert_eq!(record.kind, ActionKind::Place);
        assert_eq!(record.side, Side::White);
        assert_eq!(record.source, Coord::new('D', 2));
        assert_eq!(record.destination, None);
        assert_eq!(record.to_string(), "White places D2");
    }

    #[test]
    fn test_record_from_move() {
        let action = Action::Move {
            from: Coord::new('D', 2),
            to: Coord::new('D', 3),
        };
        let record = MoveRecord::new(Side::Black, action, 20);

        assert_eq!(record.destination, Some(Coord::new('D', 3)));
        assert_eq!(record.turn, 20);
        assert_eq!(record.to_string(), "Black moves D2-D3");
    }

    #[test]
    fn test_record_from_remove() {
        let record = MoveRecord::new(Side::White, Action::Remove(Coord::new('G', 7)), 5);
        assert_eq!(record.to_string(), "White removes G7");
    }

    #[test]
    fn test_record_serialization() {
        let record = MoveRecord::new(Side::Black, Action::Place(Coord::new('B', 4)), 3);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
