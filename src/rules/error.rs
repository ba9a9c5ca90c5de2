//! Rejections and faults.
//!
//! `ActionError` covers everything a caller can get wrong: each variant is a
//! rejection, the game is untouched, and the caller may try again.
//! `TopologyError` is a fault in the board table and only ever surfaces at
//! construction. `ConfigError` and `CoordParseError` come from setting up a
//! game and reading labels.

use crate::core::{ActionKind, Coord, Side};

use super::phase::Phase;

/// Why an action was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("cannot {action} while {phase}")]
    WrongPhase { action: ActionKind, phase: Phase },

    #[error("{0} is not a playable intersection")]
    InvalidPoint(Coord),

    #[error("{0} is already occupied")]
    TargetOccupied(Coord),

    #[error("{0} is empty")]
    TargetEmpty(Coord),

    #[error("{at} does not hold a {side} piece")]
    NotOwnPiece { at: Coord, side: Side },

    #[error("{0} has no pieces left to place")]
    NoPiecesInHand(Side),

    #[error("{0} still has pieces to place")]
    StillPlacing(Side),

    #[error("cannot move from {from} to {to}")]
    IllegalDestination { from: Coord, to: Coord },

    #[error("{0} is protected by a mill")]
    ProtectedByMill(Coord),

    #[error("it is not {0}'s turn")]
    NotYourTurn(Side),
}

/// Inconsistent board table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("expected {expected} points, found {found}")]
    PointCount { expected: usize, found: usize },

    #[error("point {0} listed twice")]
    DuplicatePoint(Coord),

    #[error("{point} lists unknown neighbor {neighbor}")]
    UnknownNeighbor { point: Coord, neighbor: Coord },

    #[error("{0} lists itself as a neighbor")]
    SelfLoop(Coord),

    #[error("{from} lists {to} as a neighbor but not the reverse")]
    Asymmetric { from: Coord, to: Coord },

    #[error("{point} has {degree} neighbors (expected 2 to 4)")]
    Degree { point: Coord, degree: usize },
}

/// Invalid game configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("pieces per side must be between 3 and {max}, got {pieces}")]
    PiecesPerSide { pieces: u8, max: u8 },

    #[error("loss threshold {threshold} must be between 1 and the piece count {pieces}")]
    LossThreshold { threshold: u8, pieces: u8 },

    #[error("flying threshold {threshold} exceeds the piece count {pieces}")]
    FlyingThreshold { threshold: u8, pieces: u8 },
}

/// A label that is not of the form column symbol + row number.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CoordParseError {
    #[error("label {0:?} does not start with a column letter")]
    MissingColumn(String),

    #[error("label {0:?} does not end with a row number")]
    BadRow(String),
}
