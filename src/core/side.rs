//! Sides, occupancy, and per-side data storage.
//!
//! ## Side
//!
//! One of the two competing colors. Morris is strictly two-player, so a
//! side's opponent is always well defined.
//!
//! ## SideMap
//!
//! Per-side data storage backed by a two-element array for O(1) access.
//! Supports iteration and indexing by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The white pieces.
    White,
    /// The black pieces.
    Black,
}

impl Side {
    /// Both sides in a fixed order.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Storage index (White = 0, Black = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// What an intersection label currently holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupancy {
    /// A playable intersection with no piece on it.
    Empty,
    /// The label is not one of the 24 playable intersections.
    Invalid,
    /// A playable intersection holding a piece.
    Occupied(Side),
}

impl Occupancy {
    /// The side holding this point, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Occupancy::Occupied(side) => Some(side),
            Occupancy::Empty | Occupancy::Invalid => None,
        }
    }

    /// Whether this is an empty playable intersection.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Occupancy::Empty)
    }
}

impl From<Option<Side>> for Occupancy {
    fn from(piece: Option<Side>) -> Self {
        match piece {
            Some(side) => Occupancy::Occupied(side),
            None => Occupancy::Empty,
        }
    }
}

/// Piece counters for one side.
///
/// `in_hand + on_board` starts at the configured piece count and never
/// increases: placing moves a piece from hand to board, and only a removal
/// against this side lowers `on_board`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideCounts {
    /// Pieces still waiting to be placed.
    pub in_hand: u8,
    /// Pieces currently on the board.
    pub on_board: u8,
}

impl SideCounts {
    /// Counters for a side that has not placed anything yet.
    #[must_use]
    pub const fn new(pieces: u8) -> Self {
        Self {
            in_hand: pieces,
            on_board: 0,
        }
    }

    /// Pieces this side still has in play.
    #[must_use]
    pub const fn total(self) -> u8 {
        self.in_hand + self.on_board
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_morris::core::{Side, SideMap};
///
/// let mut captured: SideMap<u32> = SideMap::with_value(0);
/// captured[Side::Black] += 2;
///
/// assert_eq!(captured[Side::White], 0);
/// assert_eq!(captured[Side::Black], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::White), factory(Side::Black)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for SideMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
