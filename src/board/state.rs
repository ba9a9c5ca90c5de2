//! Board occupancy.
//!
//! `Board` pairs the shared topology with one occupancy slot per playable
//! point. Labels that are not playable have no slot: reading them reports
//! `Occupancy::Invalid`, writing them does nothing.

use crate::core::{Coord, Occupancy, Side};

use super::topology::{PointId, Topology, POINT_COUNT};

/// Mutable occupancy over the fixed topology.
///
/// Cloning is cheap: the topology is shared and occupancy is a small array.
#[derive(Clone, Copy)]
pub struct Board {
    topology: &'static Topology,
    cells: [Option<Side>; POINT_COUNT],
}

impl Board {
    /// An empty standard board.
    #[must_use]
    pub fn new() -> Self {
        Self::with_topology(Topology::standard())
    }

    /// An empty board over the given topology.
    #[must_use]
    pub fn with_topology(topology: &'static Topology) -> Self {
        Self {
            topology,
            cells: [None; POINT_COUNT],
        }
    }

    /// The topology this board is laid over.
    #[must_use]
    pub fn topology(&self) -> &'static Topology {
        self.topology
    }

    /// Occupancy of a label.
    ///
    /// Returns `Occupancy::Invalid` for any label that is not one of the
    /// playable points, including out-of-range symbols.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Occupancy {
        match self.topology.point(coord) {
            Some(point) => self.at(point).into(),
            None => Occupancy::Invalid,
        }
    }

    /// Set the occupancy of a label.
    ///
    /// Silently ignored for labels that are not playable, and for
    /// `Occupancy::Invalid` itself: a playable point can never become invalid.
    pub fn set(&mut self, coord: Coord, value: Occupancy) {
        let Some(point) = self.topology.point(coord) else {
            return;
        };
        match value {
            Occupancy::Empty => self.put(point, None),
            Occupancy::Occupied(side) => self.put(point, Some(side)),
            Occupancy::Invalid => {}
        }
    }

    /// The piece on a point, if any.
    #[must_use]
    pub fn at(&self, point: PointId) -> Option<Side> {
        self.cells[point.index()]
    }

    /// Put a piece on (or clear) a point.
    pub fn put(&mut self, point: PointId, piece: Option<Side>) {
        self.cells[point.index()] = piece;
    }

    /// Points currently held by `side`.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = PointId> + '_ {
        self.topology
            .points()
            .filter(move |&point| self.at(point) == Some(side))
    }

    /// Points with no piece on them.
    pub fn empty_points(&self) -> impl Iterator<Item = PointId> + '_ {
        self.topology.points().filter(move |&point| self.at(point).is_none())
    }

    /// Number of pieces `side` has on the board.
    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(side)).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.topology, other.topology) && self.cells == other.cells
    }
}

impl Eq for Board {}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.topology.points().filter_map(|point| {
                self.at(point).map(|side| (self.topology.coord(point), side))
            }))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(label: &str) -> Coord {
        label.parse().unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for point in board.topology().points() {
            assert_eq!(board.at(point), None);
        }
        assert_eq!(board.empty_points().count(), POINT_COUNT);
    }

    #[test]
    fn test_get_invalid_labels() {
        let board = Board::new();
        assert_eq!(board.get(coord("H2")), Occupancy::Invalid);
        assert_eq!(board.get(coord("A9")), Occupancy::Invalid);
        assert_eq!(board.get(coord("D4")), Occupancy::Invalid);
        assert_eq!(board.get(coord("A1")), Occupancy::Empty);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        board.set(coord("D2"), Occupancy::Occupied(Side::White));

        assert_eq!(board.get(coord("D2")), Occupancy::Occupied(Side::White));
        assert_eq!(board.count(Side::White), 1);
        assert_eq!(board.count(Side::Black), 0);

        board.set(coord("D2"), Occupancy::Empty);
        assert_eq!(board.get(coord("D2")), Occupancy::Empty);
    }

    #[test]
    fn test_set_ignores_invalid() {
        let mut board = Board::new();
        let before = board;

        board.set(coord("B1"), Occupancy::Occupied(Side::Black));
        board.set(coord("Z9"), Occupancy::Occupied(Side::Black));
        assert_eq!(board, before);
        assert_eq!(board.get(coord("B1")), Occupancy::Invalid);

        board.set(coord("A1"), Occupancy::Occupied(Side::White));
        board.set(coord("A1"), Occupancy::Invalid);
        assert_eq!(board.get(coord("A1")), Occupancy::Occupied(Side::White));
    }

    #[test]
    fn test_pieces_iterator() {
        let mut board = Board::new();
        board.set(coord("A1"), Occupancy::Occupied(Side::Black));
        board.set(coord("G7"), Occupancy::Occupied(Side::Black));
        board.set(coord("D5"), Occupancy::Occupied(Side::White));

        let black: Vec<_> = board
            .pieces(Side::Black)
            .map(|p| board.topology().coord(p))
            .collect();
        assert_eq!(black.len(), 2);
        assert!(black.contains(&coord("A1")));
        assert!(black.contains(&coord("G7")));
        assert_eq!(board.empty_points().count(), POINT_COUNT - 3);
    }
}
