//! Board topology: the playable points and how they connect.
//!
//! The board is three concentric square rings of eight points each. Corners
//! connect to the two midpoints beside them on the same ring, and each
//! ring's midpoints connect to the matching midpoint on the next ring
//! ("spokes"). The adjacency graph has cycles, so points live in a flat
//! arena and refer to each other by `PointId` index.
//!
//! ```text
//! 7   A7----------D7----------G7
//!     |           |           |
//! 6   |   B6------D6------F6  |
//!     |   |       |       |   |
//! 5   |   |   C5--D5--E5  |   |
//!     |   |   |       |   |   |
//! 4   A4--B4--C4      E4--F4--G4
//!     |   |   |       |   |   |
//! 3   |   |   C3--D3--E3  |   |
//!     |   |       |       |   |
//! 2   |   B2------D2------F2  |
//!     |           |           |
//! 1   A1----------D1----------G1
//!     A   B   C   D   E   F   G
//! ```
//!
//! The topology is built once per process from a compiled-in table and is
//! never mutated. It is the only authority on which slides are legal and
//! where mill lines run.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::sync::OnceLock;

use crate::core::Coord;
use crate::rules::TopologyError;

/// Number of playable points on the board.
pub const POINT_COUNT: usize = 24;

/// Index of a playable point in the topology arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u8);

impl PointId {
    /// Get the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One playable point and its neighbors.
#[derive(Clone, Debug)]
struct Node {
    coord: Coord,
    neighbors: SmallVec<[PointId; 4]>,
}

/// Adjacency table for the standard board, one row per point.
///
/// Every edge is listed from both ends; `Topology::from_table` rejects the
/// table if it is not symmetric.
const STANDARD_TABLE: [(Coord, &[Coord]); POINT_COUNT] = [
    // Outer ring
    (c('A', 1), &[c('D', 1), c('A', 4)]),
    (c('D', 1), &[c('A', 1), c('G', 1), c('D', 2)]),
    (c('G', 1), &[c('D', 1), c('G', 4)]),
    (c('G', 4), &[c('G', 1), c('G', 7), c('F', 4)]),
    (c('G', 7), &[c('G', 4), c('D', 7)]),
    (c('D', 7), &[c('G', 7), c('A', 7), c('D', 6)]),
    (c('A', 7), &[c('D', 7), c('A', 4)]),
    (c('A', 4), &[c('A', 7), c('A', 1), c('B', 4)]),
    // Middle ring
    (c('B', 2), &[c('D', 2), c('B', 4)]),
    (c('D', 2), &[c('B', 2), c('F', 2), c('D', 1), c('D', 3)]),
    (c('F', 2), &[c('D', 2), c('F', 4)]),
    (c('F', 4), &[c('F', 2), c('F', 6), c('G', 4), c('E', 4)]),
    (c('F', 6), &[c('F', 4), c('D', 6)]),
    (c('D', 6), &[c('F', 6), c('B', 6), c('D', 7), c('D', 5)]),
    (c('B', 6), &[c('D', 6), c('B', 4)]),
    (c('B', 4), &[c('B', 6), c('B', 2), c('A', 4), c('C', 4)]),
    // Inner ring
    (c('C', 3), &[c('D', 3), c('C', 4)]),
    (c('D', 3), &[c('C', 3), c('E', 3), c('D', 2)]),
    (c('E', 3), &[c('D', 3), c('E', 4)]),
    (c('E', 4), &[c('E', 3), c('E', 5), c('F', 4)]),
    (c('E', 5), &[c('E', 4), c('D', 5)]),
    (c('D', 5), &[c('E', 5), c('C', 5), c('D', 6)]),
    (c('C', 5), &[c('D', 5), c('C', 4)]),
    (c('C', 4), &[c('C', 5), c('C', 3), c('B', 4)]),
];

const fn c(column: char, row: u8) -> Coord {
    Coord::new(column, row)
}

/// Immutable adjacency graph over the playable points.
#[derive(Clone, Debug)]
pub struct Topology {
    nodes: Vec<Node>,
    index: FxHashMap<Coord, PointId>,
}

impl Topology {
    /// The standard 24-point board, built on first use and shared afterwards.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in table is inconsistent. That is a defect in
    /// the crate, not a condition a caller can recover from.
    pub fn standard() -> &'static Topology {
        static STANDARD: OnceLock<Topology> = OnceLock::new();
        STANDARD.get_or_init(|| {
            Topology::from_table(&STANDARD_TABLE)
                .unwrap_or_else(|e| panic!("standard board table is inconsistent: {e}"))
        })
    }

    /// Build a topology from an adjacency table.
    ///
    /// Each row names a point and every point it connects to. The table must
    /// list exactly `POINT_COUNT` distinct points, every neighbor must be one
    /// of them, and adjacency must be symmetric with degree 2 to 4.
    pub fn from_table(table: &[(Coord, &[Coord])]) -> Result<Self, TopologyError> {
        if table.len() != POINT_COUNT {
            return Err(TopologyError::PointCount {
                expected: POINT_COUNT,
                found: table.len(),
            });
        }

        let mut index = FxHashMap::default();
        for (i, &(coord, _)) in table.iter().enumerate() {
            if index.insert(coord, PointId(i as u8)).is_some() {
                return Err(TopologyError::DuplicatePoint(coord));
            }
        }

        let mut nodes = Vec::with_capacity(table.len());
        for &(coord, neighbors) in table {
            let mut ids: SmallVec<[PointId; 4]> = SmallVec::new();
            for &neighbor in neighbors {
                if neighbor == coord {
                    return Err(TopologyError::SelfLoop(coord));
                }
                let id = *index
                    .get(&neighbor)
                    .ok_or(TopologyError::UnknownNeighbor { point: coord, neighbor })?;
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
            if !(2..=4).contains(&ids.len()) {
                return Err(TopologyError::Degree {
                    point: coord,
                    degree: ids.len(),
                });
            }
            nodes.push(Node { coord, neighbors: ids });
        }

        let topology = Self { nodes, index };
        topology.check_symmetry()?;
        Ok(topology)
    }

    fn check_symmetry(&self) -> Result<(), TopologyError> {
        for (i, node) in self.nodes.iter().enumerate() {
            let here = PointId(i as u8);
            for &there in &node.neighbors {
                if !self.nodes[there.index()].neighbors.contains(&here) {
                    return Err(TopologyError::Asymmetric {
                        from: node.coord,
                        to: self.nodes[there.index()].coord,
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of playable points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a validated topology; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up the arena index of a label. `None` if it is not playable.
    #[must_use]
    pub fn point(&self, coord: Coord) -> Option<PointId> {
        self.index.get(&coord).copied()
    }

    /// The label of a point.
    #[must_use]
    pub fn coord(&self, point: PointId) -> Coord {
        self.nodes[point.index()].coord
    }

    /// Points adjacent to `point`.
    #[must_use]
    pub fn neighbors(&self, point: PointId) -> &[PointId] {
        &self.nodes[point.index()].neighbors
    }

    /// Whether two points are joined by a line.
    #[must_use]
    pub fn are_adjacent(&self, a: PointId, b: PointId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Iterate over every point in arena order.
    pub fn points(&self) -> impl Iterator<Item = PointId> {
        (0..self.nodes.len() as u8).map(PointId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A1_CLAIMS_G1: &[Coord] = &[c('D', 1), c('A', 4), c('G', 1)];
    const A1_CLAIMS_B1: &[Coord] = &[c('D', 1), c('B', 1)];
    const A1_LOOPS: &[Coord] = &[c('A', 1), c('D', 1)];
    const A1_DEAD_END: &[Coord] = &[c('D', 1)];

    fn id(topology: &Topology, label: &str) -> PointId {
        topology.point(label.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_standard_has_24_points() {
        let topology = Topology::standard();
        assert_eq!(topology.len(), POINT_COUNT);
        assert!(!topology.is_empty());
    }

    #[test]
    fn test_invalid_labels_not_points() {
        let topology = Topology::standard();
        for label in ["B1", "C2", "D4", "F7", "H2", "A9", "A0"] {
            assert_eq!(topology.point(label.parse().unwrap()), None, "{label}");
        }
    }

    #[test]
    fn test_degrees() {
        let topology = Topology::standard();

        // Corners
        for label in ["A1", "G7", "B2", "F6", "C3", "E5"] {
            assert_eq!(topology.neighbors(id(topology, label)).len(), 2, "{label}");
        }
        // Outer and inner midpoints
        for label in ["D1", "A4", "D3", "C4", "E4", "D7"] {
            assert_eq!(topology.neighbors(id(topology, label)).len(), 3, "{label}");
        }
        // Middle midpoints
        for label in ["D2", "B4", "F4", "D6"] {
            assert_eq!(topology.neighbors(id(topology, label)).len(), 4, "{label}");
        }
    }

    #[test]
    fn test_edge_count() {
        let topology = Topology::standard();
        let degree_sum: usize = topology.points().map(|p| topology.neighbors(p).len()).sum();
        assert_eq!(degree_sum / 2, 32);
    }

    #[test]
    fn test_corners_not_joined() {
        let topology = Topology::standard();
        assert!(!topology.are_adjacent(id(topology, "A1"), id(topology, "G1")));
        assert!(!topology.are_adjacent(id(topology, "A1"), id(topology, "B2")));
        assert!(!topology.are_adjacent(id(topology, "C4"), id(topology, "E4")));
        assert!(topology.are_adjacent(id(topology, "D2"), id(topology, "D3")));
    }

    #[test]
    fn test_coord_round_trip() {
        let topology = Topology::standard();
        for point in topology.points() {
            assert_eq!(topology.point(topology.coord(point)), Some(point));
        }
    }

    #[test]
    fn test_rejects_asymmetric_table() {
        let mut table = STANDARD_TABLE;
        // A1 claims G1 as a neighbor, G1 does not reciprocate
        table[0] = (c('A', 1), A1_CLAIMS_G1);

        assert!(matches!(
            Topology::from_table(&table),
            Err(TopologyError::Asymmetric { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_neighbor() {
        let mut table = STANDARD_TABLE;
        table[0] = (c('A', 1), A1_CLAIMS_B1);

        assert!(matches!(
            Topology::from_table(&table),
            Err(TopologyError::UnknownNeighbor { .. })
        ));
    }

    #[test]
    fn test_rejects_wrong_size_and_duplicates() {
        assert!(matches!(
            Topology::from_table(&STANDARD_TABLE[..23]),
            Err(TopologyError::PointCount { expected: 24, found: 23 })
        ));

        let mut table = STANDARD_TABLE;
        table[1] = table[0];
        assert!(matches!(
            Topology::from_table(&table),
            Err(TopologyError::DuplicatePoint(_))
        ));
    }

    #[test]
    fn test_rejects_self_loop_and_degree() {
        let mut table = STANDARD_TABLE;
        table[0] = (c('A', 1), A1_LOOPS);
        assert!(matches!(
            Topology::from_table(&table),
            Err(TopologyError::SelfLoop(_))
        ));

        let mut table = STANDARD_TABLE;
        table[0] = (c('A', 1), A1_DEAD_END);
        assert!(matches!(
            Topology::from_table(&table),
            Err(TopologyError::Degree { degree: 1, .. })
        ));
    }
}
