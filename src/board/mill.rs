//! Mill detection.
//!
//! A mill is three same-side pieces on one line of the board. Lines are not
//! recovered from coordinate arithmetic: `C4` and `E4` share a row label but
//! no line joins them, and `D3`/`D5` share a column label across the empty
//! centre. Only edges present in the topology delimit a mill.
//!
//! From the piece under test, the walk grows a row line and a column line
//! separately. Each line starts with the origin and admits a neighbor of any
//! point already in it when the neighbor holds the same side, has not been
//! visited, and keeps the line's fixed coordinate (same row label for the row
//! line, same column label for the column line). A line that reaches exactly
//! three points is a mill.
//!
//! Every function here is a pure read of the board.

use smallvec::{smallvec, SmallVec};

use crate::core::{Coord, RemovalRule, Side};

use super::state::Board;
use super::topology::PointId;

/// Number of points on a mill line.
pub const MILL_LENGTH: usize = 3;

/// The two line directions through a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Points sharing a row number.
    Row,
    /// Points sharing a column symbol.
    Column,
}

impl Axis {
    /// Both axes.
    pub const ALL: [Axis; 2] = [Axis::Row, Axis::Column];

    fn holds(self, origin: Coord, other: Coord) -> bool {
        match self {
            Axis::Row => origin.same_row(other),
            Axis::Column => origin.same_column(other),
        }
    }
}

/// The connected run of same-side pieces through `point` along `axis`.
///
/// Always contains `point` itself when it holds a piece; empty otherwise.
#[must_use]
pub fn line_through(board: &Board, point: PointId, axis: Axis) -> SmallVec<[PointId; 4]> {
    let Some(side) = board.at(point) else {
        return SmallVec::new();
    };
    let topology = board.topology();
    let origin = topology.coord(point);

    let mut line: SmallVec<[PointId; 4]> = smallvec![point];
    let mut cursor = 0;
    while cursor < line.len() {
        let current = line[cursor];
        cursor += 1;
        for &next in topology.neighbors(current) {
            if board.at(next) == Some(side)
                && !line.contains(&next)
                && axis.holds(origin, topology.coord(next))
            {
                line.push(next);
            }
        }
    }
    line
}

/// Whether the piece on `point` is part of a completed mill.
///
/// False for an empty point.
#[must_use]
pub fn in_mill(board: &Board, point: PointId) -> bool {
    board.at(point).is_some()
        && Axis::ALL
            .iter()
            .any(|&axis| line_through(board, point, axis).len() == MILL_LENGTH)
}

/// Whether the piece at `coord` is part of a completed mill.
///
/// False for empty points and labels that are not playable.
#[must_use]
pub fn forms_mill(board: &Board, coord: Coord) -> bool {
    board
        .topology()
        .point(coord)
        .is_some_and(|point| in_mill(board, point))
}

/// Whether every piece `side` has on the board stands in a mill.
///
/// Vacuously true when `side` has no pieces on the board.
#[must_use]
pub fn all_in_mills(board: &Board, side: Side) -> bool {
    board.pieces(side).all(|point| in_mill(board, point))
}

/// Whether the piece on `point` is shielded from removal under `rule`.
#[must_use]
pub fn is_protected(board: &Board, point: PointId, rule: RemovalRule) -> bool {
    let Some(side) = board.at(point) else {
        return false;
    };
    if !in_mill(board, point) {
        return false;
    }
    match rule {
        RemovalRule::MillsAlwaysProtected => true,
        RemovalRule::MillsProtectedUnlessAllInMills => !all_in_mills(board, side),
    }
}

/// Pieces of `side` that may be removed under `rule`.
#[must_use]
pub fn removable_pieces(board: &Board, side: Side, rule: RemovalRule) -> Vec<PointId> {
    let pieces: Vec<PointId> = board.pieces(side).collect();
    let free: Vec<PointId> = pieces
        .iter()
        .copied()
        .filter(|&point| !in_mill(board, point))
        .collect();

    if !free.is_empty() {
        return free;
    }
    match rule {
        RemovalRule::MillsProtectedUnlessAllInMills => pieces,
        RemovalRule::MillsAlwaysProtected => Vec::new(),
    }
}
