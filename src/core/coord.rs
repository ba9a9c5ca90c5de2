//! Intersection labels.
//!
//! Every point on the board is named by a column symbol followed by a row
//! number, e.g. `A1` or `D7`. Columns run `A..=G` and rows `1..=7`, giving 49
//! labels of which only 24 are playable intersections.
//!
//! `Coord` deliberately represents *any* label, including ones that are not
//! playable (`B1`) or out of range (`H2`, `A9`). Deciding whether a label is
//! a real intersection is the topology's job, which reports such labels as
//! `Occupancy::Invalid`.
//!
//! ```
//! use rust_morris::core::Coord;
//!
//! let a1: Coord = "A1".parse().unwrap();
//! assert_eq!(a1, Coord::new('A', 1));
//! assert_eq!(a1.to_string(), "A1");
//! assert!(a1.in_range());
//!
//! // Out-of-range labels still parse; they are simply never playable.
//! let h2: Coord = "H2".parse().unwrap();
//! assert!(!h2.in_range());
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::rules::CoordParseError;

/// Column symbols in board order.
pub const COLUMNS: [char; 7] = ['A', 'B', 'C', 'D', 'E', 'F', 'G'];

/// Row numbers in board order.
pub const ROWS: [u8; 7] = [1, 2, 3, 4, 5, 6, 7];

/// An intersection label: column symbol plus row number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    column: char,
    row: u8,
}

impl Coord {
    /// Create a label. Lowercase column symbols are normalized.
    #[must_use]
    pub const fn new(column: char, row: u8) -> Self {
        Self {
            column: column.to_ascii_uppercase(),
            row,
        }
    }

    /// The column symbol.
    #[must_use]
    pub const fn column(self) -> char {
        self.column
    }

    /// The row number.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// 0-based column index, if the column symbol is one of `A..=G`.
    #[must_use]
    pub fn column_index(self) -> Option<usize> {
        COLUMNS.iter().position(|&c| c == self.column)
    }

    /// 0-based row index, if the row number is one of `1..=7`.
    #[must_use]
    pub fn row_index(self) -> Option<usize> {
        ROWS.iter().position(|&r| r == self.row)
    }

    /// Whether both symbols fall inside the 7x7 label grid.
    ///
    /// In range does not mean playable: `B1` is in range but not a point.
    #[must_use]
    pub fn in_range(self) -> bool {
        self.column_index().is_some() && self.row_index().is_some()
    }

    /// Whether two labels share a row.
    #[must_use]
    pub const fn same_row(self, other: Coord) -> bool {
        self.row == other.row
    }

    /// Whether two labels share a column.
    #[must_use]
    pub const fn same_column(self, other: Coord) -> bool {
        self.column == other.column
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let column = chars
            .next()
            .filter(char::is_ascii_alphabetic)
            .ok_or_else(|| CoordParseError::MissingColumn(s.to_string()))?;
        let row = chars
            .as_str()
            .parse::<u8>()
            .map_err(|_| CoordParseError::BadRow(s.to_string()))?;
        Ok(Self::new(column, row))
    }
}

impl TryFrom<&str> for Coord {
    type Error = CoordParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_label() {
        let coord: Coord = "D5".parse().unwrap();
        assert_eq!(coord.column(), 'D');
        assert_eq!(coord.row(), 5);
        assert_eq!(coord.column_index(), Some(3));
        assert_eq!(coord.row_index(), Some(4));
    }

    #[test]
    fn test_parse_lowercase_and_whitespace() {
        let coord: Coord = " g7 ".parse().unwrap();
        assert_eq!(coord, Coord::new('G', 7));
    }

    #[test]
    fn test_parse_out_of_range_symbols() {
        let h2: Coord = "H2".parse().unwrap();
        let a9: Coord = "A9".parse().unwrap();

        assert!(!h2.in_range());
        assert!(!a9.in_range());
        assert_eq!(h2.column_index(), None);
        assert_eq!(a9.row_index(), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("".parse::<Coord>(), Err(CoordParseError::MissingColumn(_))));
        assert!(matches!("7A".parse::<Coord>(), Err(CoordParseError::MissingColumn(_))));
        assert!(matches!("A".parse::<Coord>(), Err(CoordParseError::BadRow(_))));
        assert!(matches!("Ax".parse::<Coord>(), Err(CoordParseError::BadRow(_))));
    }

    #[test]
    fn test_display_round_trip() {
        for &column in &COLUMNS {
            for &row in &ROWS {
                let coord = Coord::new(column, row);
                assert_eq!(coord.to_string().parse::<Coord>().unwrap(), coord);
            }
        }
    }

    #[test]
    fn test_axis_helpers() {
        let a1 = Coord::new('A', 1);
        assert!(a1.same_row(Coord::new('G', 1)));
        assert!(a1.same_column(Coord::new('A', 7)));
        assert!(!a1.same_row(Coord::new('A', 4)));
    }

    #[test]
    fn test_serialization() {
        let coord = Coord::new('B', 6);
        let json = serde_json::to_string(&coord).unwrap();
        let deserialized: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(coord, deserialized);
    }
}
