//! Integer grid coordinates.
//!
//! `Cell` is signed so that stepping off the edge of the map produces a
//! coordinate the grid can classify as out of bounds, instead of wrapping.

use std::fmt;

use crate::Direction;

/// A `(row, col)` grid coordinate.  Rows grow southwards, columns eastwards.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell one step in `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Cell {
        let (dr, dc) = dir.delta();
        Cell::new(self.row + dr, self.col + dc)
    }

    /// All four neighbours paired with the heading that reaches them, in
    /// N, E, S, W order.
    pub fn neighbors(self) -> [(Direction, Cell); 4] {
        Direction::ALL.map(|d| (d, self.step(d)))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
