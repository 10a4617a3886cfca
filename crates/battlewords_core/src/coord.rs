//! Grid coordinates and word directions.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of every Battlewords grid.
pub const GRID_SIZE: usize = 12;

/// Smallest grid that fits the longest word.
pub const MIN_GRID_SIZE: usize = crate::word::MAX_WORD_LEN;

/// Largest grid the placement engine will search.
pub const MAX_GRID_SIZE: usize = 64;

/// Returns true if `size` lies within [`MIN_GRID_SIZE`]..=[`MAX_GRID_SIZE`].
pub fn is_valid_grid_size(size: usize) -> bool {
    (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size)
}

/// A cell on the grid, 0-indexed as (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index (top to bottom).
    pub row: usize,
    /// Column index (left to right).
    pub col: usize,
}

impl Coord {
    /// Creates a new coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if the coordinate lies inside a `size` x `size` grid.
    pub fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Returns the coordinate `steps` cells further along `direction`.
    pub fn step(self, direction: Direction, steps: usize) -> Self {
        match direction {
            Direction::Horizontal => Self::new(self.row, self.col.saturating_add(steps)),
            Direction::Vertical => Self::new(self.row.saturating_add(steps), self.col),
        }
    }

    /// Row-major index into a `size` x `size` grid.
    pub(crate) fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction a word runs in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
}

impl Direction {
    /// Both directions in candidate enumeration order.
    pub const ALL: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    /// Valid start coordinates for a word of `length` in a `size` grid, row-major.
    #[instrument]
    pub fn starts(self, length: usize, size: usize) -> Vec<Coord> {
        if length == 0 || length > size {
            return Vec::new();
        }
        let (rows, cols) = match self {
            Direction::Horizontal => (size, size - length + 1),
            Direction::Vertical => (size - length + 1, size),
        };
        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Coord::new(row, col)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert!(Coord::new(0, 0).in_bounds(GRID_SIZE));
        assert!(Coord::new(11, 11).in_bounds(GRID_SIZE));
        assert!(!Coord::new(12, 0).in_bounds(GRID_SIZE));
        assert!(!Coord::new(0, 12).in_bounds(GRID_SIZE));
    }

    #[test]
    fn test_step() {
        let c = Coord::new(3, 4);
        assert_eq!(c.step(Direction::Horizontal, 2), Coord::new(3, 6));
        assert_eq!(c.step(Direction::Vertical, 2), Coord::new(5, 4));
    }

    #[test]
    fn test_start_counts() {
        // 12 rows x 7 columns of starts for a 6-letter word.
        assert_eq!(Direction::Horizontal.starts(6, 12).len(), 84);
        assert_eq!(Direction::Vertical.starts(4, 12).len(), 9 * 12);
        assert!(Direction::Vertical.starts(13, 12).is_empty());
    }

    #[test]
    fn test_starts_row_major() {
        let starts = Direction::Horizontal.starts(4, 5);
        assert_eq!(starts[0], Coord::new(0, 0));
        assert_eq!(starts[1], Coord::new(0, 1));
        assert_eq!(starts[2], Coord::new(1, 0));
    }

    #[test]
    fn test_grid_size_bounds() {
        assert!(is_valid_grid_size(GRID_SIZE));
        assert!(is_valid_grid_size(6));
        assert!(!is_valid_grid_size(5));
        assert!(is_valid_grid_size(64));
        assert!(!is_valid_grid_size(65));
    }
}
