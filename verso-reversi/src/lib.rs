//! `verso-reversi` is a Reversi rules library for rectangular boards of any size.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`cells`] contains the packed per-cell storage underlying every board.
//!    It knows nothing about the rules of the game.
//!  - [`Board`] implements the game itself: the starting position, move
//!    legality and flip resolution on top of [`cells`].
//!
//! Boards are plain values. Applying a move yields a new board and leaves the
//! source untouched, so callers can keep, compare or discard positions freely.

pub mod cells;
pub mod test_utils;

mod board;
mod coord;
mod game;
mod utils;

pub use board::*;
pub use coord::*;
pub use game::*;

/// Board dimensions, fixed for the lifetime of every board built from them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Dims {
    width: usize,
    height: usize,
}

impl Dims {
    /// Make dimensions for a `width` x `height` board.
    ///
    /// # Panics
    /// If either side is below 2: the starting position needs a full 2x2
    /// center block.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width >= 2 && height >= 2, "board must be at least 2x2");
        Dims { width, height }
    }

    /// The number of columns.
    #[inline]
    pub fn width(self) -> usize {
        self.width
    }

    /// The number of rows.
    #[inline]
    pub fn height(self) -> usize {
        self.height
    }

    /// The number of cells on a board with these dimensions.
    #[inline]
    pub fn cell_count(self) -> usize {
        self.width * self.height
    }

    /// Whether `coord` lies on the board.
    #[inline]
    pub fn contains(self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// The row-major cell index of `coord`.
    #[inline]
    pub fn index_of(self, coord: Coord) -> usize {
        coord.y * self.width + coord.x
    }
}

/// The 10x10 grid the interactive game ships with.
impl Default for Dims {
    fn default() -> Self {
        Dims::new(10, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dims_index_is_row_major() {
        let dims = Dims::new(5, 3);
        assert_eq!(dims.index_of(Coord::new(0, 0)), 0);
        assert_eq!(dims.index_of(Coord::new(4, 0)), 4);
        assert_eq!(dims.index_of(Coord::new(0, 1)), 5);
        assert_eq!(dims.index_of(Coord::new(4, 2)), 14);
        assert_eq!(dims.cell_count(), 15);
    }

    #[test]
    fn dims_contains_is_exclusive_of_edges() {
        let dims = Dims::new(4, 2);
        assert!(dims.contains(Coord::new(3, 1)));
        assert!(!dims.contains(Coord::new(4, 1)));
        assert!(!dims.contains(Coord::new(3, 2)));
    }

    #[test]
    fn default_dims_are_ten_by_ten() {
        assert_eq!(Dims::default(), Dims::new(10, 10));
    }

    #[test]
    #[should_panic]
    fn dims_reject_degenerate_boards() {
        Dims::new(1, 8);
    }
}
