//! Static positional evaluation.
//!
//! Every occupied cell contributes a weight that depends only on where it
//! sits. The weights are derived from the board dimensions so that a corner
//! is worth more than every non-corner rim cell put together, and a rim cell
//! more than every interior cell put together.

use itertools::Itertools;
use verso_reversi::{Board, Coord, Dims, Side};

/// The per-cell-class weight table for one board size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weights {
    dims: Dims,
    interior: i32,
    edge: i32,
    corner: i32,
}

impl Weights {
    /// Compute the weight table for `dims`.
    pub fn for_dims(dims: Dims) -> Self {
        let interior = 1;
        let edge = ((dims.width() - 1) * (dims.height() - 1)) as i32 * interior;
        let corner = edge * 2 * (dims.width() + dims.height() - 2) as i32;
        Weights {
            dims,
            interior,
            edge,
            corner,
        }
    }

    #[inline]
    pub fn interior(&self) -> i32 {
        self.interior
    }

    #[inline]
    pub fn edge(&self) -> i32 {
        self.edge
    }

    #[inline]
    pub fn corner(&self) -> i32 {
        self.corner
    }

    /// The weight of the cell at `at`.
    #[inline]
    pub fn at(&self, at: Coord) -> i32 {
        let on_x_rim = at.x == 0 || at.x == self.dims.width() - 1;
        let on_y_rim = at.y == 0 || at.y == self.dims.height() - 1;
        if on_x_rim && on_y_rim {
            self.corner
        } else if on_x_rim || on_y_rim {
            self.edge
        } else {
            self.interior
        }
    }

    /// Sum the weights of the cells `side` holds. An empty board scores zero.
    pub fn evaluate(&self, board: &Board, side: Side) -> i32 {
        assert_eq!(board.dims(), self.dims);
        (0..self.dims.height())
            .cartesian_product(0..self.dims.width())
            .map(|(y, x)| Coord::new(x, y))
            .filter(|&at| board.get(at) == Some(side))
            .map(|at| self.at(at))
            .sum()
    }

    /// How far `side` trails its opponent on static evaluation: positive when
    /// `side` is behind. This is the leaf score of the search.
    pub fn deficit(&self, board: &Board, side: Side) -> i32 {
        self.evaluate(board, !side) - self.evaluate(board, side)
    }
}
