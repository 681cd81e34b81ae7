//! Board state, move legality and flip resolution.

use crate::cells::CellTable;
use crate::{utils, Coord, Dims, Side};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter};
use std::str::FromStr;

/// Offsets of the eight compass directions a capture line can run along.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A complete board position.
///
/// Boards are value types: applying a move produces a new board and leaves
/// the source untouched. The stored stone count always equals the number of
/// occupied cells.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    dims: Dims,
    cells: CellTable,
    stone_count: u32,
}

impl Board {
    /// An all-empty board.
    pub fn empty(dims: Dims) -> Self {
        Board {
            dims,
            cells: CellTable::new(dims.cell_count()),
            stone_count: 0,
        }
    }

    /// The four-disc starting position: White on the main diagonal of the
    /// center 2x2 block, Black on the anti-diagonal.
    pub fn standard(dims: Dims) -> Self {
        let (cx, cy) = (dims.width() / 2, dims.height() / 2);
        let mut board = Board::empty(dims);
        board.set(Coord::new(cx - 1, cy - 1), Some(Side::White));
        board.set(Coord::new(cx, cy), Some(Side::White));
        board.set(Coord::new(cx, cy - 1), Some(Side::Black));
        board.set(Coord::new(cx - 1, cy), Some(Side::Black));
        board
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// The number of occupied cells.
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.stone_count
    }

    /// Whether every cell is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count as usize == self.dims.cell_count()
    }

    /// Read one cell.
    #[inline]
    pub fn get(&self, at: Coord) -> Option<Side> {
        self.cells.get(self.dims.index_of(at))
    }

    /// Write one cell, keeping the stone count in step.
    pub fn set(&mut self, at: Coord, value: Option<Side>) {
        let index = self.dims.index_of(at);
        let previous = self.cells.get(index);
        self.cells.set(index, value);
        match (previous, value) {
            (None, Some(_)) => self.stone_count += 1,
            (Some(_), None) => self.stone_count -= 1,
            _ => {}
        }
    }

    /// Count the cells held by `side`.
    pub fn count(&self, side: Side) -> u32 {
        (0..self.dims.cell_count())
            .filter(|&index| self.cells.get(index) == Some(side))
            .count() as u32
    }

    /// Try to place a `side` disc at `at`.
    ///
    /// When the move is legal, returns the resulting board: along each of the
    /// eight directions, a maximal run of opposing discs bounded on the far
    /// end by a `side` disc is flipped, and the placed disc fills `at`.
    /// Returns `None` when the cell is off the board or occupied, or when no
    /// direction captures anything.
    pub fn try_move(&self, at: Coord, side: Side) -> Option<Board> {
        if !self.dims.contains(at) || self.get(at).is_some() {
            return None;
        }

        let mut next: Option<Board> = None;
        for &(dx, dy) in DIRECTIONS.iter() {
            let run = self.run_length(at, dx, dy, side);
            if run == 0 {
                continue;
            }
            let board = next.get_or_insert_with(|| self.clone());
            let (mut x, mut y) = (at.x as isize, at.y as isize);
            for _ in 0..run {
                x += dx;
                y += dy;
                board.set(Coord::new(x as usize, y as usize), Some(side));
            }
        }

        let mut board = next?;
        board.set(at, Some(side));
        Some(board)
    }

    /// The number of discs `side` would capture from `at` along `(dx, dy)`:
    /// the length of the opposing run when its far end is a `side` disc, and
    /// zero when the run hits an empty cell or the board edge instead.
    fn run_length(&self, at: Coord, dx: isize, dy: isize, side: Side) -> usize {
        let mut run = 0;
        let mut cell = at;
        loop {
            cell = match cell.offset(dx, dy, self.dims) {
                Some(next) => next,
                None => return 0,
            };
            match self.get(cell) {
                Some(s) if s != side => run += 1,
                Some(_) => return run,
                None => return 0,
            }
        }
    }

    /// Every legal move for `side` together with its fully resolved result
    /// board, in row-major scan order.
    pub fn legal_moves(&self, side: Side) -> Vec<(Coord, Board)> {
        let mut moves = Vec::new();
        for y in 0..self.dims.height() {
            for x in 0..self.dims.width() {
                let at = Coord::new(x, y);
                if let Some(board) = self.try_move(at, side) {
                    moves.push((at, board));
                }
            }
        }
        moves
    }
}

/// Render the board as a grid of `.`/`o`/`x` glyphs with coordinate labels.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let glyphs = (0..self.dims.cell_count()).map(|index| match self.cells.get(index) {
            None => '.',
            Some(Side::White) => 'o',
            Some(Side::Black) => 'x',
        });
        utils::format_grid(self.dims, glyphs, f)
    }
}

/// Why a board string failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    NoRows,
    RaggedRows,
    TooSmall,
    BadCell,
}

/// Build a board from whitespace-separated rows of `.`/`o`/`x` glyphs, with
/// the dimensions inferred from the grid. Handy for tests and position dumps;
/// no legality checking beyond the shape of the grid.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.split_whitespace().collect();
        if rows.is_empty() {
            return Err(ParseBoardError::NoRows);
        }
        let width = rows[0].chars().count();
        if rows.iter().any(|row| row.chars().count() != width) {
            return Err(ParseBoardError::RaggedRows);
        }
        if width < 2 || rows.len() < 2 {
            return Err(ParseBoardError::TooSmall);
        }

        let mut board = Board::empty(Dims::new(width, rows.len()));
        for (y, row) in rows.iter().enumerate() {
            for (x, glyph) in row.chars().enumerate() {
                let value = match glyph {
                    '.' => None,
                    'o' => Some(Side::White),
                    'x' => Some(Side::Black),
                    _ => return Err(ParseBoardError::BadCell),
                };
                board.set(Coord::new(x, y), value);
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(moves: &[(Coord, Board)]) -> Vec<Coord> {
        moves.iter().map(|(at, _)| *at).collect()
    }

    #[test]
    fn standard_start_on_default_dims() {
        let board = Board::standard(Dims::default());
        assert_eq!(board.stone_count(), 4);
        assert_eq!(board.get(Coord::new(4, 4)), Some(Side::White));
        assert_eq!(board.get(Coord::new(5, 5)), Some(Side::White));
        assert_eq!(board.get(Coord::new(5, 4)), Some(Side::Black));
        assert_eq!(board.get(Coord::new(4, 5)), Some(Side::Black));
        assert_eq!(board.get(Coord::new(0, 0)), None);
        assert_eq!(board.count(Side::White), 2);
        assert_eq!(board.count(Side::Black), 2);
    }

    #[test]
    fn standard_start_on_odd_dims() {
        // Center block rounds toward the lower-right on odd sides.
        let board = Board::standard(Dims::new(5, 7));
        assert_eq!(board.get(Coord::new(1, 2)), Some(Side::White));
        assert_eq!(board.get(Coord::new(2, 3)), Some(Side::White));
        assert_eq!(board.get(Coord::new(2, 2)), Some(Side::Black));
        assert_eq!(board.get(Coord::new(1, 3)), Some(Side::Black));
    }

    #[test]
    fn set_keeps_stone_count_in_step() {
        let mut board = Board::empty(Dims::new(4, 4));
        board.set(Coord::new(1, 1), Some(Side::White));
        board.set(Coord::new(2, 1), Some(Side::Black));
        assert_eq!(board.stone_count(), 2);

        // Flipping in place must not change the count.
        board.set(Coord::new(2, 1), Some(Side::White));
        assert_eq!(board.stone_count(), 2);

        board.set(Coord::new(1, 1), None);
        assert_eq!(board.stone_count(), 1);
        board.set(Coord::new(1, 1), None);
        assert_eq!(board.stone_count(), 1);
    }

    #[test]
    fn opening_moves_on_a_small_board() {
        // On a 4x4 start, White's opening placements are exactly the four
        // cells diagonally adjacent to its own discs, one capture each.
        let board = Board::standard(Dims::new(4, 4));
        let moves = board.legal_moves(Side::White);
        assert_eq!(
            coords(&moves),
            vec![
                Coord::new(2, 0),
                Coord::new(3, 1),
                Coord::new(0, 2),
                Coord::new(1, 3),
            ]
        );
        for (_, next) in &moves {
            assert_eq!(next.stone_count(), 5);
            assert_eq!(next.count(Side::White), 4);
            assert_eq!(next.count(Side::Black), 1);
        }
    }

    #[test]
    fn resolved_move_flips_the_bounded_run() {
        let board = Board::standard(Dims::new(4, 4));
        let next = board.try_move(Coord::new(2, 0), Side::White).unwrap();
        assert_eq!(next.get(Coord::new(2, 0)), Some(Side::White));
        // The captured disc sat between the placement and (2, 2).
        assert_eq!(next.get(Coord::new(2, 1)), Some(Side::White));
        assert_eq!(next.get(Coord::new(1, 2)), Some(Side::Black));
        // The source board is untouched.
        assert_eq!(board.get(Coord::new(2, 1)), Some(Side::Black));
        assert_eq!(board.stone_count(), 4);
    }

    #[test]
    fn corner_move_captures_along_a_row() {
        let board: Board = "
            .xxxxo.x
            ........
            ........"
            .parse()
            .unwrap();
        let next = board.try_move(Coord::new(0, 0), Side::White).unwrap();
        for x in 0..=5 {
            assert_eq!(next.get(Coord::new(x, 0)), Some(Side::White));
        }
        // Beyond the bounding disc nothing changes.
        assert_eq!(next.get(Coord::new(6, 0)), None);
        assert_eq!(next.get(Coord::new(7, 0)), Some(Side::Black));
        assert_eq!(next.stone_count(), board.stone_count() + 1);
    }

    #[test]
    fn capture_may_span_multiple_directions() {
        let board: Board = "
            ..o..
            ..x..
            ox.xo
            ..xx.
            ....o"
            .parse()
            .unwrap();
        let next = board.try_move(Coord::new(2, 2), Side::White).unwrap();
        // Four directions are bounded and flip; the run straight down ends
        // on an empty cell and must survive.
        assert_eq!(next.count(Side::White), 9);
        assert_eq!(next.count(Side::Black), 1);
        assert_eq!(next.get(Coord::new(2, 3)), Some(Side::Black));
    }

    #[test]
    fn occupied_cell_is_not_playable() {
        let board = Board::standard(Dims::new(4, 4));
        assert!(board.try_move(Coord::new(1, 1), Side::White).is_none());
        assert!(board.try_move(Coord::new(2, 1), Side::White).is_none());
    }

    #[test]
    fn unbounded_run_captures_nothing() {
        // A run that hits an empty cell, and one that runs off the edge.
        let hole: Board = ".xx.\n....".parse().unwrap();
        assert!(hole.try_move(Coord::new(3, 0), Side::White).is_none());

        let edge: Board = "xx..\n....".parse().unwrap();
        assert!(edge.try_move(Coord::new(2, 0), Side::White).is_none());
    }

    #[test]
    fn adjacent_own_disc_captures_nothing() {
        let board: Board = "o...\n....".parse().unwrap();
        assert!(board.try_move(Coord::new(1, 0), Side::White).is_none());
    }

    #[test]
    fn off_board_placement_is_rejected() {
        let board = Board::standard(Dims::new(4, 4));
        assert!(board.try_move(Coord::new(4, 0), Side::White).is_none());
        assert!(board.try_move(Coord::new(0, 9), Side::White).is_none());
    }

    #[test]
    fn legal_moves_come_out_in_row_major_order() {
        let board = Board::standard(Dims::default());
        let moves = board.legal_moves(Side::White);
        let indexes: Vec<usize> = moves
            .iter()
            .map(|(at, _)| board.dims().index_of(*at))
            .collect();
        let mut sorted = indexes.clone();
        sorted.sort_unstable();
        assert_eq!(indexes, sorted);
    }

    #[test]
    fn full_board_reports_full() {
        let board: Board = "ox\nxo".parse().unwrap();
        assert!(board.is_full());
        assert!(board.legal_moves(Side::White).is_empty());
        assert!(board.legal_moves(Side::Black).is_empty());
    }

    #[test]
    fn display_then_parse_round_trips() {
        let board = Board::standard(Dims::new(6, 4));
        let rendered = board.to_string();
        // Strip the coordinate labels: keep glyph columns only.
        let rows: Vec<String> = rendered
            .lines()
            .skip(1)
            .map(|line| line.split_whitespace().last().unwrap().to_string())
            .collect();
        let reparsed: Board = rows.join("\n").parse().unwrap();
        assert_eq!(reparsed, board);
    }

    #[test]
    fn parse_rejects_bad_grids() {
        assert_eq!("".parse::<Board>(), Err(ParseBoardError::NoRows));
        assert_eq!("ox\nx".parse::<Board>(), Err(ParseBoardError::RaggedRows));
        assert_eq!("o\nx".parse::<Board>(), Err(ParseBoardError::TooSmall));
        assert_eq!("ox\nx?".parse::<Board>(), Err(ParseBoardError::BadCell));
    }
}
