//! Sides and moves.

use crate::Coord;
use derive_more::{Display, Error};
use std::fmt::{self, Formatter};
use std::str::FromStr;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

impl Default for Side {
    /// Gets the starting side (White moves first).
    fn default() -> Self {
        Side::White
    }
}

impl std::ops::Not for Side {
    type Output = Self;

    /// Gets the opposing side.
    fn not(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

/// Convert this [`Side`] into its disc glyph (`o` for White, `x` for Black).
impl fmt::Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => f.write_str("o"),
            Side::Black => f.write_str("x"),
        }
    }
}

/// An action in a game: place a disc somewhere, or pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Place(Coord),
    Pass,
}

impl From<Coord> for Move {
    fn from(at: Coord) -> Self {
        Move::Place(at)
    }
}

/// Why a move string failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseMoveError {
    Empty,
    BadColumn,
    BadRow,
}

/// Build a [`Move`] from string notation.
///
/// Placements name a column letter and a 1-based row number in either order
/// ("a4" and "4a" both mean column `a`, row 4); "pass" passes. Whether the
/// named cell exists on some board is not this parser's business.
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("pass") {
            return Ok(Move::Pass);
        }

        let first = s.chars().next().ok_or(ParseMoveError::Empty)?;
        let (col_str, row_str) = if first.is_ascii_digit() {
            let boundary = s
                .find(|c: char| !c.is_ascii_digit())
                .ok_or(ParseMoveError::BadColumn)?;
            let (digits, letters) = s.split_at(boundary);
            (letters, digits)
        } else {
            let boundary = s
                .find(|c: char| c.is_ascii_digit())
                .ok_or(ParseMoveError::BadRow)?;
            s.split_at(boundary)
        };

        let mut letters = col_str.chars();
        let col = letters
            .next()
            .ok_or(ParseMoveError::BadColumn)?
            .to_ascii_lowercase();
        if !col.is_ascii_lowercase() || letters.next() != None {
            return Err(ParseMoveError::BadColumn);
        }

        let row: usize = row_str.parse().or(Err(ParseMoveError::BadRow))?;
        if row == 0 {
            return Err(ParseMoveError::BadRow);
        }

        Ok(Move::Place(Coord::new(col as usize - 'a' as usize, row - 1)))
    }
}

/// Convert this [`Move`] into string notation ("a4"; "pass").
impl fmt::Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(at) => at.fmt(f),
            Move::Pass => f.write_str("pass"),
        }
    }
}
