//! Code for working with cell coordinates.

use crate::Dims;
use std::fmt::{self, Formatter, Write};

/// A cell position. `x` counts columns from the left edge, `y` counts rows
/// from the top edge, both from zero.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    #[inline]
    pub fn new(x: usize, y: usize) -> Self {
        Coord { x, y }
    }

    /// The cell one step along `(dx, dy)` from here, or `None` if that step
    /// leaves a board of dimensions `dims`.
    #[inline]
    pub fn offset(self, dx: isize, dy: isize, dims: Dims) -> Option<Coord> {
        let x = self.x as isize + dx;
        let y = self.y as isize + dy;
        if x < 0 || y < 0 {
            return None;
        }
        let stepped = Coord::new(x as usize, y as usize);
        if dims.contains(stepped) {
            Some(stepped)
        } else {
            None
        }
    }
}

/// Convert this [`Coord`] into string notation: column letter, then 1-based
/// row ("a4").
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char((b'a' + self.x as u8) as char)?;
        write!(f, "{}", self.y + 1)
    }
}
