//! Miscellaneous project utilities.

use crate::Dims;
use std::fmt::{self, Formatter, Write};
use std::iter::Iterator;

/// Format one character per cell into a labeled grid.
/// `cell_iter` must yield exactly `dims.cell_count()` items, row-major.
pub fn format_grid<T: Iterator<Item = char>>(
    dims: Dims,
    mut cell_iter: T,
    f: &mut Formatter,
) -> fmt::Result {
    // Row labels grow with the board; keep the columns lined up under the
    // letter header.
    let label_width = dims.height().to_string().len();
    write!(f, "{:width$} ", "", width = label_width)?;
    for x in 0..dims.width() {
        f.write_char((b'a' + x as u8) as char)?;
    }

    for y in 0..dims.height() {
        write!(f, "\n{:>width$} ", y + 1, width = label_width)?;
        for _ in 0..dims.width() {
            f.write_char(cell_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match cell_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
