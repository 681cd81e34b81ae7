//! Packed per-cell board storage.
//!
//! A [`CellTable`] packs one 2-bit field per cell into 32-bit words, in
//! row-major order. The field values are 0 for an empty cell, 1 for a White
//! disc and 2 for a Black disc; the fourth encoding is never produced. Fields
//! are 2-bit aligned, so no field ever straddles a word boundary.
//!
//! This module knows nothing about the rules of the game. [`crate::Board`]
//! layers the rules on top.

use crate::Side;

/// Bits per packed cell field.
const FIELD_BITS: usize = 2;

/// Bits per storage word.
const WORD_BITS: usize = 32;

/// Field mask, low-aligned.
const FIELD_MASK: u32 = 0b11;

/// Packed storage for a fixed number of cells, indexed in row-major order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CellTable {
    words: Vec<u32>,
}

impl CellTable {
    /// An all-empty table with room for `cells` cells.
    pub fn new(cells: usize) -> Self {
        let bits = cells * FIELD_BITS;
        let words = (bits + WORD_BITS - 1) / WORD_BITS;
        CellTable {
            words: vec![0; words],
        }
    }

    /// Read the cell at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Side> {
        let bit = index * FIELD_BITS;
        let field = (self.words[bit / WORD_BITS] >> (bit % WORD_BITS)) & FIELD_MASK;
        match field {
            0 => None,
            1 => Some(Side::White),
            2 => Some(Side::Black),
            _ => unreachable!("corrupt cell encoding"),
        }
    }

    /// Write the cell at `index`.
    #[inline]
    pub fn set(&mut self, index: usize, value: Option<Side>) {
        let field = match value {
            None => 0,
            Some(Side::White) => 1,
            Some(Side::Black) => 2,
        };
        let bit = index * FIELD_BITS;
        let word = &mut self.words[bit / WORD_BITS];
        *word = (*word & !(FIELD_MASK << (bit % WORD_BITS))) | (field << (bit % WORD_BITS));
    }
}
