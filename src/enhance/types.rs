use serde::{Serialize, Deserialize};

use crate::config::enhance::{DARK_GLYPH, LIT_GLYPH};

/// A row and column on the infinite grid. Either may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i64,
    pub col: i64,
}

impl Position {
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

/// Inclusive rectangle covering every tracked position of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

impl Bounds {
    /// Smallest rectangle containing a single position.
    pub fn around(pos: Position) -> Self {
        Self { min: pos, max: pos }
    }

    /// Grows the rectangle so it contains `pos`.
    pub fn include(&mut self, pos: Position) {
        self.min.row = self.min.row.min(pos.row);
        self.min.col = self.min.col.min(pos.col);
        self.max.row = self.max.row.max(pos.row);
        self.max.col = self.max.col.max(pos.col);
    }

    /// Returns this rectangle with `by` extra cells on every side.
    pub fn expanded(&self, by: i64) -> Self {
        Self {
            min: Position::new(self.min.row - by, self.min.col - by),
            max: Position::new(self.max.row + by, self.max.col + by),
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        (self.min.row..=self.max.row).contains(&pos.row)
            && (self.min.col..=self.max.col).contains(&pos.col)
    }

    pub fn height(&self) -> u64 {
        self.min.row.abs_diff(self.max.row) + 1
    }

    pub fn width(&self) -> u64 {
        self.min.col.abs_diff(self.max.col) + 1
    }

    /// Every position in the rectangle, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (self.min.row..=self.max.row)
            .flat_map(move |row| (self.min.col..=self.max.col).map(move |col| Position::new(row, col)))
    }
}

/// Converts a pixel to the glyph used by the input format.
pub fn to_glyph(lit: bool) -> char {
    if lit { LIT_GLYPH } else { DARK_GLYPH }
}

/// Converts a glyph to a pixel. Anything other than the lit glyph is unlit.
pub fn from_glyph(c: char) -> bool {
    c == LIT_GLYPH
}
