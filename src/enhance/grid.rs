//! Infinite grid of pixels.
//!
//! Only pixels that may disagree with the background are stored; every other
//! position of the plane shares the single background value.

use std::collections::HashMap;

use crate::enhance::error::GridError;
use crate::enhance::systems::step;
use crate::enhance::table::EnhancementTable;
use crate::enhance::types::{Bounds, Position, from_glyph};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    pixels: HashMap<Position, bool>,
    background_lit: bool,
}

impl Grid {
    /// Creates a grid with no tracked pixels.
    pub fn new(background_lit: bool) -> Self {
        Self {
            pixels: HashMap::new(),
            background_lit,
        }
    }

    /// Builds a grid from rows of glyphs on an unlit background.
    /// Row `r`, column `c` lands on `Position { row: r, col: c }`.
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grid = Self::new(false);
        for (row, line) in rows.into_iter().enumerate() {
            for (col, c) in line.as_ref().chars().enumerate() {
                grid.set(Position::new(row as i64, col as i64), from_glyph(c));
            }
        }
        grid
    }

    pub(crate) fn set(&mut self, pos: Position, lit: bool) {
        self.pixels.insert(pos, lit);
    }

    /// Whether the pixel at `pos` is lit, falling back to the background.
    pub fn get(&self, pos: Position) -> bool {
        self.pixels.get(&pos).copied().unwrap_or(self.background_lit)
    }

    pub fn background_lit(&self) -> bool {
        self.background_lit
    }

    /// Whether `pos` has an explicitly stored value.
    pub fn is_tracked(&self, pos: Position) -> bool {
        self.pixels.contains_key(&pos)
    }

    /// Number of explicitly stored pixels, lit or not.
    pub fn tracked_len(&self) -> usize {
        self.pixels.len()
    }

    /// Rectangle covering every tracked pixel, or `None` if nothing is tracked.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut positions = self.pixels.keys().copied();
        let mut bounds = Bounds::around(positions.next()?);
        for pos in positions {
            bounds.include(pos);
        }
        Some(bounds)
    }

    /// Number of lit pixels.
    ///
    /// Fails when the background is lit, since the untracked plane then holds
    /// infinitely many lit pixels.
    pub fn count_lit(&self) -> Result<usize, GridError> {
        if self.background_lit {
            return Err(GridError::InfiniteLit);
        }
        Ok(self.pixels.values().filter(|&&lit| lit).count())
    }

    /// Applies the enhancement table once, returning the next generation.
    pub fn step(&self, table: &EnhancementTable) -> Grid {
        step::step(self, table)
    }

    pub(crate) fn with_capacity(background_lit: bool, capacity: usize) -> Self {
        Self {
            pixels: HashMap::with_capacity(capacity),
            background_lit,
        }
    }
}
