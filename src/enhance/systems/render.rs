//! Text rendering of grids for diagnostics.

use std::fmt;

use crate::enhance::grid::Grid;
use crate::enhance::types::{Position, to_glyph};

/// Writes the tracked rectangle row by row, then a trailer with the background.
pub fn render_grid(grid: &Grid, f: &mut impl fmt::Write) -> fmt::Result {
    if let Some(bounds) = grid.bounds() {
        for row in bounds.min.row..=bounds.max.row {
            for col in bounds.min.col..=bounds.max.col {
                f.write_char(to_glyph(grid.get(Position::new(row, col))))?;
            }
            f.write_char('\n')?;
        }
    }
    write!(f, "background: {}", to_glyph(grid.background_lit()))
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_grid(self, f)
    }
}
