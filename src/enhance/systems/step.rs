//! Enhancement step system.
//!
//! This module computes the next generation of a grid from the previous one.

use log::{debug, trace};

use crate::config::enhance::NEIGHBORHOOD_RADIUS;
use crate::enhance::grid::Grid;
use crate::enhance::table::EnhancementTable;
use crate::enhance::types::Position;

/// Packs the 3x3 neighborhood around (`row`, `col`) into a table index.
///
/// Cells are read in raster order from the top-left, the first cell becoming
/// the most significant of the 9 bits.
pub fn enhancement_index(grid: &Grid, row: i64, col: i64) -> usize {
    let mut index = 0;

    for plus_row in -NEIGHBORHOOD_RADIUS..=NEIGHBORHOOD_RADIUS {
        for plus_col in -NEIGHBORHOOD_RADIUS..=NEIGHBORHOOD_RADIUS {
            index <<= 1;
            if grid.get(Position::new(row + plus_row, col + plus_col)) {
                index |= 1;
            }
        }
    }

    index
}

/// Applies the enhancement table to `grid` once.
///
/// Every pixel of the tracked rectangle grown by one cell is recomputed from
/// `grid`, which is only read. Pixels just outside the old rectangle can
/// differ from the new background, so they become tracked too.
pub fn step(grid: &Grid, table: &EnhancementTable) -> Grid {
    let background_lit = table.next_background(grid.background_lit());

    let Some(bounds) = grid.bounds() else {
        trace!("[Enhance] Nothing tracked, background -> {background_lit}");
        return Grid::new(background_lit);
    };

    let region = bounds.expanded(NEIGHBORHOOD_RADIUS);
    let capacity = usize::try_from(region.height() * region.width()).unwrap_or(0);
    let mut next = Grid::with_capacity(background_lit, capacity);

    for pos in region.positions() {
        next.set(pos, table.lookup(enhancement_index(grid, pos.row, pos.col)));
    }

    debug!(
        "[Enhance] Stepped {}x{} region, background {} -> {}",
        region.height(),
        region.width(),
        grid.background_lit(),
        background_lit,
    );

    next
}
