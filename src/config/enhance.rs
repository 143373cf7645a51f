/// Image enhancement configuration constants.
///
/// This module defines the lookup table size, the neighborhood shape and the
/// glyphs used by the input format.
pub const TABLE_LEN: usize = 1 << NEIGHBORHOOD_CELLS;

/// Number of cells in a neighborhood (3x3).
pub const NEIGHBORHOOD_CELLS: usize = 9;

/// Distance from the center cell to the edge of its neighborhood.
pub const NEIGHBORHOOD_RADIUS: i64 = 1;

/// Table index of an all-dark neighborhood.
pub const ALL_DARK_INDEX: usize = 0;

/// Table index of an all-lit neighborhood.
pub const ALL_LIT_INDEX: usize = TABLE_LEN - 1;

pub const LIT_GLYPH: char = '#';
pub const DARK_GLYPH: char = '.';

/// Step counts reported by the driver when none are given.
pub const DEFAULT_STEPS: [usize; 2] = [2, 50];

/// Puzzle file loaded by the driver when no path is given.
pub const DEFAULT_INPUT: &str = "input/sample.txt";
