//! Puzzle loading and the generation loop.
//!
//! A puzzle file holds the enhancement table on its first line, a blank line,
//! and then the initial grid. Any glyph other than `#` is read as unlit.

use std::fmt;
use std::fs;
use std::iter;
use std::path::Path;
use std::str::FromStr;

use log::{info, warn};

use crate::config::enhance::{DARK_GLYPH, LIT_GLYPH};
use crate::enhance::error::LoadError;
use crate::enhance::grid::Grid;
use crate::enhance::table::EnhancementTable;

/// An enhancement table paired with the grid it is applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    table: EnhancementTable,
    grid: Grid,
}

impl Puzzle {
    pub fn new(table: EnhancementTable, grid: Grid) -> Self {
        Self { table, grid }
    }

    /// Loads a puzzle from the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let puzzle: Puzzle = text.parse()?;
        info!(
            "[Puzzle] Loaded {} with {} tracked pixels",
            path.display(),
            puzzle.grid.tracked_len(),
        );
        Ok(puzzle)
    }

    pub fn table(&self) -> &EnhancementTable {
        &self.table
    }

    pub fn initial_grid(&self) -> &Grid {
        &self.grid
    }

    /// The initial grid followed by every later generation.
    pub fn generations(&self) -> impl Iterator<Item = Grid> + '_ {
        iter::successors(Some(self.grid.clone()), move |grid| Some(grid.step(&self.table)))
    }

    /// Applies the enhancement table `steps` times and returns the final grid.
    pub fn run(&self, steps: usize) -> Grid {
        let mut grid = self.grid.clone();
        for _ in 0..steps {
            grid = grid.step(&self.table);
        }

        info!(
            "[Puzzle] Ran {steps} steps: {} tracked pixels, background lit = {}",
            grid.tracked_len(),
            grid.background_lit(),
        );
        grid
    }
}

impl FromStr for Puzzle {
    type Err = LoadError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut lines = text.lines();

        let table: EnhancementTable = lines.next().ok_or(LoadError::MissingTable)?.parse()?;

        let separator = lines.next().ok_or(LoadError::MissingSeparator)?;
        if !separator.trim().is_empty() {
            return Err(LoadError::NonBlankSeparator(separator.to_string()));
        }

        let rows: Vec<&str> = lines.collect();
        check_rows(&rows);

        Ok(Self::new(table, Grid::from_rows(rows)))
    }
}

/// Warns about input the permissive parser accepts but that is probably a mistake.
fn check_rows(rows: &[&str]) {
    let Some(width) = rows.first().map(|row| row.chars().count()) else {
        warn!("[Puzzle] Grid has no rows");
        return;
    };

    for (row, line) in rows.iter().enumerate() {
        if line.chars().count() != width {
            warn!("[Puzzle] Row {row} has {} pixels, expected {width}", line.chars().count());
        }
        if let Some(c) = line.chars().find(|&c| c != LIT_GLYPH && c != DARK_GLYPH) {
            warn!("[Puzzle] Row {row} has unrecognised pixel {c:?}, reading it as unlit");
        }
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n{}", self.table, self.grid)
    }
}
