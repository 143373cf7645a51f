//! Image enhancement on an infinite grid.
//!
//! A [`Grid`] stores the pixels near the image explicitly and represents the
//! rest of the plane with one background value. Each step builds a new grid
//! from the previous one with an [`EnhancementTable`].

pub mod error;
pub mod grid;
pub mod puzzle;
pub mod systems;
pub mod table;
pub mod types;

pub use error::{GridError, LoadError};
pub use grid::Grid;
pub use puzzle::Puzzle;
pub use systems::{enhancement_index, step};
pub use table::EnhancementTable;
pub use types::{Bounds, Position};
