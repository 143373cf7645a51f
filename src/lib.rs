//! Image enhancement of an infinite binary grid, plus a deterministic dice game.
//!
//! [`enhance`] holds the grid simulator: a sparse set of tracked pixels and a
//! background value standing in for the rest of the plane. [`dice`] plays the
//! two-player race with a deterministic d100.

pub mod config;
pub mod dice;
pub mod enhance;

mod tests;

pub use dice::play_dirac_dice_deterministic;
pub use enhance::{EnhancementTable, Grid, Puzzle};
