//! Deterministic dice game.
//!
//! This module organizes the die, player and game loop logic.

pub mod die;
pub mod game;
pub mod player;

pub use die::*;
pub use game::*;
pub use player::*;
