use serde::{Serialize, Deserialize};

use crate::config::dice::BOARD_SPACES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: u8,
    pub space: u32,
    pub score: u32,
}

impl Player {
    pub fn new(id: u8, space: u32) -> Self {
        Self { id, space, score: 0 }
    }

    /// Moves the pawn `roll` spaces around the circular board and scores the landing space.
    pub fn advance(&mut self, roll: u32) {
        self.space = (self.space - 1 + roll) % BOARD_SPACES + 1;
        self.score += self.space;
    }
}
