//! Deterministic Dirac Dice.
//!
//! Players take turns rolling the die three times, moving their pawn around a
//! ten-space circular board and scoring the space they land on. The first to
//! reach the winning score ends the game at once.

use log::{debug, info};
use serde::{Serialize, Deserialize};

use crate::config::dice::{BOARD_SPACES, PLAYER_COUNT, ROLLS_PER_TURN, WINNING_SCORE};
use crate::dice::die::DeterministicDie;
use crate::dice::player::Player;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiceError {
    #[error("player {player} cannot start on space {space}, the board has spaces 1 to {}", BOARD_SPACES)]
    InvalidStart { player: u8, space: u32 },
}

/// Final state of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: u8,
    pub rolls: u32,
    pub players: Vec<Player>,
}

impl Outcome {
    pub fn losing_score(&self) -> u32 {
        self.players
            .iter()
            .filter(|p| p.id != self.winner)
            .map(|p| p.score)
            .min()
            .unwrap_or(0)
    }

    /// Losing player's score multiplied by the number of rolls.
    pub fn result(&self) -> u64 {
        u64::from(self.losing_score()) * u64::from(self.rolls)
    }
}

#[derive(Debug, Clone)]
pub struct DiceGame {
    players: [Player; PLAYER_COUNT],
    die: DeterministicDie,
    turn: usize,
}

impl DiceGame {
    pub fn new(player1_start: u32, player2_start: u32) -> Result<Self, DiceError> {
        let mut players = [Player::new(1, player1_start), Player::new(2, player2_start)];
        for player in &players {
            if !(1..=BOARD_SPACES).contains(&player.space) {
                return Err(DiceError::InvalidStart { player: player.id, space: player.space });
            }
        }

        Ok(Self {
            players,
            die: DeterministicDie::new(),
            turn: 0,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn die(&self) -> &DeterministicDie {
        &self.die
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Id of the player who reached the winning score, if any.
    pub fn winner(&self) -> Option<u8> {
        self.players.iter().find(|p| p.score >= WINNING_SCORE).map(|p| p.id)
    }

    /// Plays one turn for the active player and passes the turn on.
    pub fn next_turn(&mut self) {
        let roll = self.die.roll(ROLLS_PER_TURN);
        let player = &mut self.players[self.turn];
        player.advance(roll);

        if player.score >= WINNING_SCORE {
            debug!("[Dice] Player {} reached {} after {} rolls", player.id, player.score, self.die.rolls());
        }

        self.turn = (self.turn + 1) % self.players.len();
    }

    /// Plays turns until someone wins.
    pub fn play(mut self) -> Outcome {
        let winner = loop {
            if let Some(winner) = self.winner() {
                break winner;
            }
            self.next_turn();
        };

        let outcome = Outcome {
            winner,
            rolls: self.die.rolls(),
            players: self.players.to_vec(),
        };
        info!("[Dice] Player {winner} won, result = {}", outcome.result());
        outcome
    }
}

/// Plays a game with the deterministic die and returns the losing score
/// multiplied by the number of rolls.
pub fn play_dirac_dice_deterministic(player1_start: u32, player2_start: u32) -> Result<u64, DiceError> {
    Ok(DiceGame::new(player1_start, player2_start)?.play().result())
}
