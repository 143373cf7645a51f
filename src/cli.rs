use std::error::Error;
use std::path::PathBuf;

use serde::Serialize;

use infinite_grid::config::enhance::{DEFAULT_INPUT, DEFAULT_STEPS};
use infinite_grid::dice::{DiceGame, Player};
use infinite_grid::enhance::{Bounds, Puzzle};

/// Infinite grid image enhancement and deterministic dice.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Run the enhancement algorithm and print one JSON report per step count.
    Enhance {
        /// Puzzle file: enhancement line, blank line, grid.
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Number of steps to run. May be repeated.
        #[arg(short, long = "steps")]
        steps: Vec<usize>,

        /// Also print each final grid.
        #[arg(long)]
        show: bool,
    },
    /// Play Dirac Dice with the deterministic d100 and print a JSON report.
    Dice {
        /// Starting space of player 1 (1 to 10).
        player1: u32,
        /// Starting space of player 2 (1 to 10).
        player2: u32,
    },
}

#[derive(Debug, Serialize)]
struct EnhanceReport {
    steps: usize,
    /// `None` when the background is lit.
    lit: Option<usize>,
    background_lit: bool,
    bounds: Option<Bounds>,
}

#[derive(Debug, Serialize)]
struct DiceReport {
    result: u64,
    rolls: u32,
    winner: u8,
    players: Vec<Player>,
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<(), Box<dyn Error>> {
    match subcommand {
        Subcommand::Enhance { input, steps, show } => {
            let puzzle = Puzzle::load(&input)?;
            let steps = if steps.is_empty() { DEFAULT_STEPS.to_vec() } else { steps };

            for steps in steps {
                let grid = puzzle.run(steps);
                if show {
                    println!("{grid}");
                }
                let report = EnhanceReport {
                    steps,
                    lit: grid.count_lit().ok(),
                    background_lit: grid.background_lit(),
                    bounds: grid.bounds(),
                };
                println!("{}", serde_json::to_string(&report)?);
            }
            Ok(())
        }

        Subcommand::Dice { player1, player2 } => {
            let outcome = DiceGame::new(player1, player2)?.play();
            let report = DiceReport {
                result: outcome.result(),
                rolls: outcome.rolls,
                winner: outcome.winner,
                players: outcome.players,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}
