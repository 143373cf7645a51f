/// Main configuration module.
///
/// Re-exports submodules for the enhancement simulator and the dice game.
pub mod dice;
pub mod enhance;
