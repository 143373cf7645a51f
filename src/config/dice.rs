/// Dice game configuration constants.
///
/// Board layout, win condition and the shape of the deterministic die.
pub const BOARD_SPACES: u32 = 10;

/// Score a player must reach to win.
pub const WINNING_SCORE: u32 = 1000;

/// Number of faces on the deterministic die.
pub const DIE_SIDES: u32 = 100;

/// Rolls a player makes each turn.
pub const ROLLS_PER_TURN: u32 = 3;

/// Number of players at the table.
pub const PLAYER_COUNT: usize = 2;
