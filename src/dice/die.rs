use crate::config::dice::DIE_SIDES;

/// A deterministic die that rolls 1, then 2, ..., then [`DIE_SIDES`], then 1 again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeterministicDie {
    next: u32,
    rolls: u32,
}

impl DeterministicDie {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// A die whose next roll is `next`.
    pub fn starting_at(next: u32) -> Self {
        Self { next, rolls: 0 }
    }

    /// Rolls `times` times and returns the sum of the rolls.
    pub fn roll(&mut self, times: u32) -> u32 {
        self.rolls += times;

        let mut sum = 0;
        for _ in 0..times {
            sum += self.next;
            self.next = self.next % DIE_SIDES + 1;
        }
        sum
    }

    pub fn next_value(&self) -> u32 {
        self.next
    }

    /// Total number of rolls so far.
    pub fn rolls(&self) -> u32 {
        self.rolls
    }
}

impl Default for DeterministicDie {
    fn default() -> Self {
        Self::new()
    }
}
