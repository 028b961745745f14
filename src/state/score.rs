//! Score counter shown in the overlay beside the game canvas.

#[cfg(test)]
#[path = "score_test.rs"]
mod score_test;

/// Score owned by the game view. Starts at zero and only ever grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreState {
    value: u64,
}

impl ScoreState {
    pub fn value(self) -> u64 {
        self.value
    }

    /// Add one point and return the new score.
    ///
    /// Saturates at `u64::MAX` so the action stays total.
    pub fn increment(&mut self) -> u64 {
        self.value = self.value.saturating_add(1);
        self.value
    }
}
