//! Easy tier: uniform random choice among empty cells.

use smallvec::SmallVec;

use crate::core::{Board, GameRng, Label, Move, WinningCombos};

use super::policy::MovePolicy;
use super::AI_LABEL;

/// Uniform random policy.
#[derive(Clone, Copy, Debug)]
pub struct RandomPolicy {
    label: Label,
}

impl RandomPolicy {
    /// Play as `label`.
    #[must_use]
    pub fn new(label: Label) -> Self {
        Self { label }
    }

    /// Pick a random empty cell without needing the combos.
    pub fn choose(&self, board: &Board, rng: &mut GameRng) -> Option<Move> {
        let empty: SmallVec<[Move; 16]> = board.empty_cells().copied().collect();
        rng.choose(&empty).map(|m| m.with_label(self.label))
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new(AI_LABEL)
    }
}

impl MovePolicy for RandomPolicy {
    fn select(&mut self, board: &Board, _combos: &WinningCombos, rng: &mut GameRng) -> Option<Move> {
        self.choose(board, rng)
    }

    fn label(&self) -> Label {
        self.label
    }

    fn plays_either_side(&self) -> bool {
        true
    }
}
