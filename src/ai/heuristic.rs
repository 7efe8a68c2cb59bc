//! Medium tier: take an immediate win, otherwise block the opponent's,
//! otherwise play randomly.
//!
//! Both scans walk the combos in detection order (rows, columns,
//! diagonals) and take the first near-complete line found.

use crate::core::{Board, Coord, GameRng, Label, Move, WinningCombos};
use crate::rules::completing_cell;

use super::policy::MovePolicy;
use super::random::RandomPolicy;
use super::{AI_LABEL, OPPONENT_LABEL};

/// Win-now, then block, then random.
#[derive(Clone, Copy, Debug)]
pub struct HeuristicPolicy {
    own: Label,
    opponent: Label,
}

impl HeuristicPolicy {
    /// Play as `own` against `opponent`.
    #[must_use]
    pub fn new(own: Label, opponent: Label) -> Self {
        Self { own, opponent }
    }

    /// First cell that completes a line for `label`, if any.
    #[must_use]
    pub fn find_winning_cell(board: &Board, combos: &WinningCombos, label: Label) -> Option<Coord> {
        combos.iter().find_map(|combo| completing_cell(board, combo, label))
    }
}

impl Default for HeuristicPolicy {
    fn default() -> Self {
        Self::new(AI_LABEL, OPPONENT_LABEL)
    }
}

impl MovePolicy for HeuristicPolicy {
    fn select(&mut self, board: &Board, combos: &WinningCombos, rng: &mut GameRng) -> Option<Move> {
        let target = Self::find_winning_cell(board, combos, self.own)
            .or_else(|| Self::find_winning_cell(board, combos, self.opponent));

        match target {
            Some(coord) => Some(Move::new(coord.row, coord.col, self.own)),
            None => RandomPolicy::new(self.own).choose(board, rng),
        }
    }

    fn label(&self) -> Label {
        self.own
    }
}
