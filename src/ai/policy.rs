//! Move selection policies.
//!
//! Each difficulty tier is a `MovePolicy`:
//! - `RandomPolicy`: uniform over empty cells (easy)
//! - `HeuristicPolicy`: win, else block, else random (medium)
//! - `MinimaxPolicy`: exhaustive game-tree search (hard)

use crate::core::{Board, GameRng, Label, Move, WinningCombos};

use super::stats::SearchStats;

/// Policy for choosing the AI's next move.
pub trait MovePolicy: Send {
    /// Choose a move on `board`.
    ///
    /// Returns `None` if every cell is occupied. The returned move carries
    /// the policy's own label.
    fn select(&mut self, board: &Board, combos: &WinningCombos, rng: &mut GameRng) -> Option<Move>;

    /// Label this policy plays.
    fn label(&self) -> Label;

    /// Can the move be relabelled for the other side without changing what
    /// a good choice would be?
    ///
    /// Policies that reason about whose line is whose return `false` and
    /// must be seated on the side of their own label.
    fn plays_either_side(&self) -> bool {
        false
    }

    /// Statistics from the last search, for policies that search.
    fn stats(&self) -> Option<&SearchStats> {
        None
    }
}
