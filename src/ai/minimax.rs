//! Hard tier: exhaustive minimax over the remaining game tree.
//!
//! The AI is always the maximizer playing `O` and the opponent the
//! minimizer playing `X`, whatever labels the configured players use.
//! A completed `O` line scores +1, a completed `X` line −1, a full board 0.
//! A line completed by any other label also scores 0.
//!
//! No alpha-beta pruning. On 3×3 the tree is bounded by 9! leaves, which is
//! fast enough to treat as instantaneous. For larger boards set a depth
//! cutoff; positions at the cutoff score 0.
//!
//! The search works on one scratch copy of the board, placing and removing
//! labels with `Board::with_placed` so every placement is undone before the
//! next sibling is tried.

use std::time::Instant;

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Board, Coord, GameRng, Label, Move, WinningCombos};
use crate::rules::winner;

use super::policy::MovePolicy;
use super::stats::SearchStats;
use super::{AI_LABEL, OPPONENT_LABEL};

/// Score of a position won by the maximizer.
pub const WIN_SCORE: i32 = 1;
/// Score of a position won by the minimizer.
pub const LOSS_SCORE: i32 = -1;
/// Score of a tie, a foreign-label line, or a depth cutoff.
pub const DRAW_SCORE: i32 = 0;

/// Exhaustive minimax policy.
#[derive(Clone, Debug, Default)]
pub struct MinimaxPolicy {
    max_depth: u32,
    stats: SearchStats,
}

impl MinimaxPolicy {
    /// Unlimited-depth search.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop at `depth` plies below the root (0 = unlimited).
    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Statistics from the last search.
    #[must_use]
    pub fn last_stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Score every empty cell as an `O` move, in row-major order.
    pub fn score_moves(&mut self, board: &Board, combos: &WinningCombos) -> Vec<(Coord, i32)> {
        let start = Instant::now();
        self.stats.reset();

        let mut scratch = board.clone();
        let candidates: SmallVec<[Coord; 16]> = scratch.empty_cells().map(Move::coord).collect();

        let scores = candidates
            .into_iter()
            .map(|coord| {
                let score = scratch.with_placed(coord, AI_LABEL, |b| self.minimax(b, combos, 1, false));
                (coord, score)
            })
            .collect();

        self.stats.time_us = start.elapsed().as_micros() as u64;
        trace!(
            nodes = self.stats.nodes_visited,
            terminals = self.stats.terminal_positions,
            time_us = self.stats.time_us,
            "minimax search complete"
        );
        scores
    }

    /// Best `O` move: the first candidate with the highest score.
    pub fn best_move(&mut self, board: &Board, combos: &WinningCombos) -> Option<Move> {
        let mut best: Option<(Coord, i32)> = None;
        for (coord, score) in self.score_moves(board, combos) {
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((coord, score));
            }
        }
        best.map(|(coord, _)| Move::new(coord.row, coord.col, AI_LABEL))
    }

    fn minimax(&mut self, board: &mut Board, combos: &WinningCombos, depth: u32, maximizing: bool) -> i32 {
        self.stats.visit(depth);

        if let Some(label) = winner(board, combos) {
            self.stats.terminal_positions += 1;
            return terminal_score(label);
        }
        if board.is_full() {
            self.stats.terminal_positions += 1;
            return DRAW_SCORE;
        }
        if self.max_depth > 0 && depth >= self.max_depth {
            self.stats.cutoffs += 1;
            return DRAW_SCORE;
        }

        let (label, mut best) = if maximizing {
            (AI_LABEL, i32::MIN)
        } else {
            (OPPONENT_LABEL, i32::MAX)
        };

        let empty: SmallVec<[Coord; 16]> = board.empty_cells().map(Move::coord).collect();
        for coord in empty {
            let score = board.with_placed(coord, label, |b| self.minimax(b, combos, depth + 1, !maximizing));
            best = if maximizing { best.max(score) } else { best.min(score) };
        }
        best
    }
}

fn terminal_score(label: Label) -> i32 {
    if label == AI_LABEL {
        WIN_SCORE
    } else if label == OPPONENT_LABEL {
        LOSS_SCORE
    } else {
        DRAW_SCORE
    }
}

impl MovePolicy for MinimaxPolicy {
    fn select(&mut self, board: &Board, combos: &WinningCombos, _rng: &mut GameRng) -> Option<Move> {
        self.best_move(board, combos)
    }

    fn label(&self) -> Label {
        AI_LABEL
    }

    fn stats(&self) -> Option<&SearchStats> {
        Some(&self.stats)
    }
}
