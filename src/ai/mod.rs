//! Computer opponent.
//!
//! ## Overview
//!
//! Three difficulty tiers, each a `MovePolicy`:
//!
//! - **Easy** (`RandomPolicy`): uniform random over empty cells
//! - **Medium** (`HeuristicPolicy`): complete an own line if one cell short,
//!   else block the opponent's, else random
//! - **Hard** (`MinimaxPolicy`): exhaustive minimax, no pruning
//!
//! The AI plays `O` and its opponent `X`. The hard tier always assumes these
//! two labels; the other tiers can be built for any pair.
//!
//! ## Usage
//!
//! ```
//! use tictactoe_engine::ai::policy_for;
//! use tictactoe_engine::core::{Board, Difficulty, GameRng, Move, WinningCombos};
//!
//! let mut board = Board::new(3);
//! board.set(Move::new(0, 0, 'X'));
//! board.set(Move::new(0, 1, 'X'));
//!
//! let mut policy = policy_for(Difficulty::Medium, 0);
//! let mv = policy.select(&board, &WinningCombos::new(3), &mut GameRng::new(0));
//! assert_eq!(mv, Some(Move::new(0, 2, 'O')));
//! ```

pub mod heuristic;
pub mod minimax;
pub mod policy;
pub mod random;
pub mod stats;

use crate::core::{Difficulty, Label};

pub use heuristic::HeuristicPolicy;
pub use minimax::MinimaxPolicy;
pub use policy::MovePolicy;
pub use random::RandomPolicy;
pub use stats::SearchStats;

/// Label the AI plays.
pub const AI_LABEL: Label = Label::new('O');

/// Label the AI plays against.
pub const OPPONENT_LABEL: Label = Label::new('X');

/// Build the policy for a difficulty tier.
///
/// `search_depth` limits the hard tier (0 = unlimited) and is ignored by
/// the others.
#[must_use]
pub fn policy_for(difficulty: Difficulty, search_depth: u32) -> Box<dyn MovePolicy> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomPolicy::default()),
        Difficulty::Medium => Box::new(HeuristicPolicy::default()),
        Difficulty::Hard => Box::new(MinimaxPolicy::new().with_max_depth(search_depth)),
    }
}
