//! # tictactoe-engine
//!
//! An N×N tic-tac-toe engine with a computer opponent.
//!
//! ## Design Principles
//!
//! 1. **No UI dependency**: The engine is a plain state machine. Front-ends
//!    render `Game` queries and forward clicks as `Move`s.
//!
//! 2. **Any board size**: Winning lines are computed per size (`2N + 2` of
//!    them); nothing assumes 3×3 except the default.
//!
//! 3. **Caller-checked moves**: `is_valid_move` reports legality;
//!    `process_move` trusts its caller.
//!
//! ## Architecture
//!
//! - **Explicit turn order**: The current player is an index advanced only by
//!   `toggle_player`.
//!
//! - **Policy seam**: Each difficulty tier is a `MovePolicy`, so tiers can be
//!   pitted against each other by the simulation runner.
//!
//! - **Seeded randomness**: The random tiers draw from a ChaCha8 `GameRng`;
//!   a seeded game replays identically.
//!
//! ## Modules
//!
//! - `core`: Labels, players, moves, board, winning lines, RNG, configuration
//! - `rules`: Line completion, ties, match status
//! - `game`: The per-match state machine
//! - `ai`: Random, heuristic, and minimax move policies
//! - `simulation`: Policy-versus-policy match runner
//! - `error`: Engine error type

pub mod ai;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{
    default_players, Board, Combo, Coord, Difficulty, GameConfig, GameRng, Label, Move,
    Player, PlayerId, TurnOrder, WinningCombos, DEFAULT_BOARD_SIZE,
};

pub use crate::error::{EngineError, Result};

pub use crate::game::Game;

pub use crate::rules::GameStatus;

pub use crate::ai::{
    policy_for, HeuristicPolicy, MinimaxPolicy, MovePolicy, RandomPolicy, SearchStats, AI_LABEL,
    OPPONENT_LABEL,
};

pub use crate::simulation::{MatchConfig, MatchRecord, MatchRunner, MatchSummary};
