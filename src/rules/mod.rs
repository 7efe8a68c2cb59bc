//! Game rules: line completion, ties, and match status.
//!
//! These are pure functions over a `Board` and its `WinningCombos`. The
//! `Game` state machine and the AI tiers both build on them.

pub mod status;
pub mod win;

pub use status::GameStatus;
pub use win::{completing_cell, find_completed_line, is_tied, winner};
