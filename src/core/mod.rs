//! Core engine types: labels, players, moves, board, winning lines, RNG,
//! configuration.

pub mod board;
pub mod combos;
pub mod config;
pub mod moves;
pub mod player;
pub mod rng;

pub use board::Board;
pub use combos::{completed_by, Combo, WinningCombos};
pub use config::{Difficulty, GameConfig, DEFAULT_BOARD_SIZE};
pub use moves::{Coord, Move};
pub use player::{default_players, Label, Player, PlayerId, TurnOrder};
pub use rng::GameRng;
