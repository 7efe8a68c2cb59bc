//! The per-match state machine.
//!
//! ```
//! use tictactoe_engine::core::{Coord, GameConfig, Move};
//! use tictactoe_engine::game::Game;
//!
//! let mut game = Game::with_config(GameConfig::default()).unwrap();
//! for mv in [Move::new(0, 0, 'X'), Move::new(1, 1, 'O'), Move::new(0, 1, 'X'), Move::new(0, 2, 'X')] {
//!     assert!(game.is_valid_move(&mv));
//!     game.process_move(mv);
//! }
//! assert!(game.has_winner());
//! assert_eq!(game.winning_combo(), &[Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]);
//! ```

mod state;

pub use state::Game;
