//! Policy-versus-policy match loop.
//!
//! Drives a `Game` exactly as a presentation layer would: validate, process,
//! check for a terminal state, toggle. Between matches the game is reset,
//! which leaves the current player alone, so whoever made the last move of
//! one match opens the next.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ai::MovePolicy;
use crate::core::{GameConfig, GameRng, Label, Move, DEFAULT_BOARD_SIZE};
use crate::error::{EngineError, Result};
use crate::game::Game;
use crate::rules::GameStatus;

/// Configuration for a run of matches.
#[derive(Clone, Debug)]
pub struct MatchConfig {
    /// Number of matches to play.
    pub games: usize,

    /// Side length of the board.
    pub board_size: usize,

    /// Maximum moves per match (0 = until the board is full).
    pub max_moves: usize,

    /// Seed for the runner's RNG; each match gets a fork.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 100,
            board_size: DEFAULT_BOARD_SIZE,
            max_moves: 0,
            seed: 0,
        }
    }
}

impl MatchConfig {
    /// Create a default match config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of matches.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the board size.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set maximum moves per match.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// One finished (or move-capped) match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Label of the player who moved first.
    pub first: Label,

    /// Moves in the order played.
    pub moves: Vec<Move>,

    /// Status when the match stopped.
    pub status: GameStatus,
}

/// Totals over a run of matches.
#[derive(Clone, Debug, Default)]
pub struct MatchSummary {
    /// Matches won, by label.
    pub wins: FxHashMap<Label, usize>,

    /// Matches tied.
    pub ties: usize,

    /// Matches stopped by the move cap.
    pub unfinished: usize,

    /// Every match, in order.
    pub records: Vec<MatchRecord>,
}

impl MatchSummary {
    /// Number of matches played.
    #[must_use]
    pub fn games(&self) -> usize {
        self.records.len()
    }

    /// Matches won by `label`.
    #[must_use]
    pub fn wins_for(&self, label: Label) -> usize {
        self.wins.get(&label).copied().unwrap_or(0)
    }

    fn record(&mut self, record: MatchRecord) {
        match &record.status {
            GameStatus::Won { label, .. } => *self.wins.entry(*label).or_insert(0) += 1,
            GameStatus::Tied => self.ties += 1,
            GameStatus::InProgress => self.unfinished += 1,
        }
        self.records.push(record);
    }
}

/// Plays matches between two policies.
///
/// The first policy moves for the game's first player (`X`), the second
/// for the second player (`O`). Each chosen move is relabelled with the
/// current player's label before it is played. Only policies that
/// `plays_either_side` may sit on the side opposite their own label; the
/// hard tier always searches for `O` and so belongs in the second seat.
pub struct MatchRunner {
    config: MatchConfig,
    policies: [Box<dyn MovePolicy>; 2],
}

impl MatchRunner {
    /// Create a runner.
    pub fn new(config: MatchConfig, first: Box<dyn MovePolicy>, second: Box<dyn MovePolicy>) -> Self {
        Self {
            config,
            policies: [first, second],
        }
    }

    /// Check every seated policy can play the label of its seat.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::SeatMismatch` for the first policy that is
    /// bound to a label other than its seat's.
    pub fn check_seats(&self, game: &Game) -> Result<()> {
        for (player, policy) in game.players().iter().zip(&self.policies) {
            if !policy.plays_either_side() && policy.label() != player.label {
                return Err(EngineError::SeatMismatch {
                    seat: player.label,
                    policy: policy.label(),
                });
            }
        }
        Ok(())
    }

    /// Play one match on `game` from its current position.
    ///
    /// Does not check seats; `run` does.
    pub fn play_match(&mut self, game: &mut Game, rng: &mut GameRng) -> MatchRecord {
        let first = game.current_player().label;
        let max_moves = if self.config.max_moves == 0 {
            game.board_size() * game.board_size()
        } else {
            self.config.max_moves
        };
        let mut moves = Vec::new();

        while moves.len() < max_moves && !game.has_winner() && !game.is_tied() {
            let mover = game.current_player_id();
            let label = game.current_player().label;
            let policy = &mut self.policies[mover.index()];

            let Some(chosen) = policy.select(game.board(), game.combos(), rng) else {
                break;
            };
            let mv = chosen.with_label(label);

            if !game.is_valid_move(&mv) {
                warn!(?mv, "policy chose an invalid move");
                break;
            }

            game.process_move(mv);
            moves.push(mv);

            if game.has_winner() || game.is_tied() {
                break;
            }
            game.toggle_player();
        }

        MatchRecord {
            first,
            moves,
            status: game.status(),
        }
    }

    /// Play the configured number of matches.
    ///
    /// # Errors
    ///
    /// Fails if the board size is invalid, or if a policy sits on the
    /// wrong side (see `check_seats`).
    pub fn run(&mut self) -> Result<MatchSummary> {
        let game_config = GameConfig::new()
            .with_board_size(self.config.board_size)
            .with_seed(self.config.seed);
        let mut game = Game::with_config(game_config)?;
        self.check_seats(&game)?;
        let mut rng = GameRng::new(self.config.seed);
        let mut summary = MatchSummary::default();

        for index in 0..self.config.games {
            if index > 0 {
                game.reset_game();
            }
            let mut match_rng = rng.fork();
            let record = self.play_match(&mut game, &mut match_rng);
            debug!(index, first = %record.first, status = ?record.status, "match finished");
            summary.record(record);
        }

        Ok(summary)
    }
}
