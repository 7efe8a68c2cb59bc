//! Game configuration.
//!
//! The dialog layer collects a mode (two-player or versus AI) and a
//! difficulty tier; both arrive here and are fixed for the life of a match.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Default side length.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// AI difficulty tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniform random over empty cells.
    Easy,
    /// Win if possible, else block, else random.
    #[default]
    Medium,
    /// Exhaustive minimax.
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = EngineError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EngineError::UnknownDifficulty(s.to_string()))
    }
}

/// Per-match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the board.
    pub board_size: usize,

    /// Is the second player driven by the AI?
    pub ai_enabled: bool,

    /// Tier used by `Game::get_ai_move_with_difficulty`.
    pub difficulty: Difficulty,

    /// Seed for the random tiers. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Minimax depth cutoff (0 = unlimited).
    pub search_depth: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            ai_enabled: false,
            difficulty: Difficulty::Medium,
            seed: None,
            search_depth: 0,
        }
    }
}

impl GameConfig {
    /// Create a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Enable the AI opponent at the given difficulty.
    pub fn with_ai(mut self, difficulty: Difficulty) -> Self {
        self.ai_enabled = true;
        self.difficulty = difficulty;
        self
    }

    /// Set the difficulty without changing whether the AI is enabled.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Fix the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Limit minimax search depth.
    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(EngineError::InvalidBoardSize { size: self.board_size });
        }
        Ok(())
    }
}
