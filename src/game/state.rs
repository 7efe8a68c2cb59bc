//! Per-match game state.
//!
//! `Game` is the whole engine surface the presentation layer talks to. It is
//! owned by one host for the life of a match and mutated only through
//! `process_move`, `toggle_player`, `reset_game`, and the AI entry points.
//!
//! ## Caller contract
//!
//! - Check `is_valid_move` before `process_move`; `process_move` writes
//!   unconditionally.
//! - `is_valid_move` rejects moves once a line is complete but not once the
//!   board is tied. Check `is_tied` as well.
//! - Coordinates must be in range. Out-of-range coordinates panic.

use tracing::{debug, instrument, trace};

use crate::ai::{self, AI_LABEL};
use crate::core::{
    default_players, Board, Coord, Difficulty, GameConfig, GameRng, Label, Move, Player, PlayerId,
    TurnOrder, WinningCombos,
};
use crate::error::{EngineError, Result};
use crate::rules::{self, GameStatus};

/// State of one match.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    turns: TurnOrder,
    board: Board,
    combos: WinningCombos,
    has_winner: bool,
    winner_label: Option<Label>,
    winner_combo: Vec<Coord>,
    rng: GameRng,
}

impl Game {
    /// Start a match: empty board, first player to move.
    ///
    /// # Errors
    ///
    /// Fails if the board size is zero, either label is empty, or both
    /// players share a label.
    pub fn new(players: [Player; 2], config: GameConfig) -> Result<Self> {
        config.validate()?;

        if players.iter().any(|p| p.label.is_empty()) {
            return Err(EngineError::EmptyLabel);
        }
        if players[0].label == players[1].label {
            return Err(EngineError::DuplicateLabels(players[0].label));
        }

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        debug!(
            board_size = config.board_size,
            ai_enabled = config.ai_enabled,
            difficulty = %config.difficulty,
            seed = rng.seed(),
            "new game"
        );

        Ok(Self {
            board: Board::new(config.board_size),
            combos: WinningCombos::new(config.board_size),
            turns: TurnOrder::new(players),
            has_winner: false,
            winner_label: None,
            winner_combo: Vec::new(),
            rng,
            config,
        })
    }

    /// Start a match with the default X and O players.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid.
    pub fn with_config(config: GameConfig) -> Result<Self> {
        Self::new(default_players(), config)
    }

    // === Queries ===

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.turns.current()
    }

    /// Index of the player whose turn it is.
    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        self.turns.current_id()
    }

    /// Both players, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        self.turns.players()
    }

    /// Side length.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The winning lines for this board size.
    #[must_use]
    pub fn combos(&self) -> &WinningCombos {
        &self.combos
    }

    /// Match configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Cell contents.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &Move {
        self.board.cell(row, col)
    }

    /// Cell contents, or an error if out of bounds.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::OutOfBounds` for coordinates off the board.
    pub fn try_cell(&self, row: usize, col: usize) -> Result<&Move> {
        self.board.get(row, col).ok_or(EngineError::OutOfBounds {
            row,
            col,
            size: self.board.size(),
        })
    }

    /// Has a line been completed?
    #[must_use]
    pub fn has_winner(&self) -> bool {
        self.has_winner
    }

    /// Every cell occupied and no line completed.
    #[must_use]
    pub fn is_tied(&self) -> bool {
        rules::is_tied(&self.board, self.has_winner)
    }

    /// The completed line, empty if none.
    #[must_use]
    pub fn winning_combo(&self) -> &[Coord] {
        &self.winner_combo
    }

    /// Label that completed the winning line.
    #[must_use]
    pub fn winner(&self) -> Option<Label> {
        self.winner_label
    }

    /// Player who completed the winning line, for rendering in their colour.
    ///
    /// `None` if no line is complete, or if a label belonging to neither
    /// player completed it.
    #[must_use]
    pub fn winning_player(&self) -> Option<&Player> {
        self.winner_label.and_then(|label| self.turns.by_label(label))
    }

    /// Where the match stands.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(label) => GameStatus::Won {
                label,
                combo: self.winner_combo.clone(),
            },
            None if self.is_tied() => GameStatus::Tied,
            None => GameStatus::InProgress,
        }
    }

    /// Should the host ask the AI for the next move?
    ///
    /// True when the AI is enabled and it is `O`'s turn.
    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        self.config.ai_enabled && self.current_player().label == AI_LABEL
    }

    // === Mutations ===

    /// No line is complete and the target cell is empty.
    ///
    /// # Panics
    ///
    /// Panics if the move is out of bounds.
    #[must_use]
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        !self.has_winner && !self.board.cell(mv.row, mv.col).is_occupied()
    }

    /// Write `mv` into its cell and check for a completed line.
    ///
    /// Does not validate the move. Stops at the first completed line in
    /// combo order; only one line can be newly completed per move.
    ///
    /// # Panics
    ///
    /// Panics if the move is out of bounds.
    #[instrument(skip(self))]
    pub fn process_move(&mut self, mv: Move) {
        self.board.set(mv);

        if let Some((index, label)) = rules::find_completed_line(&self.board, &self.combos) {
            if let Some(combo) = self.combos.get(index) {
                self.has_winner = true;
                self.winner_label = Some(label);
                self.winner_combo = combo.to_vec();
                debug!(winner = %label, combo = ?self.winner_combo, "line completed");
            }
        } else if self.is_tied() {
            debug!("board full, game tied");
        }
    }

    /// Pass the turn to the other player. The board is untouched.
    pub fn toggle_player(&mut self) {
        self.turns.toggle();
        trace!(current = %self.current_player().label, "turn passed");
    }

    /// Empty every cell and clear the winner.
    ///
    /// Configuration and the current player are kept as they are, so turn
    /// order carries on across rematches.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.clear();
        self.has_winner = false;
        self.winner_label = None;
        self.winner_combo.clear();
        debug!(current = %self.current_player().label, "game reset");
    }

    // === AI ===

    /// Choose a move for the AI at `difficulty`.
    ///
    /// Returns `None` if the board is full. The move carries the AI label
    /// and can be passed straight to `process_move`.
    #[instrument(skip(self))]
    pub fn get_ai_move(&mut self, difficulty: Difficulty) -> Option<Move> {
        if self.board.is_full() {
            debug!("no move available: board full");
            return None;
        }

        let mut policy = ai::policy_for(difficulty, self.config.search_depth);
        let chosen = policy.select(&self.board, &self.combos, &mut self.rng);

        if let Some(stats) = policy.stats() {
            debug!(
                nodes = stats.nodes_visited,
                terminals = stats.terminal_positions,
                cutoffs = stats.cutoffs,
                time_us = stats.time_us,
                nodes_per_sec = stats.nodes_per_second(),
                "search statistics"
            );
        }
        debug!(chosen = ?chosen.map(|m| m.coord()), "ai move");
        chosen
    }

    /// Choose a move for the AI at the configured difficulty.
    pub fn get_ai_move_with_difficulty(&mut self) -> Option<Move> {
        self.get_ai_move(self.config.difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::with_config(GameConfig::new().with_seed(1)).unwrap()
    }

    fn play(game: &mut Game, moves: &[(usize, usize, char)]) {
        for &(r, c, l) in moves {
            game.process_move(Move::new(r, c, l));
        }
    }

    #[test]
    fn test_new_game() {
        let game = game();
        assert_eq!(game.board_size(), 3);
        assert_eq!(game.current_player().label, Label::new('X'));
        assert!(!game.has_winner());
        assert!(!game.is_tied());
        assert!(game.winning_combo().is_empty());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_construction_errors() {
        let config = GameConfig::new().with_board_size(0);
        assert_eq!(
            Game::with_config(config).unwrap_err(),
            EngineError::InvalidBoardSize { size: 0 }
        );

        let twins = [Player::new('X', "blue"), Player::new('X', "red")];
        assert_eq!(
            Game::new(twins, GameConfig::default()).unwrap_err(),
            EngineError::DuplicateLabels(Label::new('X'))
        );

        let blank = [
            Player {
                label: Label::EMPTY,
                color: "blue".into(),
            },
            Player::new('O', "green"),
        ];
        assert_eq!(Game::new(blank, GameConfig::default()).unwrap_err(), EngineError::EmptyLabel);
    }

    #[test]
    fn test_valid_move_checks() {
        let mut game = game();
        assert!(game.is_valid_move(&Move::new(0, 0, 'X')));

        game.process_move(Move::new(0, 0, 'X'));
        assert!(!game.is_valid_move(&Move::new(0, 0, 'X')));
        assert!(!game.is_valid_move(&Move::new(0, 0, 'O')));
        assert!(game.is_valid_move(&Move::new(0, 1, 'O')));
    }

    #[test]
    fn test_no_valid_moves_after_win() {
        let mut game = game();
        play(&mut game, &[(0, 0, 'X'), (0, 1, 'X'), (0, 2, 'X')]);
        assert!(game.has_winner());
        assert!(!game.is_valid_move(&Move::new(2, 2, 'O')));
    }

    #[test]
    fn test_win_records_combo() {
        let mut game = game();
        play(&mut game, &[(0, 0, 'X'), (1, 1, 'O'), (0, 1, 'X'), (0, 2, 'X')]);

        assert!(game.has_winner());
        assert_eq!(
            game.winning_combo(),
            &[Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
        );
        assert_eq!(game.winner(), Some(Label::new('X')));
        assert!(game.status().is_winner(Label::new('X')));
    }

    #[test]
    fn test_winning_player() {
        let mut game = game();
        assert!(game.winning_player().is_none());

        play(&mut game, &[(2, 0, 'O'), (2, 1, 'O'), (2, 2, 'O')]);
        let winner = game.winning_player().unwrap();
        assert_eq!(winner.label, Label::new('O'));
        assert_eq!(winner.color, "green");

        game.reset_game();
        assert!(game.winning_player().is_none());
    }

    #[test]
    fn test_winning_player_unknown_label() {
        let mut game = game();
        play(&mut game, &[(0, 0, 'Z'), (1, 1, 'Z'), (2, 2, 'Z')]);
        assert_eq!(game.winner(), Some(Label::new('Z')));
        assert!(game.winning_player().is_none());
    }

    #[test]
    fn test_process_move_overwrites() {
        let mut game = game();
        game.process_move(Move::new(1, 1, 'X'));
        game.process_move(Move::new(1, 1, 'O'));
        assert_eq!(game.cell(1, 1).label, Label::new('O'));
    }

    #[test]
    fn test_tie() {
        let mut game = game();
        play(
            &mut game,
            &[
                (0, 0, 'X'),
                (0, 1, 'O'),
                (0, 2, 'X'),
                (1, 0, 'X'),
                (1, 1, 'O'),
                (1, 2, 'O'),
                (2, 0, 'O'),
                (2, 1, 'X'),
                (2, 2, 'X'),
            ],
        );
        assert!(game.is_tied());
        assert!(!game.has_winner());
        assert_eq!(game.status(), GameStatus::Tied);
    }

    #[test]
    fn test_toggle_player_wraps() {
        let mut game = game();
        game.toggle_player();
        assert_eq!(game.current_player().label, Label::new('O'));
        game.toggle_player();
        assert_eq!(game.current_player().label, Label::new('X'));
        assert_eq!(game.board().empty_count(), 9);
    }

    #[test]
    fn test_reset_keeps_current_player_and_config() {
        let mut game = Game::with_config(GameConfig::new().with_ai(Difficulty::Hard).with_seed(2)).unwrap();
        play(&mut game, &[(0, 0, 'X'), (1, 0, 'X'), (2, 0, 'X')]);
        game.toggle_player();
        assert!(game.has_winner());

        game.reset_game();

        assert!(!game.has_winner());
        assert!(!game.is_tied());
        assert!(game.winning_combo().is_empty());
        assert!(game.board().cells().all(|m| !m.is_occupied()));
        assert_eq!(game.current_player().label, Label::new('O'));
        assert_eq!(game.config().difficulty, Difficulty::Hard);
        assert!(game.config().ai_enabled);
    }

    #[test]
    fn test_try_cell() {
        let game = game();
        assert!(game.try_cell(2, 2).is_ok());
        assert_eq!(
            game.try_cell(3, 1).unwrap_err(),
            EngineError::OutOfBounds { row: 3, col: 1, size: 3 }
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_move_panics() {
        let mut game = game();
        game.process_move(Move::new(5, 0, 'X'));
    }

    #[test]
    fn test_is_ai_turn() {
        let mut game = Game::with_config(GameConfig::new().with_ai(Difficulty::Easy)).unwrap();
        assert!(!game.is_ai_turn());
        game.toggle_player();
        assert!(game.is_ai_turn());

        let mut two_player = self::game();
        two_player.toggle_player();
        assert!(!two_player.is_ai_turn());
    }

    #[test]
    fn test_ai_move_none_on_full_board() {
        let mut game = game();
        for row in 0..3 {
            for col in 0..3 {
                game.process_move(Move::new(row, col, if (row + col) % 2 == 0 { 'A' } else { 'B' }));
            }
        }
        for d in Difficulty::ALL {
            assert_eq!(game.get_ai_move(d), None);
        }
    }

    #[test]
    fn test_ai_move_is_playable() {
        let mut game = Game::with_config(GameConfig::new().with_ai(Difficulty::Easy).with_seed(3)).unwrap();
        game.process_move(Move::new(1, 1, 'X'));
        game.toggle_player();

        let mv = game.get_ai_move_with_difficulty().unwrap();
        assert!(game.is_valid_move(&mv));
        assert_eq!(mv.label, AI_LABEL);

        game.process_move(mv);
        assert_eq!(game.cell(mv.row, mv.col).label, AI_LABEL);
    }
}
