//! Engine error types.
//!
//! Normal play never produces an error: an illegal move is reported by
//! `Game::is_valid_move` returning `false`. Errors arise while building a
//! game or a match run, while deserializing a board, and from the fallible
//! accessors offered alongside the panicking ones.

use derive_more::{Display, Error};

use crate::core::Label;

/// Errors raised by game construction and bounds-checked access.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Board size must be at least 1.
    #[display("invalid board size {size}: must be at least 1")]
    InvalidBoardSize {
        /// The rejected size.
        size: usize,
    },

    /// Coordinates fall outside the board.
    #[display("cell ({row}, {col}) is out of bounds for a {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board size.
        size: usize,
    },

    /// A serialized board does not hold `size * size` cells.
    #[display("expected {expected} cells, found {found}")]
    CellCount {
        /// `size * size`.
        expected: usize,
        /// Cells present.
        found: usize,
    },

    /// A serialized cell does not sit at its own coordinates.
    #[display("cell {index} claims to be at ({row}, {col})")]
    MisplacedCell {
        /// Row-major index of the cell.
        index: usize,
        /// Row stored in the cell.
        row: usize,
        /// Column stored in the cell.
        col: usize,
    },

    /// A label-bound policy was seated on the other side.
    #[display("policy playing {policy} cannot take the {seat} seat")]
    SeatMismatch {
        /// Label of the seat.
        seat: Label,
        /// Label the policy plays.
        policy: Label,
    },

    /// Difficulty text did not name a known tier.
    #[display("unknown difficulty {_0:?}: expected easy, medium or hard")]
    UnknownDifficulty(#[error(not(source))] String),

    /// Both players were given the same label.
    #[display("both players use the label {_0}")]
    DuplicateLabels(#[error(not(source))] Label),

    /// A player was given the empty sentinel as its label.
    #[display("player label must not be empty")]
    EmptyLabel,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
