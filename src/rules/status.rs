//! Match lifecycle status.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Label};

/// Where a match stands.
///
/// `InProgress` is entered on construction and on every reset. `Won` and
/// `Tied` are terminal until the next reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves may still be played.
    InProgress,
    /// A line was completed.
    Won {
        /// Label that completed the line.
        label: Label,
        /// The completed line.
        combo: Vec<Coord>,
    },
    /// Every cell is occupied and no line was completed.
    Tied,
}

impl GameStatus {
    /// Is the match over?
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Did `label` win?
    #[must_use]
    pub fn is_winner(&self, label: Label) -> bool {
        matches!(self, GameStatus::Won { label: l, .. } if *l == label)
    }
}
