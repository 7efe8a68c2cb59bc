//! Player labels, identities, and turn order.
//!
//! ## Label
//!
//! A single-character marker placed in a cell. `Label::EMPTY` is the
//! unoccupied sentinel.
//!
//! ## Player
//!
//! Immutable label plus a display colour. The colour is carried for the
//! presentation layer only; no engine logic reads it.
//!
//! ## TurnOrder
//!
//! The fixed two-player alternation. Advanced only by an explicit `toggle`.

use serde::{Deserialize, Serialize};

/// Single-character cell marker, or the empty sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label(Option<char>);

impl Label {
    /// The unoccupied sentinel.
    pub const EMPTY: Label = Label(None);

    /// Create a non-empty label.
    #[must_use]
    pub const fn new(mark: char) -> Self {
        Self(Some(mark))
    }

    /// Is this the unoccupied sentinel?
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0.is_none()
    }

    /// The marker character, if any.
    #[must_use]
    pub const fn mark(self) -> Option<char> {
        self.0
    }
}

impl From<char> for Label {
    fn from(mark: char) -> Self {
        Self::new(mark)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(mark) => write!(f, "{mark}"),
            None => Ok(()),
        }
    }
}

/// A participant: label plus display colour.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Marker this player places.
    pub label: Label,
    /// Presentation-only colour name.
    pub color: String,
}

impl Player {
    /// Create a player.
    pub fn new(mark: char, color: impl Into<String>) -> Self {
        Self {
            label: Label::new(mark),
            color: color.into(),
        }
    }
}

/// The two default players: X in blue, O in green.
#[must_use]
pub fn default_players() -> [Player; 2] {
    [Player::new('X', "blue"), Player::new('O', "green")]
}

/// Index of one of the two players. `PlayerId::new(0)` moves first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Create a new player ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 2, "PlayerId must be 0 or 1");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player of the pair.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(self.0 ^ 1)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Fixed alternation between exactly two players.
///
/// Wraps around indefinitely: toggling from the second player returns to
/// the first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TurnOrder {
    players: [Player; 2],
    current: PlayerId,
}

impl TurnOrder {
    /// Start with the first player to move.
    #[must_use]
    pub fn new(players: [Player; 2]) -> Self {
        Self {
            players,
            current: PlayerId::new(0),
        }
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current.index()]
    }

    /// Index of the player whose turn it is.
    #[must_use]
    pub fn current_id(&self) -> PlayerId {
        self.current
    }

    /// Advance to the next player in the cycle.
    pub fn toggle(&mut self) {
        self.current = self.current.other();
    }

    /// Both players, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Look up a player by label. Used to resolve the winner's colour.
    #[must_use]
    pub fn by_label(&self, label: Label) -> Option<&Player> {
        self.players.iter().find(|p| p.label == label)
    }
}
