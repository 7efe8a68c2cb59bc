//! Board coordinates and moves.

use serde::{Deserialize, Serialize};

use super::player::Label;

/// Zero-based (row, col) address of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A cell value: position plus the label occupying it.
///
/// Stored in the board with `Label::EMPTY` while the cell is unplayed.
/// Passed to the game with a non-empty label to play it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
    /// Occupying label, `Label::EMPTY` if none.
    pub label: Label,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub fn new(row: usize, col: usize, label: impl Into<Label>) -> Self {
        Self {
            row,
            col,
            label: label.into(),
        }
    }

    /// The unoccupied sentinel for a cell.
    #[must_use]
    pub const fn empty(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            label: Label::EMPTY,
        }
    }

    /// Position of this move.
    #[must_use]
    pub const fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    /// Does a label occupy this cell?
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        !self.label.is_empty()
    }

    /// Same position, different label.
    #[must_use]
    pub const fn with_label(self, label: Label) -> Self {
        Self { label, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_move() {
        let m = Move::empty(1, 2);
        assert!(!m.is_occupied());
        assert_eq!(m.coord(), Coord::new(1, 2));
    }

    #[test]
    fn test_with_label() {
        let m = Move::empty(0, 1).with_label(Label::new('O'));
        assert_eq!(m, Move::new(0, 1, 'O'));
        assert!(m.is_occupied());
    }

    #[test]
    fn test_coord_from_tuple_and_display() {
        let c: Coord = (2, 0).into();
        assert_eq!(c, Coord::new(2, 0));
        assert_eq!(c.to_string(), "(2, 0)");
    }

    #[test]
    fn test_coord_ordering_is_row_major() {
        assert!(Coord::new(0, 2) < Coord::new(1, 0));
        assert!(Coord::new(1, 0) < Coord::new(1, 1));
    }
}
