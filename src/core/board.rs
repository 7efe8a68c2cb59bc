//! The N×N board of cells.
//!
//! Cells are stored row-major. The `Move` held at `(r, c)` always has
//! `row == r` and `col == c`; `set` only ever replaces the label.

use serde::{Deserialize, Serialize};

use super::moves::{Coord, Move};
use super::player::Label;
use crate::error::{EngineError, Result};

/// N×N matrix of cells.
///
/// Deserialization checks the cell count and that every cell sits at its
/// own coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Move>,
}

#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Move>,
}

impl TryFrom<RawBoard> for Board {
    type Error = EngineError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        let RawBoard { size, cells } = raw;
        if size == 0 {
            return Err(EngineError::InvalidBoardSize { size });
        }
        if cells.len() != size * size {
            return Err(EngineError::CellCount {
                expected: size * size,
                found: cells.len(),
            });
        }
        if let Some(index) = cells
            .iter()
            .enumerate()
            .position(|(i, m)| (m.row, m.col) != (i / size, i % size))
        {
            return Err(EngineError::MisplacedCell {
                index,
                row: cells[index].row,
                col: cells[index].col,
            });
        }
        Ok(Self { size, cells })
    }
}

impl Board {
    /// Create an empty board of the given size.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board size must be at least 1");

        let cells = (0..size * size)
            .map(|i| Move::empty(i / size, i % size))
            .collect();

        Self { size, cells }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Does `(row, col)` address a cell on this board?
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Get a cell, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Move> {
        if self.contains(row, col) {
            Some(&self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Get a cell.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &Move {
        &self.cells[self.index(row, col)]
    }

    /// Label at a coordinate.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[must_use]
    pub fn label_at(&self, coord: Coord) -> Label {
        self.cell(coord.row, coord.col).label
    }

    /// Write a move's label into its cell, overwriting whatever was there.
    ///
    /// # Panics
    ///
    /// Panics if the move is out of bounds.
    pub fn set(&mut self, mv: Move) {
        let idx = self.index(mv.row, mv.col);
        self.cells[idx].label = mv.label;
    }

    /// Return a cell to the empty sentinel.
    pub fn clear_cell(&mut self, coord: Coord) {
        let idx = self.index(coord.row, coord.col);
        self.cells[idx].label = Label::EMPTY;
    }

    /// Reset every cell to the empty sentinel at its own coordinates.
    pub fn clear(&mut self) {
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = Move::empty(i / self.size, i % self.size);
        }
    }

    /// Is every cell occupied?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Move::is_occupied)
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = &Move> + '_ {
        self.cells.iter().filter(|m| !m.is_occupied())
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.empty_cells().count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Move> + '_ {
        self.cells.iter()
    }

    /// Place `label` at `coord`, run `f`, then put back whatever label the
    /// cell held before.
    ///
    /// `f` must leave the rest of the board as it found it.
    pub fn with_placed<R>(&mut self, coord: Coord, label: Label, f: impl FnOnce(&mut Self) -> R) -> R {
        let idx = self.index(coord.row, coord.col);
        let previous = std::mem::replace(&mut self.cells[idx].label, label);
        let result = f(self);
        self.cells[idx].label = previous;
        result
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) is out of bounds for a {0}x{0} board",
            self.size
        );
        row * self.size + col
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.size {
                let mark = self.cell(row, col).label.mark().unwrap_or('.');
                write!(f, "{mark}")?;
            }
        }
        Ok(())
    }
}
