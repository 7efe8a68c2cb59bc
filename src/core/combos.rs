//! Winning lines for an N×N board.
//!
//! Computed once per board size: every row, every column, the main
//! diagonal, then the anti-diagonal, in that order. An N×N board always has
//! exactly `2N + 2` combos. The order is significant: winner detection and
//! the medium tier both take the first match in iteration order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Board;
use super::moves::Coord;
use super::player::Label;
use crate::error::{EngineError, Result};

/// One line of `N` coordinates.
///
/// SmallVec keeps lines up to 8 cells inline.
pub type Combo = SmallVec<[Coord; 8]>;

/// The full set of winning lines for one board size.
///
/// Only `size` is read back when deserializing; the lines are recomputed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCombos")]
pub struct WinningCombos {
    size: usize,
    combos: Vec<Combo>,
}

#[derive(Deserialize)]
struct RawCombos {
    size: usize,
}

impl TryFrom<RawCombos> for WinningCombos {
    type Error = EngineError;

    fn try_from(raw: RawCombos) -> Result<Self> {
        if raw.size == 0 {
            return Err(EngineError::InvalidBoardSize { size: raw.size });
        }
        Ok(Self::new(raw.size))
    }
}

impl WinningCombos {
    /// Compute the combos for an N×N board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board size must be at least 1");
        let mut combos = Vec::with_capacity(2 * size + 2);

        for row in 0..size {
            combos.push((0..size).map(|col| Coord::new(row, col)).collect());
        }
        for col in 0..size {
            combos.push((0..size).map(|row| Coord::new(row, col)).collect());
        }
        combos.push((0..size).map(|i| Coord::new(i, i)).collect());
        combos.push((0..size).map(|i| Coord::new(i, size - 1 - i)).collect());

        Self { size, combos }
    }

    /// Board size these combos were computed for.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of combos (`2N + 2`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.combos.len()
    }

    /// Always false: even a 1×1 board has four (degenerate) lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }

    /// Iterate combos in detection order.
    pub fn iter(&self) -> std::slice::Iter<'_, Combo> {
        self.combos.iter()
    }

    /// Get one combo by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Combo> {
        self.combos.get(index)
    }
}

impl<'a> IntoIterator for &'a WinningCombos {
    type Item = &'a Combo;
    type IntoIter = std::slice::Iter<'a, Combo>;

    fn into_iter(self) -> Self::IntoIter {
        self.combos.iter()
    }
}

/// The label that fills every cell of `combo`, if the cells carry exactly
/// one distinct label and it is not the empty sentinel.
#[must_use]
pub fn completed_by(board: &Board, combo: &[Coord]) -> Option<Label> {
    let (&first, rest) = combo.split_first()?;
    let label = board.label_at(first);
    if label.is_empty() {
        return None;
    }
    rest.iter().all(|&c| board.label_at(c) == label).then_some(label)
}
