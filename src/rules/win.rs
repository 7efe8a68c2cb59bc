//! Line completion and tie detection.

use crate::core::{completed_by, Board, Combo, Coord, Label, WinningCombos};

/// First combo, in detection order, whose cells all carry the same
/// non-empty label.
///
/// Returns the combo's index and the label that completed it.
#[must_use]
pub fn find_completed_line(board: &Board, combos: &WinningCombos) -> Option<(usize, Label)> {
    combos
        .iter()
        .enumerate()
        .find_map(|(i, combo)| completed_by(board, combo).map(|label| (i, label)))
}

/// Label of the first completed line, if any.
#[must_use]
pub fn winner(board: &Board, combos: &WinningCombos) -> Option<Label> {
    find_completed_line(board, combos).map(|(_, label)| label)
}

/// Is `combo` one empty cell short of being completed by `label`?
///
/// Returns that empty cell. A combo qualifies when exactly `N - 1` of its
/// cells carry `label` and the remaining cell is empty.
#[must_use]
pub fn completing_cell(board: &Board, combo: &Combo, label: Label) -> Option<Coord> {
    let mut own = 0;
    let mut empty = None;

    for &coord in combo {
        let here = board.label_at(coord);
        if here == label {
            own += 1;
        } else if here.is_empty() && empty.is_none() {
            empty = Some(coord);
        }
    }

    if own + 1 == combo.len() {
        empty
    } else {
        None
    }
}

/// No line is complete and every cell is occupied.
#[must_use]
pub fn is_tied(board: &Board, has_winner: bool) -> bool {
    !has_winner && board.is_full()
}
