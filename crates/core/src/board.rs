//! Board module - the settled grid, the render composite and line clears
//!
//! The board is a plain `Grid<u8>` of 10 columns x 40 rows. Rows 0-18 are
//! the hidden buffer above the visible field.

use arrayvec::ArrayVec;
use blockfall_grid::Grid;

use crate::tetrimino::{append, append_ghost, Tetrimino};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// Board row indices cleared by one pass
pub type ClearedRows = ArrayVec<usize, BOARD_HEIGHT>;

/// Create a new empty board
pub fn empty_board() -> Grid<u8> {
    Grid::build(BOARD_WIDTH, BOARD_HEIGHT, EMPTY)
}

/// Settled cells plus optional ghost plus the active piece
///
/// The ghost goes down first so the active piece always covers it.
pub fn compose(settled: &Grid<u8>, piece: &Tetrimino, ghost: bool) -> Grid<u8> {
    let mut board = empty_board().paste(settled, 0, 0);
    if ghost {
        board = append_ghost(&board, settled, piece);
    }
    append(&board, piece)
}

/// Every cell holds a non-empty value
pub fn is_full_row(row: &[Option<u8>]) -> bool {
    !row.is_empty() && row.iter().all(|cell| matches!(cell, Some(v) if *v != EMPTY))
}

/// Remove full rows, inserting an empty row at the top for each
///
/// Rows are scanned top to bottom. Removing row `i` and pushing a fresh row
/// in at index 0 leaves every row below `i` where it was, so one pass finds
/// all of them. Returns the new board and the indices that were cleared.
pub fn clear_full_rows(settled: &Grid<u8>) -> (Grid<u8>, ClearedRows) {
    let width = settled.width();
    let mut cleared = ClearedRows::new();
    let mut board = settled.clone();
    for (i, row) in settled.rows().iter().enumerate() {
        if !is_full_row(row) {
            continue;
        }
        board = board
            .delete_row(i)
            .splice_row(0, vec![Some(EMPTY); width]);
        // Capacity is BOARD_HEIGHT
        let _ = cleared.try_push(i);
    }
    (board, cleared)
}
