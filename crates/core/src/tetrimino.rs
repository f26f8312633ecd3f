//! Tetrimino module - the active piece as a value, plus the free functions
//! that test, move and merge it against a board.
//!
//! A board is any `Grid<u8>` where 0 is empty. Coordinates are `(x, y)` with
//! x growing right and y growing down; a piece's `(x, y)` is the board
//! position of its shape's top-left cell.

use blockfall_grid::{Grid, Turn};
use serde::{Deserialize, Serialize};

use crate::pieces::{kicks, pattern, spawn_position};
use crate::types::{PieceKind, Rotation, EMPTY, GHOST_OFFSET};

/// The falling piece
///
/// `time_existed` counts ticks since spawn; `time_simulated` is how many of
/// those ticks gravity has already accounted for. The gap between them is
/// what lets fall speed be a fraction of a row per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tetrimino {
    pub kind: PieceKind,
    pub shape: Grid<u8>,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
    pub time_existed: u64,
    pub time_simulated: f64,
}

impl Tetrimino {
    /// Create a new piece at its spawn position
    pub fn new(kind: PieceKind) -> Self {
        let (x, y) = spawn_position(kind);
        Self {
            kind,
            shape: pattern(kind),
            rotation: Rotation::Spawn,
            x,
            y,
            time_existed: 0,
            time_simulated: 0.0,
        }
    }

    /// Board positions of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        occupied_offsets(&self.shape).map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Directional blocking flags reported by [`blocked`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Blocked {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

/// `(dx, dy)` of every non-zero cell of `shape`
fn occupied_offsets(shape: &Grid<u8>) -> impl Iterator<Item = (i32, i32)> + '_ {
    shape
        .iter()
        .filter(|&(_, _, v)| matches!(v, Some(&value) if value != EMPTY))
        .map(|(r, c, _)| (c as i32, r as i32))
}

fn board_size(board: &Grid<u8>) -> (i32, i32) {
    let (w, h) = board.dimensions();
    (w as i32, h as i32)
}

/// Board cell holds a non-empty value. Absent cells are not solid.
#[inline]
fn solid(board: &Grid<u8>, x: i32, y: i32) -> bool {
    matches!(board.get(y as isize, x as isize), Some(Some(&v)) if v != EMPTY)
}

/// Overlap test used for spawn legality and kick candidates
///
/// True when any occupied cell of `shape` placed at `(x, y)` falls outside
/// the board or lands on a cell that is not empty.
pub fn overlaps(board: &Grid<u8>, x: i32, y: i32, shape: &Grid<u8>) -> bool {
    let (w, h) = board_size(board);
    occupied_offsets(shape).any(|(dx, dy)| {
        let (bx, by) = (x + dx, y + dy);
        if bx < 0 || by < 0 || bx >= w || by >= h {
            return true;
        }
        board.get(by as isize, bx as isize) != Some(Some(&EMPTY))
    })
}

/// Directional collision used while driving the piece
///
/// Each side is blocked when some occupied cell's neighbour on that side is
/// past the board edge or already filled. Several flags can be set at once.
pub fn blocked(board: &Grid<u8>, piece: &Tetrimino) -> Blocked {
    let (w, h) = board_size(board);
    let mut out = Blocked::default();
    for (bx, by) in piece.cells() {
        out.left |= bx - 1 < 0 || solid(board, bx - 1, by);
        out.right |= bx + 1 > w - 1 || solid(board, bx + 1, by);
        out.top |= by - 1 < 0 || solid(board, bx, by - 1);
        out.bottom |= by + 1 > h - 1 || solid(board, bx, by + 1);
    }
    out
}

/// Rotate with wall kicks
///
/// Returns the rotated piece, or `None` when every kick offset overlaps, in
/// which case the caller keeps the piece it has. The O piece takes its
/// turned shape in place: no kick, no position change, and its rotation
/// index stays where it is.
pub fn rotate(board: &Grid<u8>, piece: &Tetrimino, turn: Turn) -> Option<Tetrimino> {
    let shape = piece.shape.rotate(turn);
    let rotation = match turn {
        Turn::Left => piece.rotation.rotate_ccw(),
        Turn::Right => piece.rotation.rotate_cw(),
    };

    let Some(offsets) = kicks(piece.kind, piece.rotation, rotation) else {
        return Some(Tetrimino {
            shape,
            ..piece.clone()
        });
    };

    offsets
        .iter()
        .map(|&(dx, dy)| (piece.x + dx, piece.y + dy))
        .find(|&(x, y)| !overlaps(board, x, y, &shape))
        .map(|(x, y)| Tetrimino {
            shape,
            rotation,
            x,
            y,
            ..piece.clone()
        })
}

/// Lowest `y` the piece can drop to from where it is
///
/// Walks down until the shape would overlap and returns the row before
/// that. A piece that already overlaps gets `y - 1`.
pub fn ghost_y(board: &Grid<u8>, piece: &Tetrimino) -> i32 {
    let limit = piece.y.max(0) + board_size(board).1 + 1;
    let mut y = piece.y;
    while y <= limit && !overlaps(board, piece.x, y, &piece.shape) {
        y += 1;
    }
    y - 1
}

/// Write the piece's cells into a copy of `board` at row `y`, adding
/// `offset` to each color. Cells off the board are dropped; empty shape
/// cells never overwrite.
fn stamp(board: &Grid<u8>, piece: &Tetrimino, y: i32, offset: u8) -> Grid<u8> {
    let (w, h) = board_size(board);
    let mut rows = board.to_rows();
    for (r, c, v) in piece.shape.iter() {
        let Some(&value) = v else { continue };
        if value == EMPTY {
            continue;
        }
        let (bx, by) = (piece.x + c as i32, y + r as i32);
        if bx < 0 || by < 0 || bx >= w || by >= h {
            continue;
        }
        let Some(cell) = rows
            .get_mut(by as usize)
            .and_then(|row| row.get_mut(bx as usize))
        else {
            continue;
        };
        // Ghost cells only land on empty cells
        if offset != EMPTY && matches!(cell, Some(v) if *v != EMPTY) {
            continue;
        }
        if let Some(stamped) = value.checked_add(offset) {
            *cell = Some(stamped);
        }
    }
    Grid::from_cells(rows)
}

/// Merge the piece into `board` at its current position
pub fn append(board: &Grid<u8>, piece: &Tetrimino) -> Grid<u8> {
    stamp(board, piece, piece.y, 0)
}

/// Draw the ghost (color + 7) into `board` at the landing row computed
/// against `settled`
pub fn append_ghost(board: &Grid<u8>, settled: &Grid<u8>, piece: &Tetrimino) -> Grid<u8> {
    stamp(board, piece, ghost_y(settled, piece), GHOST_OFFSET)
}
