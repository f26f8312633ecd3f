//! Snapshot module - the serializable save-game blob
//!
//! A snapshot carries everything needed to rebuild a [`GameState`] exactly:
//! the active piece's shape and rotation are stored as they are, never
//! re-derived from the kind.
//!
//! [`GameState`]: crate::game_state::GameState

use std::fmt;

use blockfall_grid::Grid;
use serde::{Deserialize, Serialize};

use crate::game_state::Stats;
use crate::rng::BagState;
use crate::tetrimino::{overlaps, Tetrimino};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY, MAX_LEVEL, QUEUE_LEN};

fn default_ghost() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub settled: Grid<u8>,
    pub active: Tetrimino,
    pub hold: Option<PieceKind>,
    pub hold_uses: u8,
    pub queue: Vec<PieceKind>,
    /// Rows per tick at the time of saving
    pub gravity: f64,
    pub stats: Stats,
    #[serde(default = "default_ghost")]
    pub ghost: bool,
    /// Absent in blobs written before the bag was saved
    #[serde(default)]
    pub bag: Option<BagState>,
}

impl Snapshot {
    /// Check the invariants a restored game relies on
    pub fn validate(&self) -> Result<(), RestoreError> {
        let (width, height) = self.settled.dimensions();
        if (width, height) != (BOARD_WIDTH, BOARD_HEIGHT) || self.settled.is_ragged() {
            return Err(RestoreError::BoardSize { width, height });
        }
        let max_color = PieceKind::ALL.len() as u8;
        if let Some((row, col, value)) = self
            .settled
            .iter()
            .find_map(|(r, c, v)| v.filter(|&&v| v > max_color).map(|&v| (r, c, v)))
        {
            return Err(RestoreError::SettledCell { row, col, value });
        }
        let color = self.active.kind.color();
        let mut occupied = 0;
        for (_, _, v) in self.active.shape.iter() {
            match v {
                Some(&EMPTY) | None => {}
                Some(&v) if v == color => occupied += 1,
                Some(&v) => return Err(RestoreError::PieceShape(v)),
            }
        }
        if occupied == 0 {
            return Err(RestoreError::PieceShape(EMPTY));
        }
        let piece = &self.active;
        if overlaps(&self.settled, piece.x, piece.y, &piece.shape) {
            return Err(RestoreError::PieceOverlap { x: piece.x, y: piece.y });
        }
        if self.hold_uses > 1 {
            return Err(RestoreError::HoldUses(self.hold_uses));
        }
        if self.queue.len() != QUEUE_LEN {
            return Err(RestoreError::QueueLength(self.queue.len()));
        }
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(RestoreError::Gravity(self.gravity));
        }
        if !(1..=MAX_LEVEL).contains(&self.stats.level) {
            return Err(RestoreError::Level(self.stats.level));
        }
        if let Some(bag) = &self.bag {
            let mut seen = [false; 8];
            for kind in &bag.remaining {
                let slot = &mut seen[kind.color() as usize];
                if *slot {
                    return Err(RestoreError::Bag);
                }
                *slot = true;
            }
        }
        Ok(())
    }
}

/// Why a snapshot cannot be restored
#[derive(Debug, Clone, PartialEq)]
pub enum RestoreError {
    /// Settled board is not 10x40
    BoardSize { width: usize, height: usize },
    QueueLength(usize),
    /// Gravity must be finite and positive
    Gravity(f64),
    Level(u32),
    /// Bag lists a kind twice
    Bag,
    /// Settled cell holds something other than empty or a piece color
    SettledCell { row: usize, col: usize, value: u8 },
    /// Active shape holds a value other than 0 or its kind's color, or no cells at all
    PieceShape(u8),
    /// Active piece is off the board or inside the stack
    PieceOverlap { x: i32, y: i32 },
    HoldUses(u8),
}

impl fmt::Display for RestoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestoreError::BoardSize { width, height } => write!(
                f,
                "settled board is {width}x{height}, expected {BOARD_WIDTH}x{BOARD_HEIGHT}"
            ),
            RestoreError::QueueLength(len) => {
                write!(f, "queue holds {len} pieces, expected {QUEUE_LEN}")
            }
            RestoreError::Gravity(g) => write!(f, "gravity {g} is not a positive number"),
            RestoreError::Level(level) => write!(f, "level {level} is outside 1..={MAX_LEVEL}"),
            RestoreError::Bag => f.write_str("bag lists the same piece twice"),
            RestoreError::SettledCell { row, col, value } => {
                write!(f, "settled cell ({row}, {col}) holds {value}")
            }
            RestoreError::PieceShape(value) => {
                write!(f, "active piece shape holds {value}, expected its own color")
            }
            RestoreError::PieceOverlap { x, y } => {
                write!(f, "active piece at ({x}, {y}) does not fit the board")
            }
            RestoreError::HoldUses(uses) => write!(f, "hold used {uses} times for one piece"),
        }
    }
}

impl std::error::Error for RestoreError {}
