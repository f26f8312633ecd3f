//! Core types module - shared data structures and constants
//!
//! Everything here is plain data: piece kinds, rotation indices, the logical
//! actions a player can issue, and the fixed tables that drive gravity and
//! scoring. Logic lives in `blockfall-core`.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 40 rows (indexed 0-39, y grows downward)
//! - **Hidden buffer**: rows 0-18 sit above the visible field
//!
//! # Gravity by Level
//!
//! `G` is measured in rows per tick. A piece falls one row every `1 / G`
//! ticks, so level 1 is roughly one row per second at 60 ticks per second
//! and level 15 drops more than two rows every tick.
//!
//! | Level | G |
//! |-------|---|
//! | 1 | 0.01667 |
//! | 5 | 0.04693 |
//! | 10 | 0.2598 |
//! | 15 | 2.36 |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (40 rows, including the hidden buffer)
pub const BOARD_HEIGHT: usize = 40;

/// Rows above the visible field
pub const HIDDEN_ROWS: usize = 19;

/// Rows drawn by a front end, starting at [`HIDDEN_ROWS`]
pub const VISIBLE_ROWS: usize = BOARD_HEIGHT - HIDDEN_ROWS;

/// Number of upcoming pieces kept in the preview queue
pub const QUEUE_LEN: usize = 3;

/// Empty board cell
pub const EMPTY: u8 = 0;

/// Added to a piece color to mark a ghost cell (1-7 become 8-14)
pub const GHOST_OFFSET: u8 = 7;

/// Highest reachable level
pub const MAX_LEVEL: u32 = 15;

/// Lines needed per level step
pub const LINES_PER_LEVEL: u32 = 10;

/// Fixed timestep interval (~60 ticks per second)
pub const TICK_MS: u64 = 16;

/// Rows-per-tick gravity for levels 1-15 (index 0 = level 1)
pub const GRAVITY_TABLE: [f64; MAX_LEVEL as usize] = [
    0.01667, 0.021017, 0.026977, 0.035256, 0.04693, 0.06361, 0.0879, 0.1236, 0.1775, 0.2598,
    0.388, 0.59, 0.92, 1.46, 2.36,
];

/// Score awarded for clearing N rows in one pass
///
/// - 1 row: 100
/// - 2 rows: 300
/// - 3 rows: 500
/// - 4 rows: 800
///
/// Larger clears cannot happen from a single lock and score nothing.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven tetrimino piece kinds
///
/// Each kind carries a fixed color index that doubles as the cell value
/// written into the board:
/// - **I** = 1, **J** = 2, **L** = 3, **O** = 4, **S** = 5, **T** = 6, **Z** = 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in color order. A fresh bag starts from this list.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Board cell value for this kind
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.color(), 1);
    /// assert_eq!(PieceKind::Z.color(), 7);
    /// ```
    pub fn color(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Cell value used when this kind is drawn as a ghost
    pub fn ghost_color(&self) -> u8 {
        self.color() + GHOST_OFFSET
    }

    /// Kind for a solid cell value (1-7)
    pub fn from_color(value: u8) -> Option<Self> {
        match value {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("J"), Some(PieceKind::J));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Upper-case letter used by front ends
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rotation index of a piece, 0-3
///
/// - **Spawn** (0): the pattern as defined
/// - **Right** (1): one clockwise quarter-turn
/// - **Flip** (2): two quarter-turns
/// - **Left** (3): one counter-clockwise quarter-turn
///
/// Serialized as its index so saved games keep the plain 0-3 value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Rotation {
    Spawn,
    Right,
    Flip,
    Left,
}

impl Rotation {
    /// Rotate clockwise, wrapping 3 -> 0
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::Spawn.rotate_cw(), Rotation::Right);
    /// assert_eq!(Rotation::Left.rotate_cw(), Rotation::Spawn);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::Spawn => Rotation::Right,
            Rotation::Right => Rotation::Flip,
            Rotation::Flip => Rotation::Left,
            Rotation::Left => Rotation::Spawn,
        }
    }

    /// Rotate counter-clockwise, wrapping 0 -> 3
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::Spawn.rotate_ccw(), Rotation::Left);
    /// assert_eq!(Rotation::Right.rotate_ccw(), Rotation::Spawn);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::Spawn => Rotation::Left,
            Rotation::Left => Rotation::Flip,
            Rotation::Flip => Rotation::Right,
            Rotation::Right => Rotation::Spawn,
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            Rotation::Spawn => 0,
            Rotation::Right => 1,
            Rotation::Flip => 2,
            Rotation::Left => 3,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rotation::Spawn),
            1 => Some(Rotation::Right),
            2 => Some(Rotation::Flip),
            3 => Some(Rotation::Left),
            _ => None,
        }
    }
}

impl From<Rotation> for u8 {
    fn from(value: Rotation) -> Self {
        value.index()
    }
}

impl TryFrom<u8> for Rotation {
    type Error = InvalidRotation;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rotation::from_index(value).ok_or(InvalidRotation(value))
    }
}

/// A rotation index outside 0-3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRotation(pub u8);

impl fmt::Display for InvalidRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rotation index {} is outside 0..=3", self.0)
    }
}

impl std::error::Error for InvalidRotation {}

/// Logical inputs accepted by the game state
///
/// The first seven map 1:1 to piece operations; `Pause` and `Restart`
/// drive the run status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Drop to the ghost row and lock
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Swap the active piece with the hold slot
    Hold,
    /// Toggle pause state
    Pause,
    /// Start a fresh game
    Restart,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Hold => "hold",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}
