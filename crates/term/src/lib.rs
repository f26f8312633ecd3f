//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids
//! widget and layout crates and renders into a plain framebuffer that is
//! diffed and flushed to the terminal.
//!
//! - [`fb`]: styled character cells
//! - [`game_view`]: turns a core `Frame` into cells (pure, no I/O)
//! - [`renderer`]: raw-mode alternate screen plus diff flushing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_grid as grid;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
