//! Persistence module - what survives between sessions
//!
//! A [`Profile`] carries the ghost setting, the leaderboard and, when the
//! player quit mid-game, a [`Snapshot`](crate::core::Snapshot) to resume
//! from. Front ends talk to storage only through [`ProfileStore`].

pub mod error;
pub mod file;
pub mod profile;

pub use blockfall_core as core;

pub use error::StoreError;
pub use file::{JsonFileStore, MemoryStore, ProfileStore};
pub use profile::{Entry, Leaderboard, LogOutcome, Profile};
