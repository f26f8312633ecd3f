//! blockfall (workspace facade crate).
//!
//! Re-exports the member crates under short paths
//! (`blockfall::{grid,core,input,term,store,types}`) and holds the binary's
//! start-up [`config`].

pub mod config;

pub use blockfall_core as core;
pub use blockfall_grid as grid;
pub use blockfall_input as input;
pub use blockfall_store as store;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use config::Config;
