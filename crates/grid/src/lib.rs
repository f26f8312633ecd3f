//! Immutable 2D grid engine
//!
//! [`Grid`] is a value type: every operation borrows its input and returns a
//! new grid (or a scalar). Nothing here knows about pieces or boards; the
//! game crates build on top of it.
//!
//! Cells are tri-state through [`Grid::get`]:
//!
//! ```
//! use blockfall_grid::Grid;
//!
//! let g = Grid::from_cells(vec![vec![Some(5u8), None]]);
//! assert_eq!(g.get(0, 0), Some(Some(&5))); // value
//! assert_eq!(g.get(0, 1), Some(None));     // null
//! assert_eq!(g.get(0, 2), None);           // absent
//! ```
//!
//! Directional operations take closed enums ([`Direction`], [`Turn`],
//! [`Axis`], [`Edge`]); parsing those from text is the only fallible step.

pub mod direction;
pub mod error;
pub mod grid;
pub mod inspect;
pub mod lines;
pub mod locate;
pub mod region;
pub mod search;
pub mod transform;

pub use direction::{Axis, Boundary, Corner, Direction, Edge, Quadrant, Turn};
pub use error::GridError;
pub use grid::{Coord, Grid, Lookup};
pub use locate::{chebyshev, euclidean, manhattan};
