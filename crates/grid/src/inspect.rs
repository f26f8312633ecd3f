//! Shape predicates and grid comparison.

use crate::direction::Axis;
use crate::grid::{Coord, Grid};

impl<T> Grid<T> {
    /// Some row differs in length from the first one.
    pub fn is_ragged(&self) -> bool {
        match self.rows().first() {
            Some(first) => self.rows().iter().any(|row| row.len() != first.len()),
            None => false,
        }
    }

    pub fn is_rectangular(&self) -> bool {
        !self.is_ragged()
    }

    /// No rows, or a single empty row.
    pub fn is_empty(&self) -> bool {
        match self.rows() {
            [] => true,
            [only] => only.is_empty(),
            _ => false,
        }
    }

    /// Empty, or every existing cell is null.
    pub fn is_blank(&self) -> bool {
        self.is_empty() || self.iter().all(|(_, _, v)| v.is_none())
    }

    /// Exactly one cell.
    pub fn is_singular(&self) -> bool {
        self.dimensions() == (1, 1)
    }

    /// At least one null cell.
    pub fn is_sparse(&self) -> bool {
        self.iter().any(|(_, _, v)| v.is_none())
    }

    pub fn is_dense(&self) -> bool {
        !self.is_sparse()
    }
}

impl<T: PartialEq> Grid<T> {
    /// Same dimensions, and every cell of the bounding rectangle matches.
    /// An absent cell only matches another absent cell.
    pub fn same(&self, other: &Grid<T>) -> bool {
        let (w, h) = self.dimensions();
        if (w, h) != other.dimensions() {
            return false;
        }
        (0..h).all(|i| (0..w).all(|j| self.at(i, j) == other.at(i, j)))
    }

    pub fn different(&self, other: &Grid<T>) -> bool {
        !self.same(other)
    }

    /// Coordinates that differ, row-major, over the union of both bounding
    /// rectangles. A row missing from either grid contributes every column.
    pub fn diff(&self, other: &Grid<T>) -> Vec<Coord> {
        let (w1, h1) = self.dimensions();
        let (w2, h2) = other.dimensions();
        let (w, h) = (w1.max(w2), h1.max(h2));
        let mut out = Vec::new();
        for i in 0..h {
            let missing = self.rows().get(i).is_none() || other.rows().get(i).is_none();
            for j in 0..w {
                if missing || self.at(i, j) != other.at(i, j) {
                    out.push((i, j));
                }
            }
        }
        out
    }

    /// Some cell holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|(_, _, v)| v == Some(value))
    }

    /// `sub` appears somewhere inside `self`, cell for cell.
    ///
    /// Anchors are tried in row-major order wherever a cell equals `sub`'s
    /// top-left cell and the whole of `sub` still fits below it. The scan
    /// stops at the first full match. An empty `sub` is never included.
    pub fn includes(&self, sub: &Grid<T>) -> bool {
        let (w1, h1) = self.dimensions();
        let (w2, h2) = sub.dimensions();
        if w2 == 0 || h2 == 0 || w2 > w1 || h2 > h1 {
            return false;
        }
        let Some(first) = sub.at(0, 0) else {
            return false;
        };
        for r in 0..=(h1 - h2) {
            for c in 0..self.rows()[r].len() {
                if self.at(r, c) != Some(first) {
                    continue;
                }
                let matched = sub
                    .iter()
                    .all(|(i, j, v)| self.at(r + i, c + j) == Some(v));
                if matched {
                    return true;
                }
            }
        }
        false
    }

    /// Mirror symmetry. `Axis::Y` compares each row with its reverse;
    /// `Axis::X` compares each column with its reverse.
    pub fn symmetrical(&self, axis: Axis) -> bool
    where
        T: Clone,
    {
        match axis {
            Axis::Y => self.rows().iter().all(|row| row.iter().eq(row.iter().rev())),
            Axis::X => self.transpose().symmetrical(Axis::Y),
        }
    }
}
