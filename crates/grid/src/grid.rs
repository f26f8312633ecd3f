//! Grid value type: construction, dimensions and single-cell access.
//!
//! A grid is a list of rows; each row is a list of cells. A cell is either a
//! value (`Some(v)`) or the null marker (`None`). Rows may differ in length.
//! Anything past the end of a row, or past the last row, is *absent*.
//!
//! Coordinates are `(row, column)`. Queries take signed coordinates so that
//! neighbour lookups next to the border need no special casing; producers
//! take `usize`.

use serde::{Deserialize, Serialize};

/// `(row, column)` of an existing cell.
pub type Coord = (usize, usize);

/// Result of a cell lookup.
///
/// - `None`: absent (out of bounds)
/// - `Some(None)`: a null cell
/// - `Some(Some(v))`: a value
pub type Lookup<'a, T> = Option<Option<&'a T>>;

/// Immutable 2D grid. Every producing operation returns a new grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid<T> {
    rows: Vec<Vec<Option<T>>>,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Grid<T> {
    /// Grid with no rows
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Wrap raw rows, nulls included.
    pub fn from_cells(rows: Vec<Vec<Option<T>>>) -> Self {
        Self { rows }
    }

    /// Build from rows of plain values (no nulls).
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Some).collect())
                .collect(),
        }
    }

    /// `h` rows of `w` cells, each initialised by `f(row, column)`.
    pub fn build_with(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> Option<T>) -> Self {
        let rows = (0..h).map(|r| (0..w).map(|c| f(r, c)).collect()).collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Option<T>>] {
        &self.rows
    }

    pub fn into_cells(self) -> Vec<Vec<Option<T>>> {
        self.rows
    }

    /// Number of stored rows, trailing empty rows included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// `(width, height)` in a single pass.
    ///
    /// Width is the longest row. Height is one past the last row that has any
    /// cells, so trailing empty rows do not count.
    pub fn dimensions(&self) -> (usize, usize) {
        let mut w = 0;
        let mut h = 0;
        for (i, row) in self.rows.iter().enumerate() {
            if !row.is_empty() {
                h = i + 1;
            }
            w = w.max(row.len());
        }
        (w, h)
    }

    pub fn width(&self) -> usize {
        self.dimensions().0
    }

    pub fn height(&self) -> usize {
        self.dimensions().1
    }

    pub fn area(&self) -> usize {
        let (w, h) = self.dimensions();
        w * h
    }

    /// Number of existing cells (nulls count, absent cells do not).
    pub fn cells(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Look up a cell. Out-of-bounds coordinates, negative ones included,
    /// yield `None` rather than an error.
    pub fn get(&self, r: isize, c: isize) -> Lookup<'_, T> {
        if r < 0 || c < 0 {
            return None;
        }
        self.at(r as usize, c as usize)
    }

    #[inline]
    pub(crate) fn at(&self, r: usize, c: usize) -> Lookup<'_, T> {
        self.rows.get(r)?.get(c).map(Option::as_ref)
    }

    /// Cell value, treating absent and null alike.
    #[inline]
    pub fn value(&self, r: usize, c: usize) -> Option<&T> {
        self.at(r, c).flatten()
    }

    /// The cell exists (it may be null).
    pub fn exists(&self, r: isize, c: isize) -> bool {
        self.get(r, c).is_some()
    }

    /// The cell holds a value (not null, not absent).
    pub fn occupied(&self, r: isize, c: isize) -> bool {
        matches!(self.get(r, c), Some(Some(_)))
    }

    /// Inside the cell's own row. Same as [`Grid::exists`] because rows have
    /// no interior gaps.
    pub fn in_bounds(&self, r: isize, c: isize) -> bool {
        r >= 0 && c >= 0 && (c as usize) < self.rows.get(r as usize).map_or(0, Vec::len)
    }

    /// Visit every existing cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Option<&T>)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, cell)| (r, c, cell.as_ref()))
        })
    }

    /// Remap every existing cell. The shape is preserved.
    pub fn map<U>(&self, mut f: impl FnMut(Option<&T>, usize, usize) -> Option<U>) -> Grid<U> {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, cell)| f(cell.as_ref(), r, c))
                    .collect()
            })
            .collect();
        Grid { rows }
    }

    /// Every existing cell becomes null.
    pub fn nullify(&self) -> Self {
        self.map(|_, _, _| None)
    }
}

impl<T: Clone> Grid<T> {
    /// `h` rows of `w` cells, each set to `fill`.
    pub fn build(w: usize, h: usize, fill: impl Into<Option<T>>) -> Self {
        let fill = fill.into();
        Self {
            rows: vec![vec![fill; w]; h],
        }
    }

    /// Owned copy of the raw rows.
    pub fn to_rows(&self) -> Vec<Vec<Option<T>>> {
        self.rows.clone()
    }

    /// `h` rows of `w` null cells.
    pub fn blank(w: usize, h: usize) -> Self {
        Self::build(w, h, None)
    }

    /// Lay out a flat row-major slice. Missing cells become null.
    pub fn from_flat(cells: &[T], rows: usize, cols: usize) -> Self {
        Self::build_with(cols, rows, |r, c| cells.get(r * cols + c).cloned())
    }

    /// Return a grid with `(r, c)` set. Missing rows are added as empty rows
    /// and missing cells inside the row as nulls.
    pub fn set(&self, r: usize, c: usize, value: impl Into<Option<T>>) -> Self {
        let mut rows = self.rows.clone();
        if rows.len() <= r {
            rows.resize_with(r + 1, Vec::new);
        }
        let row = &mut rows[r];
        if row.len() <= c {
            row.resize_with(c + 1, || None);
        }
        row[c] = value.into();
        Self { rows }
    }

    /// Copy the cell at `(r1, c1)` over `(r2, c2)`. An absent source copies
    /// as null.
    pub fn copy(&self, r1: usize, c1: usize, r2: usize, c2: usize) -> Self {
        let cell = self.value(r1, c1).cloned();
        self.set(r2, c2, cell)
    }

    /// Move a cell, leaving null behind.
    pub fn move_cell(&self, r1: usize, c1: usize, r2: usize, c2: usize) -> Self {
        self.copy(r1, c1, r2, c2).set(r1, c1, None)
    }

    pub fn swap(&self, r1: usize, c1: usize, r2: usize, c2: usize) -> Self {
        let a = self.value(r1, c1).cloned();
        let b = self.value(r2, c2).cloned();
        self.set(r2, c2, a).set(r1, c1, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid<u8> {
        Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]])
    }

    #[test]
    fn test_build_fills_every_cell() {
        let g: Grid<u8> = Grid::build(3, 2, 0);
        assert_eq!(g.dimensions(), (3, 2));
        assert!(g.iter().all(|(_, _, v)| v == Some(&0)));

        let blank: Grid<u8> = Grid::blank(2, 2);
        assert!(blank.iter().all(|(_, _, v)| v.is_none()));
    }

    #[test]
    fn test_get_distinguishes_absent_null_and_value() {
        let g = Grid::from_cells(vec![vec![Some(0u8), None]]);
        assert_eq!(g.get(0, 0), Some(Some(&0)));
        assert_eq!(g.get(0, 1), Some(None));
        assert_eq!(g.get(0, 2), None);
        assert_eq!(g.get(-1, 0), None);
        assert_eq!(g.get(1, 0), None);
    }

    #[test]
    fn test_set_returns_new_grid() {
        let g = sample();
        let h = g.set(0, 0, 9);
        assert_eq!(g.get(0, 0), Some(Some(&1)));
        assert_eq!(h.get(0, 0), Some(Some(&9)));
    }

    #[test]
    fn test_set_materializes_missing_rows() {
        let g: Grid<u8> = Grid::new();
        let h = g.set(2, 1, 7);
        assert_eq!(h.row_count(), 3);
        assert_eq!(h.rows()[0].len(), 0);
        assert_eq!(h.get(2, 0), Some(None));
        assert_eq!(h.get(2, 1), Some(Some(&7)));
        assert_eq!(h.dimensions(), (2, 3));
    }

    #[test]
    fn test_dimensions_ignore_trailing_empty_rows() {
        let g = Grid::from_rows(vec![vec![1u8], vec![1, 2, 3], vec![], vec![]]);
        assert_eq!(g.dimensions(), (3, 2));
        assert_eq!(g.area(), 6);
        assert_eq!(g.cells(), 4);
    }

    #[test]
    fn test_from_flat_pads_short_input_with_null() {
        let g = Grid::from_flat(&[1u8, 2, 3, 4, 5], 2, 3);
        assert_eq!(g.get(1, 1), Some(Some(&5)));
        assert_eq!(g.get(1, 2), Some(None));
    }

    #[test]
    fn test_cell_moves() {
        let g = sample();
        let moved = g.move_cell(0, 0, 1, 2);
        assert_eq!(moved.get(0, 0), Some(None));
        assert_eq!(moved.get(1, 2), Some(Some(&1)));

        let swapped = g.swap(0, 0, 1, 2);
        assert_eq!(swapped.get(0, 0), Some(Some(&6)));
        assert_eq!(swapped.get(1, 2), Some(Some(&1)));

        let copied = g.copy(0, 1, 0, 0);
        assert_eq!(copied.get(0, 0), Some(Some(&2)));
        assert_eq!(copied.get(0, 1), Some(Some(&2)));
    }

    #[test]
    fn test_occupied_and_exists() {
        let g = Grid::from_cells(vec![vec![Some(1u8), None]]);
        assert!(g.occupied(0, 0));
        assert!(!g.occupied(0, 1));
        assert!(g.exists(0, 1));
        assert!(!g.exists(0, 2));
        assert!(g.in_bounds(0, 1));
        assert!(!g.in_bounds(-1, 0));
    }

    #[test]
    fn test_serializes_as_nested_arrays() {
        let g = Grid::from_cells(vec![vec![Some(1u8), None], vec![Some(0)]]);
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[1,null],[0]]");
        let back: Grid<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
