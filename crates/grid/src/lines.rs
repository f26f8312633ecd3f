//! Row and column access, editing and reduction.

use crate::grid::Grid;

impl<T: Clone> Grid<T> {
    pub fn row(&self, r: usize) -> Option<Vec<Option<T>>> {
        self.rows().get(r).cloned()
    }

    /// Column `c`, top to bottom, up to the last row that reaches it. Rows in
    /// between that are too short contribute null.
    pub fn column(&self, c: usize) -> Vec<Option<T>> {
        let len = self
            .rows()
            .iter()
            .rposition(|row| row.len() > c)
            .map_or(0, |last| last + 1);
        (0..len).map(|r| self.value(r, c).cloned()).collect()
    }

    pub fn top(&self) -> Option<Vec<Option<T>>> {
        self.rows().first().cloned()
    }

    /// Last row that has any cells.
    pub fn bottom(&self) -> Option<Vec<Option<T>>> {
        self.height().checked_sub(1).and_then(|r| self.row(r))
    }

    pub fn left(&self) -> Vec<Option<T>> {
        self.column(0)
    }

    pub fn right(&self) -> Vec<Option<T>> {
        match self.width().checked_sub(1) {
            Some(c) => self.column(c),
            None => Vec::new(),
        }
    }

    /// First longest row.
    pub fn widest(&self) -> Option<Vec<Option<T>>> {
        let mut best: Option<&Vec<Option<T>>> = None;
        for row in self.rows() {
            if best.map_or(true, |b| row.len() > b.len()) {
                best = Some(row);
            }
        }
        best.cloned()
    }

    /// First shortest row.
    pub fn thinnest(&self) -> Option<Vec<Option<T>>> {
        let mut best: Option<&Vec<Option<T>>> = None;
        for row in self.rows() {
            if best.map_or(true, |b| row.len() < b.len()) {
                best = Some(row);
            }
        }
        best.cloned()
    }

    /// First longest column.
    pub fn tallest(&self) -> Option<Vec<Option<T>>> {
        let (w, _) = self.dimensions();
        let mut best: Option<Vec<Option<T>>> = None;
        for c in 0..w {
            let col = self.column(c);
            if best.as_ref().map_or(true, |b| col.len() > b.len()) {
                best = Some(col);
            }
        }
        best
    }

    pub fn shortest(&self) -> Option<Vec<Option<T>>> {
        let (w, _) = self.dimensions();
        let mut best: Option<Vec<Option<T>>> = None;
        for c in 0..w {
            let col = self.column(c);
            if best.as_ref().map_or(true, |b| col.len() < b.len()) {
                best = Some(col);
            }
        }
        best
    }

    /// Replace row `r`. Out-of-range indices leave the grid unchanged.
    pub fn set_row(&self, r: usize, cells: Vec<Option<T>>) -> Self {
        let mut rows = self.to_rows();
        if let Some(row) = rows.get_mut(r) {
            *row = cells;
        }
        Grid::from_cells(rows)
    }

    /// Write `cells[i]` into row `i` at column `c`. Rows are extended with
    /// null where they are too short; extra rows are added as needed.
    pub fn set_column(&self, c: usize, cells: Vec<Option<T>>) -> Self {
        let mut rows = self.to_rows();
        if rows.len() < cells.len() {
            rows.resize_with(cells.len(), Vec::new);
        }
        for (row, cell) in rows.iter_mut().zip(cells) {
            if row.len() <= c {
                row.resize_with(c + 1, || None);
            }
            row[c] = cell;
        }
        Grid::from_cells(rows)
    }

    /// Set every existing cell of row `r`.
    pub fn fill_row(&self, r: usize, value: impl Into<Option<T>>) -> Self {
        let value = value.into();
        self.map(|cell, i, _| if i == r { value.clone() } else { cell.cloned() })
    }

    /// Set every existing cell of column `c`.
    pub fn fill_column(&self, c: usize, value: impl Into<Option<T>>) -> Self {
        let value = value.into();
        self.map(|cell, _, j| if j == c { value.clone() } else { cell.cloned() })
    }

    /// Insert a row before index `r`; `r == row_count()` appends.
    pub fn splice_row(&self, r: usize, cells: Vec<Option<T>>) -> Self {
        let mut rows = self.to_rows();
        if r <= rows.len() {
            rows.insert(r, cells);
        }
        Grid::from_cells(rows)
    }

    /// Insert `cells[i]` into row `i` before column `c`. Rows shorter than
    /// `c` are left alone.
    pub fn splice_column(&self, c: usize, cells: Vec<Option<T>>) -> Self {
        let mut rows = self.to_rows();
        for (row, cell) in rows.iter_mut().zip(cells) {
            if c <= row.len() {
                row.insert(c, cell);
            }
        }
        Grid::from_cells(rows)
    }

    pub fn delete_row(&self, r: usize) -> Self {
        let mut rows = self.to_rows();
        if r < rows.len() {
            rows.remove(r);
        }
        Grid::from_cells(rows)
    }

    pub fn delete_column(&self, c: usize) -> Self {
        let mut rows = self.to_rows();
        for row in &mut rows {
            if c < row.len() {
                row.remove(c);
            }
        }
        Grid::from_cells(rows)
    }

    /// Every existing cell, row-major.
    pub fn flatten(&self) -> Vec<Option<T>> {
        self.rows().iter().flatten().cloned().collect()
    }

    /// Every existing cell, column-major.
    pub fn squash(&self) -> Vec<Option<T>> {
        let (w, h) = self.dimensions();
        let mut out = Vec::new();
        for c in 0..w {
            for r in 0..h {
                if let Some(cell) = self.at(r, c) {
                    out.push(cell.cloned());
                }
            }
        }
        out
    }

    /// One value per column, computed from that column's cells and index.
    pub fn reduce_columns<U>(&self, mut f: impl FnMut(&[Option<T>], usize) -> U) -> Vec<U> {
        (0..self.width()).map(|c| f(&self.column(c), c)).collect()
    }
}

impl<T> Grid<T> {
    /// One value per row, computed from that row's cells and index.
    pub fn reduce_rows<U>(&self, mut f: impl FnMut(&[Option<T>], usize) -> U) -> Vec<U> {
        self.rows()
            .iter()
            .enumerate()
            .map(|(r, row)| f(row, r))
            .collect()
    }
}
