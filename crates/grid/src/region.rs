//! Region operations: cropping, padding, trimming and combining grids.

use crate::direction::Edge;
use crate::grid::Grid;

impl<T: Clone> Grid<T> {
    /// The `w`x`h` window at `(r, c)`, clipped to cells that exist. Rows and
    /// columns outside the grid are dropped, so the result may be smaller.
    pub fn crop(&self, r: isize, c: isize, w: usize, h: usize) -> Self {
        let (width, height) = self.dimensions();
        let r0 = r.max(0) as usize;
        let c0 = c.max(0) as usize;
        let r1 = (r + h as isize).clamp(0, height as isize) as usize;
        let c1 = (c + w as isize).clamp(0, width as isize) as usize;
        if r0 >= r1 || c0 >= c1 {
            return Grid::new();
        }
        Grid::build_with(c1 - c0, r1 - r0, |i, j| self.value(r0 + i, c0 + j).cloned())
    }

    /// The `w`x`h` window at `(r, c)`, always exactly that size. Cells that do
    /// not exist in `self` come back null.
    pub fn harvest(&self, r: isize, c: isize, w: usize, h: usize) -> Self {
        Grid::build_with(w, h, |i, j| {
            self.get(r + i as isize, c + j as isize).flatten().cloned()
        })
    }

    /// Every existing cell set to `value`; the shape is kept.
    pub fn fill(&self, value: impl Into<Option<T>>) -> Self {
        let value = value.into();
        self.map(|_, _, _| value.clone())
    }

    /// Overwrite the existing cells of a `w`x`h` window.
    pub fn fill_area(&self, r: isize, c: isize, w: usize, h: usize, value: impl Into<Option<T>>) -> Self {
        self.paste(&Grid::build(w, h, value), r, c)
    }

    /// Add `times` rows or columns of `value` on one edge. The result is
    /// rectangular; ragged gaps become null.
    pub fn pad(&self, edge: Edge, times: usize, value: impl Into<Option<T>>) -> Self {
        let value = value.into();
        let (w, h) = self.dimensions();
        match edge {
            Edge::Top => Grid::build_with(w, h + times, |i, j| {
                if i < times {
                    value.clone()
                } else {
                    self.value(i - times, j).cloned()
                }
            }),
            Edge::Bottom => Grid::build_with(w, h + times, |i, j| {
                if i >= h {
                    value.clone()
                } else {
                    self.value(i, j).cloned()
                }
            }),
            Edge::Left => Grid::build_with(w + times, h, |i, j| {
                if j < times {
                    value.clone()
                } else {
                    self.value(i, j - times).cloned()
                }
            }),
            Edge::Right => Grid::build_with(w + times, h, |i, j| {
                if j >= w {
                    value.clone()
                } else {
                    self.value(i, j).cloned()
                }
            }),
        }
    }

    /// Remove `num` rows or columns from one edge. `num` of 0 counts as 1.
    pub fn trim(&self, edge: Edge, num: usize) -> Self {
        let num = num.max(1);
        let (w, h) = self.dimensions();
        match edge {
            Edge::Top => self.crop(num as isize, 0, w, h.saturating_sub(num)),
            Edge::Bottom => self.crop(0, 0, w, h.saturating_sub(num)),
            Edge::Left => self.crop(0, num as isize, w.saturating_sub(num), h),
            Edge::Right => self.crop(0, 0, w.saturating_sub(num), h),
        }
    }

    /// Overlay `src` with its origin at `(r, c)`. Only cells that exist in
    /// `self` can be overwritten; cells of `src` that are absent leave the
    /// destination untouched. The shape of `self` never changes.
    pub fn paste(&self, src: &Grid<T>, r: isize, c: isize) -> Self {
        self.map(|cell, i, j| match src.get(i as isize - r, j as isize - c) {
            Some(v) => v.cloned(),
            None => cell.cloned(),
        })
    }

    /// Place `other` at `(r, c)` relative to `self`, growing the result so
    /// that both fit. Offsets may be negative. New cells are null and `other`
    /// wins where the two overlap.
    pub fn glue(&self, other: &Grid<T>, r: isize, c: isize) -> Self {
        let (w1, h1) = self.dimensions();
        let (w2, h2) = other.dimensions();
        let (r1, r2) = ((-r).max(0), r.max(0));
        let (c1, c2) = ((-c).max(0), c.max(0));
        let w = (c1 + w1 as isize).max(c2 + w2 as isize) as usize;
        let h = (r1 + h1 as isize).max(r2 + h2 as isize) as usize;
        Grid::blank(w, h).paste(self, r1, c1).paste(other, r2, c2)
    }

    /// Attach `other` flush against one edge.
    pub fn stitch(&self, other: &Grid<T>, edge: Edge) -> Self {
        let (w1, h1) = self.dimensions();
        let (w2, h2) = other.dimensions();
        match edge {
            Edge::Top => self.glue(other, -(h2 as isize), 0),
            Edge::Bottom => self.glue(other, h1 as isize, 0),
            Edge::Left => self.glue(other, 0, -(w2 as isize)),
            Edge::Right => self.glue(other, 0, w1 as isize),
        }
    }

    /// Make the grid rectangular: `height` rows of `width` cells, with every
    /// absent cell turned into null.
    pub fn tidy(&self) -> Self {
        let (w, h) = self.dimensions();
        Grid::build_with(w, h, |i, j| self.value(i, j).cloned())
    }
}
