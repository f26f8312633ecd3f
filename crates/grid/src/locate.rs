//! Where a cell sits in the grid, and what surrounds it.

use crate::direction::{Boundary, Corner, Edge, Quadrant};
use crate::grid::{Grid, Lookup};

/// Straight-line distance between two `(row, column)` coordinates.
pub fn euclidean(a: (isize, isize), b: (isize, isize)) -> f64 {
    let dr = (b.0 - a.0) as f64;
    let dc = (b.1 - a.1) as f64;
    (dr * dr + dc * dc).sqrt()
}

/// King-move distance.
pub fn chebyshev(a: (isize, isize), b: (isize, isize)) -> usize {
    a.0.abs_diff(b.0).max(a.1.abs_diff(b.1))
}

/// Taxicab distance.
pub fn manhattan(a: (isize, isize), b: (isize, isize)) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

impl<T> Grid<T> {
    /// On the bounding rectangle's border.
    pub fn is_edge(&self, r: usize, c: usize) -> bool {
        !self.edges(r, c).is_empty()
    }

    /// Border sides the coordinate lies on, in the order top, left, bottom,
    /// right.
    pub fn edges(&self, r: usize, c: usize) -> Vec<Edge> {
        let (w, h) = self.dimensions();
        let mut out = Vec::new();
        if r == 0 {
            out.push(Edge::Top);
        }
        if c == 0 {
            out.push(Edge::Left);
        }
        if r + 1 == h {
            out.push(Edge::Bottom);
        }
        if c + 1 == w {
            out.push(Edge::Right);
        }
        out
    }

    pub fn is_corner(&self, r: usize, c: usize) -> bool {
        !self.corners(r, c).is_empty()
    }

    /// Corners of the bounding rectangle at the coordinate, clockwise from
    /// top-left. A 1x1 grid's only cell is all four.
    pub fn corners(&self, r: usize, c: usize) -> Vec<Corner> {
        let (w, h) = self.dimensions();
        let (top, left) = (r == 0, c == 0);
        let (bottom, right) = (r + 1 == h, c + 1 == w);
        let mut out = Vec::new();
        if top && left {
            out.push(Corner::TopLeft);
        }
        if top && right {
            out.push(Corner::TopRight);
        }
        if bottom && right {
            out.push(Corner::BottomRight);
        }
        if bottom && left {
            out.push(Corner::BottomLeft);
        }
        out
    }

    /// First or last cell of its own row or column. Unlike [`Grid::is_edge`]
    /// this follows ragged rows.
    pub fn is_boundary(&self, r: usize, c: usize) -> bool {
        !self.boundaries(r, c).is_empty()
    }

    /// Order: upper, left, right, lower.
    pub fn boundaries(&self, r: usize, c: usize) -> Vec<Boundary> {
        let row_len = self.rows().get(r).map_or(0, Vec::len);
        let col_len = self
            .rows()
            .iter()
            .rposition(|row| row.len() > c)
            .map_or(0, |last| last + 1);
        let mut out = Vec::new();
        if r == 0 {
            out.push(Boundary::Upper);
        }
        if c == 0 {
            out.push(Boundary::Left);
        }
        if c + 1 == row_len {
            out.push(Boundary::Right);
        }
        if r + 1 == col_len {
            out.push(Boundary::Lower);
        }
        out
    }

    /// The single middle cell. Grids with an even width or height have none.
    pub fn is_center(&self, r: usize, c: usize) -> bool {
        let (w, h) = self.dimensions();
        w % 2 == 1 && h % 2 == 1 && r == h / 2 && c == w / 2
    }

    /// Strictly inside the border. Grids narrower or shorter than 3 have no
    /// interior.
    pub fn is_interior(&self, r: usize, c: usize) -> bool {
        let (w, h) = self.dimensions();
        w >= 3 && h >= 3 && r > 0 && c > 0 && r + 1 < h && c + 1 < w
    }

    /// Quadrants containing the coordinate. The middle row and column count
    /// as part of the upper and left halves.
    pub fn quadrants(&self, r: usize, c: usize) -> Vec<Quadrant> {
        let (w, h) = self.dimensions();
        let (mid_c, mid_r) = (w / 2, h / 2);
        let (upper, left) = (r <= mid_r, c <= mid_c);
        let quadrant = match (upper, left) {
            (true, false) => Quadrant::I,
            (true, true) => Quadrant::II,
            (false, true) => Quadrant::III,
            (false, false) => Quadrant::IV,
        };
        vec![quadrant]
    }

    /// `[N, W, E, S]`. Out-of-bounds slots stay `None`.
    pub fn orthogonals(&self, r: isize, c: isize) -> [Lookup<'_, T>; 4] {
        [
            self.get(r - 1, c),
            self.get(r, c - 1),
            self.get(r, c + 1),
            self.get(r + 1, c),
        ]
    }

    /// `[NW, NE, SW, SE]`.
    pub fn diagonals(&self, r: isize, c: isize) -> [Lookup<'_, T>; 4] {
        [
            self.get(r - 1, c - 1),
            self.get(r - 1, c + 1),
            self.get(r + 1, c - 1),
            self.get(r + 1, c + 1),
        ]
    }

    /// `[NW, N, NE, W, E, SW, S, SE]`.
    pub fn neighbors(&self, r: isize, c: isize) -> [Lookup<'_, T>; 8] {
        let [n, w, e, s] = self.orthogonals(r, c);
        let [nw, ne, sw, se] = self.diagonals(r, c);
        [nw, n, ne, w, e, sw, s, se]
    }

    /// Coordinates around `(r, c)` in [`Grid::neighbors`] order. Unless
    /// `allow_out_of_bounds` is set, coordinates outside the bounding
    /// rectangle are skipped.
    pub fn surrounds(&self, r: isize, c: isize, allow_out_of_bounds: bool) -> Vec<(isize, isize)> {
        let (w, h) = self.dimensions();
        let (w, h) = (w as isize, h as isize);
        const OFFSETS: [(isize, isize); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        OFFSETS
            .iter()
            .map(|(dr, dc)| (r + dr, c + dc))
            .filter(|&(nr, nc)| allow_out_of_bounds || ((0..h).contains(&nr) && (0..w).contains(&nc)))
            .collect()
    }
}

impl<T: Clone> Grid<T> {
    /// The 3x3 block centred on `(r, c)`. Absent cells come back null.
    pub fn neighborhood(&self, r: isize, c: isize) -> Self {
        self.harvest(r - 1, c - 1, 3, 3)
    }
}
