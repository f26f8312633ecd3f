//! Whole-grid rearrangements: transposition, quarter-turns, mirrors, pans.

use crate::direction::{Axis, Direction, Turn};
use crate::grid::Grid;

impl<T: Clone> Grid<T> {
    /// Flip about the main diagonal. Ragged input produces nulls where a
    /// column was shorter than its neighbours.
    pub fn transpose(&self) -> Self {
        let mut out: Vec<Vec<Option<T>>> = Vec::new();
        for (i, row) in self.rows().iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if out.len() <= j {
                    out.resize_with(j + 1, Vec::new);
                }
                let column = &mut out[j];
                column.resize_with(i, || None);
                column.push(cell.clone());
            }
        }
        Grid::from_cells(out)
    }

    /// Flip about the secondary diagonal.
    pub fn antitranspose(&self) -> Self {
        self.rrotate().vflip()
    }

    /// Reverse the row order (flip about the x-axis).
    pub fn vflip(&self) -> Self {
        Grid::from_cells(self.rows().iter().rev().cloned().collect())
    }

    /// Mirror every row (flip about the y-axis).
    pub fn hflip(&self) -> Self {
        Grid::from_cells(
            self.rows()
                .iter()
                .map(|row| row.iter().rev().cloned().collect())
                .collect(),
        )
    }

    pub fn flip(&self, axis: Axis) -> Self {
        match axis {
            Axis::X => self.vflip(),
            Axis::Y => self.hflip(),
        }
    }

    /// Quarter-turn counter-clockwise.
    pub fn lrotate(&self) -> Self {
        self.transpose().vflip()
    }

    /// Quarter-turn clockwise.
    pub fn rrotate(&self) -> Self {
        self.transpose().hflip()
    }

    pub fn rotate(&self, turn: Turn) -> Self {
        match turn {
            Turn::Left => self.lrotate(),
            Turn::Right => self.rrotate(),
        }
    }

    /// Circular shift, camera-style: panning `Up` moves the last row to the
    /// top, panning `Left` moves the last column to the front. A `steps` of 0
    /// counts as 1.
    pub fn pan(&self, direction: Direction, steps: usize) -> Self {
        let steps = steps.max(1);
        match direction {
            Direction::Up => self.cycle_rows(steps, true),
            Direction::Down => self.cycle_rows(steps, false),
            Direction::Left => self.transpose().cycle_rows(steps, true).transpose(),
            Direction::Right => self.transpose().cycle_rows(steps, false).transpose(),
        }
    }

    /// Move the content itself: `slide(d)` is `pan` in the opposite direction.
    pub fn slide(&self, direction: Direction, steps: usize) -> Self {
        self.pan(direction.opposite(), steps)
    }

    fn cycle_rows(&self, steps: usize, toward_bottom: bool) -> Self {
        let mut rows = self.rows().to_vec();
        if rows.is_empty() {
            return Grid::from_cells(rows);
        }
        let k = steps % rows.len();
        if toward_bottom {
            rows.rotate_right(k);
        } else {
            rows.rotate_left(k);
        }
        Grid::from_cells(rows)
    }

    /// Fisher-Yates shuffle of all cells, keeping every row's length.
    ///
    /// `pick(n)` must return an index in `0..n`; larger values are clamped.
    pub fn shuffle(&self, mut pick: impl FnMut(usize) -> usize) -> Self {
        let mut cells = self.flatten();
        for i in (1..cells.len()).rev() {
            let j = pick(i + 1).min(i);
            cells.swap(i, j);
        }
        let mut it = cells.into_iter();
        Grid::from_cells(
            self.rows()
                .iter()
                .map(|row| it.by_ref().take(row.len()).collect())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(rows: Vec<Vec<u8>>) -> Grid<u8> {
        Grid::from_rows(rows)
    }

    #[test]
    fn test_transpose_rectangular() {
        let a = g(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(a.transpose(), g(vec![vec![1, 4], vec![2, 5], vec![3, 6]]));
        assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn test_transpose_ragged_fills_gaps_with_null() {
        let a = g(vec![vec![1], vec![2, 3]]);
        let t = a.transpose();
        assert_eq!(t.rows()[0], vec![Some(1), Some(2)]);
        assert_eq!(t.rows()[1], vec![None, Some(3)]);
    }

    #[test]
    fn test_quarter_turns() {
        let a = g(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(a.lrotate(), g(vec![vec![2, 4], vec![1, 3]]));
        assert_eq!(a.rrotate(), g(vec![vec![3, 1], vec![4, 2]]));
        assert_eq!(a.rotate(Turn::Left), a.lrotate());
    }

    #[test]
    fn test_four_turns_round_trip() {
        let a = g(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let mut l = a.clone();
        let mut r = a.clone();
        for _ in 0..4 {
            l = l.lrotate();
            r = r.rrotate();
        }
        assert_eq!(l, a);
        assert_eq!(r, a);
        assert_eq!(a.lrotate().rrotate(), a);
    }

    #[test]
    fn test_flips() {
        let a = g(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(a.flip(Axis::X), g(vec![vec![3, 4], vec![1, 2]]));
        assert_eq!(a.flip(Axis::Y), g(vec![vec![2, 1], vec![4, 3]]));
        assert_eq!(a.antitranspose(), g(vec![vec![4, 2], vec![3, 1]]));
    }

    #[test]
    fn test_pan_and_slide() {
        let a = g(vec![vec![1], vec![2], vec![3]]);
        assert_eq!(a.pan(Direction::Up, 1), g(vec![vec![3], vec![1], vec![2]]));
        assert_eq!(a.pan(Direction::Down, 1), g(vec![vec![2], vec![3], vec![1]]));
        assert_eq!(a.slide(Direction::Down, 1), a.pan(Direction::Up, 1));
        assert_eq!(a.pan(Direction::Up, 0), a.pan(Direction::Up, 1));
        assert_eq!(a.pan(Direction::Up, 3), a);

        let b = g(vec![vec![1, 2, 3]]);
        assert_eq!(b.pan(Direction::Left, 1), g(vec![vec![3, 1, 2]]));
        assert_eq!(b.slide(Direction::Left, 1), g(vec![vec![2, 3, 1]]));
    }

    #[test]
    fn test_shuffle_keeps_cells_and_row_lengths() {
        let a = g(vec![vec![1, 2, 3], vec![4], vec![5, 6]]);
        let mut state = 7usize;
        let s = a.shuffle(|n| {
            state = state.wrapping_mul(31).wrapping_add(17);
            state % n
        });
        let lens: Vec<usize> = s.rows().iter().map(Vec::len).collect();
        assert_eq!(lens, vec![3, 1, 2]);
        let mut values: Vec<u8> = s.flatten().into_iter().flatten().collect();
        values.sort();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }
}
