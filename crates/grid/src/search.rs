//! Predicate search and connected-region discovery.

use crate::grid::{Coord, Grid};

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl<T> Grid<T> {
    /// Coordinates of every existing cell matching `pred`, row-major.
    pub fn find(&self, mut pred: impl FnMut(Option<&T>, usize, usize) -> bool) -> Vec<Coord> {
        self.iter()
            .filter(|&(r, c, v)| pred(v, r, c))
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    /// Maximal connected regions of matching cells.
    ///
    /// Cells connect through their four orthogonal neighbours, plus the four
    /// diagonal ones when `include_diagonals` is set. The scan covers the
    /// bounding rectangle; absent cells are offered to `pred` as null.
    /// Groups come back in discovery order with the seed first, and no cell
    /// belongs to two groups.
    pub fn contiguous(
        &self,
        mut pred: impl FnMut(Option<&T>, usize, usize) -> bool,
        include_diagonals: bool,
    ) -> Vec<Vec<Coord>> {
        let (w, h) = self.dimensions();
        let mut visited = vec![false; w * h];
        let mut groups = Vec::new();
        let mut stack: Vec<Coord> = Vec::new();

        for r in 0..h {
            for c in 0..w {
                if visited[r * w + c] {
                    continue;
                }
                visited[r * w + c] = true;
                if !pred(self.value(r, c), r, c) {
                    continue;
                }

                let mut group = Vec::new();
                stack.push((r, c));
                while let Some((cr, cc)) = stack.pop() {
                    group.push((cr, cc));
                    let diagonals: &[(isize, isize)] = if include_diagonals { &DIAGONAL } else { &[] };
                    for (dr, dc) in ORTHOGONAL.iter().chain(diagonals) {
                        let nr = cr as isize + dr;
                        let nc = cc as isize + dc;
                        if nr < 0 || nc < 0 || nr >= h as isize || nc >= w as isize {
                            continue;
                        }
                        let (nr, nc) = (nr as usize, nc as usize);
                        let idx = nr * w + nc;
                        if visited[idx] {
                            continue;
                        }
                        visited[idx] = true;
                        if pred(self.value(nr, nc), nr, nc) {
                            stack.push((nr, nc));
                        }
                    }
                }
                groups.push(group);
            }
        }
        groups
    }

    /// Regions connected in all eight directions.
    pub fn touching(&self, pred: impl FnMut(Option<&T>, usize, usize) -> bool) -> Vec<Vec<Coord>> {
        self.contiguous(pred, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(rows: Vec<Vec<u8>>) -> Grid<u8> {
        Grid::from_rows(rows)
    }

    fn is_one(v: Option<&u8>, _: usize, _: usize) -> bool {
        v == Some(&1)
    }

    #[test]
    fn test_find_is_row_major() {
        let a = g(vec![vec![1, 0, 1], vec![0, 1, 0]]);
        assert_eq!(a.find(is_one), vec![(0, 0), (0, 2), (1, 1)]);
        assert_eq!(a.find(|_, r, _| r == 1).len(), 3);
    }

    #[test]
    fn test_contiguous_orthogonal() {
        let a = g(vec![
            vec![1, 1, 0, 0],
            vec![0, 1, 0, 1],
            vec![0, 0, 1, 1],
        ]);
        let mut groups = a.contiguous(is_one, false);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0][0], (0, 0));
        for group in &mut groups {
            group.sort();
        }
        assert_eq!(groups[0], vec![(0, 0), (0, 1), (1, 1)]);
        assert_eq!(groups[1], vec![(1, 3), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_touching_joins_diagonals() {
        let a = g(vec![
            vec![1, 1, 0, 0],
            vec![0, 1, 0, 1],
            vec![0, 0, 1, 1],
        ]);
        let groups = a.touching(is_one);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 6);
    }

    #[test]
    fn test_contiguous_never_double_counts() {
        let a: Grid<u8> = Grid::build(20, 20, 1);
        for diagonals in [false, true] {
            let groups = a.contiguous(is_one, diagonals);
            assert_eq!(groups.len(), 1);
            assert_eq!(groups[0].len(), 400);
            let mut cells = groups[0].clone();
            cells.sort();
            cells.dedup();
            assert_eq!(cells.len(), 400);
        }
    }

    #[test]
    fn test_contiguous_handles_large_boards() {
        let a: Grid<u8> = Grid::build(200, 200, 1);
        let groups = a.contiguous(is_one, false);
        assert_eq!(groups[0].len(), 40_000);
    }

    #[test]
    fn test_contiguous_offers_absent_cells_as_null() {
        let a = Grid::from_cells(vec![vec![Some(1u8), Some(1)], vec![Some(1)]]);
        let groups = a.contiguous(|v, _, _| v.is_none(), false);
        assert_eq!(groups, vec![vec![(1, 1)]]);
    }
}
