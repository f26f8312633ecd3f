//! Grid engine behaviour through the facade

use blockfall::grid::{Axis, Direction, Edge, Grid, GridError, Turn};

fn sample() -> Grid<u8> {
    Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]])
}

#[test]
fn test_out_of_bounds_is_distinct_from_null() {
    let g: Grid<u8> = Grid::from_cells(vec![vec![Some(1), None]]);
    assert_eq!(g.get(0, 0), Some(Some(&1)));
    assert_eq!(g.get(0, 1), Some(None));
    assert_eq!(g.get(0, 2), None);
    assert_eq!(g.get(-1, 0), None);
}

#[test]
fn test_set_materializes_rows_and_leaves_input_alone() {
    let g: Grid<u8> = Grid::new();
    let h = g.set(2, 1, 7);
    assert!(g.is_empty());
    assert_eq!(h.get(2, 1), Some(Some(&7)));
    assert_eq!(h.get(2, 0), Some(None));
    assert_eq!(h.dimensions(), (2, 3));
}

#[test]
fn test_trailing_empty_rows_do_not_count() {
    let g: Grid<u8> = Grid::from_cells(vec![vec![Some(1)], vec![Some(2), None], vec![], vec![]]);
    assert_eq!(g.dimensions(), (2, 2));
}

#[test]
fn test_tidy_is_idempotent_on_dense_grids() {
    let g = sample();
    assert!(g.is_dense());
    assert_eq!(g.tidy(), g);
    assert_eq!(g.tidy().tidy(), g.tidy());
}

#[test]
fn test_four_rotations_round_trip() {
    let g = Grid::from_rows(vec![vec![1u8, 2], vec![3, 4], vec![5, 6]]);
    for turn in [Turn::Left, Turn::Right] {
        let mut r = g.clone();
        for _ in 0..4 {
            r = r.rotate(turn);
        }
        assert_eq!(r, g);
    }
    assert_eq!(g.lrotate().rrotate(), g);
    assert_eq!(g.rrotate().dimensions(), (3, 2));
}

#[test]
fn test_flips_and_symmetry() {
    let g = sample();
    assert_eq!(g.flip(Axis::Y), Grid::from_rows(vec![vec![3, 2, 1], vec![6, 5, 4]]));
    assert_eq!(g.flip(Axis::X), Grid::from_rows(vec![vec![4, 5, 6], vec![1, 2, 3]]));
    let palindrome = Grid::from_rows(vec![vec![1u8, 2, 1]]);
    assert!(palindrome.symmetrical(Axis::Y));
    assert!(!g.symmetrical(Axis::Y));
}

#[test]
fn test_slide_is_pan_in_the_opposite_direction() {
    let g = sample();
    for d in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
        assert_eq!(g.slide(d, 1), g.pan(d.opposite(), 1));
    }
    assert_eq!(g.pan(Direction::Left, 3), g);
}

#[test]
fn test_crop_clips_harvest_pads() {
    let g = sample();
    let cropped = g.crop(1, 1, 5, 5);
    assert_eq!(cropped, Grid::from_rows(vec![vec![5, 6]]));
    let harvested = g.harvest(1, 1, 3, 2);
    assert_eq!(harvested.dimensions(), (3, 2));
    assert_eq!(harvested.get(0, 0), Some(Some(&5)));
    assert_eq!(harvested.get(0, 2), Some(None));
    assert_eq!(harvested.get(1, 0), Some(None));
}

#[test]
fn test_pad_then_trim() {
    let g = sample();
    let padded = g.pad(Edge::Left, 2, 0);
    assert_eq!(padded.row(0), Some(vec![Some(0), Some(0), Some(1), Some(2), Some(3)]));
    assert_eq!(padded.trim(Edge::Left, 2), g);
    assert_eq!(g.pad(Edge::Bottom, 1, None::<u8>).dimensions(), (3, 3));
}

#[test]
fn test_paste_stays_inside_destination() {
    let dst: Grid<u8> = Grid::build(3, 3, 0);
    let src: Grid<u8> = Grid::build(2, 2, 9);
    let out = dst.paste(&src, 2, 2);
    assert_eq!(out.dimensions(), (3, 3));
    assert_eq!(out.get(2, 2), Some(Some(&9)));
    assert_eq!(out.get(1, 1), Some(Some(&0)));
}

#[test]
fn test_glue_grows_for_negative_offsets() {
    let a: Grid<u8> = Grid::build(2, 2, 1);
    let b: Grid<u8> = Grid::build(1, 1, 2);
    let out = a.glue(&b, -1, -1);
    assert_eq!(out.dimensions(), (3, 3));
    assert_eq!(out.get(0, 0), Some(Some(&2)));
    assert_eq!(out.get(0, 1), Some(None));
    assert_eq!(out.get(2, 2), Some(Some(&1)));
    assert_eq!(a.stitch(&b, Edge::Right).dimensions(), (3, 2));
}

#[test]
fn test_includes_finds_block_at_offset() {
    let mut g: Grid<u8> = Grid::build(4, 4, 0);
    for (r, c) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
        g = g.set(r, c, 5);
    }
    let block: Grid<u8> = Grid::build(2, 2, 5);
    assert!(g.includes(&block));
    assert!(!Grid::<u8>::build(4, 4, 0).includes(&block));
}

#[test]
fn test_find_is_row_major() {
    let g = Grid::from_rows(vec![vec![1u8, 0, 1], vec![0, 1, 0]]);
    assert_eq!(g.find(|v, _, _| v == Some(&1)), vec![(0, 0), (0, 2), (1, 1)]);
}

#[test]
fn test_contiguous_groups_partition_matches() {
    let g = Grid::from_rows(vec![
        vec![1u8, 1, 0, 1],
        vec![0, 1, 0, 1],
        vec![1, 0, 0, 0],
    ]);
    let four = g.contiguous(|v, _, _| v == Some(&1), false);
    assert_eq!(four.len(), 3);
    let eight = g.contiguous(|v, _, _| v == Some(&1), true);
    assert_eq!(eight.len(), 2);
    let total: usize = eight.iter().map(Vec::len).sum();
    assert_eq!(total, g.find(|v, _, _| v == Some(&1)).len());
}

#[test]
fn test_neighbors_are_positional() {
    let g = sample();
    let n = g.orthogonals(0, 0);
    // N, W, E, S
    assert_eq!(n, [None, None, Some(Some(&2)), Some(Some(&4))]);
    assert_eq!(g.neighbors(0, 0).len(), 8);
    assert_eq!(g.diagonals(0, 0)[3], Some(Some(&5)));
}

#[test]
fn test_direction_names_fail_fast() {
    assert_eq!("left".parse::<Direction>(), Ok(Direction::Left));
    assert!(matches!(
        "sideways".parse::<Direction>(),
        Err(GridError::UnknownDirection(_))
    ));
    assert!("diagonal".parse::<Axis>().is_err());
    assert!("middle".parse::<Edge>().is_err());
    assert!("twice".parse::<Turn>().is_err());
}
