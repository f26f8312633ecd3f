//! Pieces module - spawn patterns, spawn offsets and SRS kick tables
//!
//! Patterns are small rectangular grids whose non-zero cells carry the
//! piece's color index. Rotated shapes are derived from these with the grid
//! engine's quarter-turns; nothing here is ever mutated.
//! Reference: https://tetris.wiki/SRS

use blockfall_grid::Grid;

use crate::types::{PieceKind, Rotation};

/// Spawn pattern for a piece kind (rotation 0)
pub fn pattern(kind: PieceKind) -> Grid<u8> {
    let rows: Vec<Vec<u8>> = match kind {
        PieceKind::I => vec![
            vec![0, 0, 0, 0],
            vec![1, 1, 1, 1],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ],
        PieceKind::J => vec![vec![2, 0, 0], vec![2, 2, 2], vec![0, 0, 0]],
        PieceKind::L => vec![vec![0, 0, 3], vec![3, 3, 3], vec![0, 0, 0]],
        PieceKind::O => vec![vec![4, 4], vec![4, 4]],
        PieceKind::S => vec![vec![0, 5, 5], vec![5, 5, 0], vec![0, 0, 0]],
        PieceKind::T => vec![vec![0, 6, 0], vec![6, 6, 6], vec![0, 0, 0]],
        PieceKind::Z => vec![vec![7, 7, 0], vec![0, 7, 7], vec![0, 0, 0]],
    };
    Grid::from_rows(rows)
}

/// Board position `(x, y)` of a freshly spawned piece's top-left corner
///
/// The I piece sits one row higher because its pattern starts with an
/// empty row; the O piece is one column further right.
pub fn spawn_position(kind: PieceKind) -> (i32, i32) {
    match kind {
        PieceKind::I => (3, 17),
        PieceKind::O => (4, 18),
        _ => (3, 18),
    }
}

/// Five `(dx, dy)` offsets tried in order; the first is always `(0, 0)`
pub type Kicks = [(i32, i32); 5];

/// SRS wall kick data, one entry per rotation transition
/// Indexed by [`kick_index`]; y grows downward
pub type KickTable = [Kicks; 8];

/// Kicks shared by J, L, S, T and Z
pub const GENERAL_KICKS: KickTable = [
    // 0->1
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 1->0
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 1->2
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 2->1
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 2->3
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 3->2
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 3->0
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 0->3
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
];

/// I piece kick table (different from the general one)
pub const I_KICKS: KickTable = [
    // 0->1
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // 1->0
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 1->2
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 2->1
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 2->3
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 3->2
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // 3->0
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 0->3
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
];

/// Table slot for a transition between adjacent rotations
fn kick_index(from: Rotation, to: Rotation) -> Option<usize> {
    match (from, to) {
        (Rotation::Spawn, Rotation::Right) => Some(0),
        (Rotation::Right, Rotation::Spawn) => Some(1),
        (Rotation::Right, Rotation::Flip) => Some(2),
        (Rotation::Flip, Rotation::Right) => Some(3),
        (Rotation::Flip, Rotation::Left) => Some(4),
        (Rotation::Left, Rotation::Flip) => Some(5),
        (Rotation::Left, Rotation::Spawn) => Some(6),
        (Rotation::Spawn, Rotation::Left) => Some(7),
        _ => None,
    }
}

/// Kick offsets for rotating `kind` from `from` to `to`
///
/// `None` for the O piece, which never kicks, and for transitions that are
/// not a single quarter-turn.
pub fn kicks(kind: PieceKind, from: Rotation, to: Rotation) -> Option<&'static Kicks> {
    let table = match kind {
        PieceKind::O => return None,
        PieceKind::I => &I_KICKS,
        _ => &GENERAL_KICKS,
    };
    kick_index(from, to).map(|i| &table[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_carry_color() {
        for kind in PieceKind::ALL {
            let p = pattern(kind);
            assert!(p.is_rectangular());
            assert_eq!(p.width(), p.height());
            let cells: Vec<u8> = p.flatten().into_iter().flatten().filter(|&v| v != 0).collect();
            assert_eq!(cells.len(), 4, "{kind} should have four minos");
            assert!(cells.iter().all(|&v| v == kind.color()));
        }
    }

    #[test]
    fn test_spawn_positions() {
        assert_eq!(spawn_position(PieceKind::I), (3, 17));
        assert_eq!(spawn_position(PieceKind::O), (4, 18));
        assert_eq!(spawn_position(PieceKind::T), (3, 18));
    }

    #[test]
    fn test_every_kick_list_starts_with_identity() {
        for table in [&GENERAL_KICKS, &I_KICKS] {
            for kicks in table.iter() {
                assert_eq!(kicks[0], (0, 0));
            }
        }
    }

    #[test]
    fn test_kick_lookup() {
        assert_eq!(kicks(PieceKind::O, Rotation::Spawn, Rotation::Right), None);
        assert_eq!(kicks(PieceKind::T, Rotation::Spawn, Rotation::Flip), None);
        assert_eq!(
            kicks(PieceKind::I, Rotation::Spawn, Rotation::Right).map(|k| k[1]),
            Some((-2, 0))
        );
        assert_eq!(
            kicks(PieceKind::S, Rotation::Left, Rotation::Spawn).map(|k| k[4]),
            Some((-1, 2))
        );
    }

    #[test]
    fn test_reverse_transition_negates_kicks() {
        let pairs = [
            (Rotation::Spawn, Rotation::Right),
            (Rotation::Right, Rotation::Flip),
            (Rotation::Flip, Rotation::Left),
            (Rotation::Left, Rotation::Spawn),
        ];
        for kind in [PieceKind::I, PieceKind::T] {
            for (a, b) in pairs {
                let fwd = kicks(kind, a, b).unwrap();
                let back = kicks(kind, b, a).unwrap();
                for (f, r) in fwd.iter().zip(back.iter()) {
                    assert_eq!((f.0, f.1), (-r.0, -r.1));
                }
            }
        }
    }
}
