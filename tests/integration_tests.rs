//! Integration tests for the game loop, persistence and rendering

use blockfall::core::tetrimino::{blocked, ghost_y, overlaps, rotate};
use blockfall::core::{empty_board, GameState, SevenBag, Snapshot, Status, Tetrimino};
use blockfall::grid::Turn;
use blockfall::store::{Entry, LogOutcome, MemoryStore, Profile, ProfileStore};
use blockfall::term::{GameView, Viewport};
use blockfall::types::{GameAction, PieceKind, Rotation, QUEUE_LEN};

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert_eq!(state.status(), Status::Running);
    assert_eq!(state.queue().len(), QUEUE_LEN);

    let x = state.active().x;
    if state.apply_action(GameAction::MoveLeft) {
        assert_eq!(state.active().x, x - 1);
    }
    state.apply_action(GameAction::RotateCw);
    assert!(state.apply_action(GameAction::HardDrop));
    assert_eq!(state.active().y, blockfall::core::spawn_position(state.active().kind).1);

    assert!(state.apply_action(GameAction::Pause));
    assert!(!state.apply_action(GameAction::HardDrop));
    assert!(state.apply_action(GameAction::Pause));
    assert!(state.running());
}

#[test]
fn test_kick_symmetry_for_every_kind() {
    let board = empty_board();
    for kind in PieceKind::ALL {
        if kind == PieceKind::O {
            continue;
        }
        let mut piece = Tetrimino::new(kind);
        piece.y = 20;
        for _ in 0..4 {
            let cw = rotate(&board, &piece, Turn::Right).unwrap();
            let back = rotate(&board, &cw, Turn::Left).unwrap();
            assert_eq!((back.x, back.y, back.rotation), (piece.x, piece.y, piece.rotation));
            assert_eq!(back.shape, piece.shape, "{kind}");
            piece = cw;
        }
        assert_eq!(piece.rotation, Rotation::Spawn);
    }
}

#[test]
fn test_ghost_lands_on_stack() {
    let board = empty_board();
    for kind in PieceKind::ALL {
        let piece = Tetrimino::new(kind);
        let g = ghost_y(&board, &piece);
        assert!(g >= piece.y);
        assert!(!overlaps(&board, piece.x, g, &piece.shape));
        assert!(overlaps(&board, piece.x, g + 1, &piece.shape));
        let mut landed = piece.clone();
        landed.y = g;
        assert!(blocked(&board, &landed).bottom);
    }
}

#[test]
fn test_bag_fairness_over_many_cycles() {
    let mut bag = SevenBag::new(31337);
    for _ in 0..50 {
        let mut seen = [0u8; 8];
        for _ in 0..7 {
            seen[bag.draw().color() as usize] += 1;
        }
        assert_eq!(&seen[1..], &[1; 7]);
    }
}

#[test]
fn test_game_runs_to_game_over_under_gravity() {
    let mut state = GameState::new(2);
    let mut ticks = 0u32;
    while !state.game_over() {
        state.tick();
        ticks += 1;
        assert!(ticks < 1_000_000, "gravity must eventually lock pieces");
        assert_eq!(state.queue().len(), QUEUE_LEN);
    }
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(state.apply_action(GameAction::Restart));
    assert!(state.running());
}

#[test]
fn test_profile_session_round_trip() {
    let mut state = GameState::new(99);
    for _ in 0..3 {
        state.apply_action(GameAction::HardDrop);
    }
    state.apply_action(GameAction::Hold);

    let mut store = MemoryStore::new();
    let mut profile = Profile::default();
    profile.saved_game = Some(state.snapshot());
    assert_eq!(
        profile.leaderboard.log(Entry::from_stats("ana", state.stats())),
        LogOutcome::Added
    );
    store.save(&profile).unwrap();

    // Through JSON, as the file store does it
    let json = serde_json::to_string(&store.load().unwrap().unwrap()).unwrap();
    let mut loaded: Profile = serde_json::from_str(&json).unwrap();
    let snapshot: Snapshot = loaded.saved_game.take().unwrap();
    let mut resumed = GameState::restore(snapshot).unwrap();

    assert_eq!(resumed.hold_piece(), state.hold_piece());
    assert_eq!(resumed.active().kind, state.active().kind);
    assert_eq!(resumed.settled(), state.settled());
    for _ in 0..14 {
        assert_eq!(resumed.queue(), state.queue());
        resumed.apply_action(GameAction::HardDrop);
        state.apply_action(GameAction::HardDrop);
    }
    assert_eq!(loaded.leaderboard.entries().len(), 1);
}

#[test]
fn test_render_frame_of_running_game() {
    let state = GameState::new(5);
    let fb = GameView::default().render(&state.frame(), Viewport::new(80, 30));
    let text: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(text.contains("SCORE"));
    assert!(text.contains("NEXT"));
    assert!(text.contains('░'));
}
