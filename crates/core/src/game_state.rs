//! Game state module - the single owner of everything a running game needs
//!
//! The loop driver owns one [`GameState`] and calls [`GameState::tick`] once
//! per frame and [`GameState::apply_action`] once per input. Nothing else
//! holds game data; the renderer reads a [`Frame`] and persistence reads a
//! [`Snapshot`].

use std::collections::VecDeque;

use blockfall_grid::{Grid, Turn};
use serde::{Deserialize, Serialize};

use crate::board::{clear_full_rows, compose, empty_board};
use crate::rng::SevenBag;
use crate::scoring::{gravity_for_level, level_for_lines, line_score};
use crate::snapshot::{RestoreError, Snapshot};
use crate::tetrimino::{append, blocked, ghost_y, overlaps, rotate, Tetrimino};
use crate::types::{GameAction, PieceKind, QUEUE_LEN};

/// Run status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    Running,
    Paused,
    GameOver,
}

/// Player statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub score: u32,
    pub lines_cleared: u32,
    pub level: u32,
    /// Whole seconds of play
    pub time: u32,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            score: 0,
            lines_cleared: 0,
            level: 1,
            time: 0,
        }
    }

    /// Play time as `MM:SS`
    pub fn formatted_time(&self) -> String {
        format!("{:02}:{:02}", self.time / 60, self.time % 60)
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view handed to a renderer each frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    /// Settled cells, ghost (8-14) and active piece
    pub board: Grid<u8>,
    pub queue: &'a VecDeque<PieceKind>,
    pub hold: Option<PieceKind>,
    /// False once the current piece has used its hold
    pub hold_available: bool,
    pub stats: Stats,
    pub status: Status,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Locked cells only
    settled: Grid<u8>,
    active: Tetrimino,
    hold: Option<PieceKind>,
    /// Hold swaps used by the current piece (at most 1)
    hold_uses: u8,
    /// Upcoming kinds, always `QUEUE_LEN` long
    queue: VecDeque<PieceKind>,
    bag: SevenBag,
    /// Rows per tick
    gravity: f64,
    stats: Stats,
    status: Status,
    ghost: bool,
}

impl GameState {
    /// Create a new game with the given seed
    pub fn new(seed: u32) -> Self {
        let mut bag = SevenBag::new(seed);
        let mut queue: VecDeque<PieceKind> = (0..QUEUE_LEN).map(|_| bag.draw()).collect();
        let first = take_next(&mut queue, &mut bag);
        let stats = Stats::new();
        Self {
            settled: empty_board(),
            active: Tetrimino::new(first),
            hold: None,
            hold_uses: 0,
            queue,
            bag,
            gravity: gravity_for_level(stats.level),
            stats,
            status: Status::Running,
            ghost: true,
        }
    }

    /// Rebuild a game from a snapshot
    ///
    /// The restored game is running. Blobs without bag contents get a fresh
    /// bag seeded from their stats.
    pub fn restore(snapshot: Snapshot) -> Result<Self, RestoreError> {
        snapshot.validate()?;
        let bag = match &snapshot.bag {
            Some(state) => SevenBag::from_state(state),
            None => {
                let s = snapshot.stats;
                SevenBag::new(s.score ^ s.time.rotate_left(16) ^ s.lines_cleared.rotate_left(8))
            }
        };
        Ok(Self {
            settled: snapshot.settled,
            active: snapshot.active,
            hold: snapshot.hold,
            hold_uses: snapshot.hold_uses,
            queue: snapshot.queue.into_iter().collect(),
            bag,
            gravity: snapshot.gravity,
            stats: snapshot.stats,
            status: Status::Running,
            ghost: snapshot.ghost,
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            settled: self.settled.clone(),
            active: self.active.clone(),
            hold: self.hold,
            hold_uses: self.hold_uses,
            queue: self.queue.iter().copied().collect(),
            gravity: self.gravity,
            stats: self.stats,
            ghost: self.ghost,
            bag: Some(self.bag.state()),
        }
    }

    pub fn settled(&self) -> &Grid<u8> {
        &self.settled
    }

    pub fn active(&self) -> &Tetrimino {
        &self.active
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn hold_uses(&self) -> u8 {
        self.hold_uses
    }

    pub fn can_hold(&self) -> bool {
        self.hold_uses == 0
    }

    pub fn queue(&self) -> &VecDeque<PieceKind> {
        &self.queue
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn score(&self) -> u32 {
        self.stats.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn paused(&self) -> bool {
        self.status == Status::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == Status::GameOver
    }

    pub fn ghost_enabled(&self) -> bool {
        self.ghost
    }

    pub fn set_ghost(&mut self, enabled: bool) {
        self.ghost = enabled;
    }

    /// Landing row of the active piece
    pub fn ghost_y(&self) -> i32 {
        ghost_y(&self.settled, &self.active)
    }

    /// Composite board and side-panel data for the renderer
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            board: compose(&self.settled, &self.active, self.ghost),
            queue: &self.queue,
            hold: self.hold,
            hold_available: self.can_hold(),
            stats: self.stats,
            status: self.status,
        }
    }

    /// Spawn the next queued piece
    ///
    /// The queue is topped up from the bag so it stays `QUEUE_LEN` long.
    /// Returns false, and ends the game, when the new piece overlaps the
    /// settled board.
    pub fn spawn(&mut self) -> bool {
        let kind = take_next(&mut self.queue, &mut self.bag);
        self.active = Tetrimino::new(kind);
        self.check_spawn()
    }

    fn check_spawn(&mut self) -> bool {
        let t = &self.active;
        if overlaps(&self.settled, t.x, t.y, &t.shape) {
            self.status = Status::GameOver;
            return false;
        }
        true
    }

    /// Advance one logical frame
    ///
    /// Gravity first catches the piece up with the ticks it has existed,
    /// one row per `1 / G` ticks, locking it if it cannot fall. Then the
    /// piece's tick counter advances.
    pub fn tick(&mut self) {
        if !self.running() {
            return;
        }
        while (self.active.time_existed as f64) > self.active.time_simulated {
            if !blocked(&self.settled, &self.active).bottom {
                self.active.y += 1;
                self.active.time_simulated += 1.0 / self.gravity;
            } else {
                self.lock_piece();
                if !self.running() {
                    return;
                }
            }
        }
        self.active.time_existed += 1;
    }

    /// Advance the play clock by one second
    pub fn add_second(&mut self) {
        if self.running() {
            self.stats.time += 1;
        }
    }

    /// Apply a game action
    ///
    /// Returns true when the state changed. Piece actions are ignored unless
    /// the game is running.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => return self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                return true;
            }
            _ => {}
        }
        if !self.running() {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.shift(-1),
            GameAction::MoveRight => self.shift(1),
            GameAction::SoftDrop => {
                if blocked(&self.settled, &self.active).bottom {
                    return false;
                }
                self.active.y += 1;
                true
            }
            GameAction::HardDrop => {
                self.active.y = self.ghost_y();
                self.lock_piece();
                true
            }
            GameAction::RotateCw => self.turn(Turn::Right),
            GameAction::RotateCcw => self.turn(Turn::Left),
            GameAction::Hold => self.hold(),
            GameAction::Pause | GameAction::Restart => false,
        }
    }

    fn toggle_pause(&mut self) -> bool {
        self.status = match self.status {
            Status::Running => Status::Paused,
            Status::Paused => Status::Running,
            Status::GameOver => return false,
        };
        true
    }

    /// Fresh game seeded from the current bag; the ghost setting carries over
    fn restart(&mut self) {
        let ghost = self.ghost;
        *self = GameState::new(self.bag.next_seed());
        self.ghost = ghost;
    }

    fn shift(&mut self, dx: i32) -> bool {
        let b = blocked(&self.settled, &self.active);
        if (dx < 0 && b.left) || (dx > 0 && b.right) {
            return false;
        }
        self.active.x += dx;
        true
    }

    fn turn(&mut self, turn: Turn) -> bool {
        match rotate(&self.settled, &self.active, turn) {
            Some(next) if next != self.active => {
                self.active = next;
                true
            }
            _ => false,
        }
    }

    /// Swap the active piece with the hold slot, once per piece
    ///
    /// An empty slot takes the active kind and the next queued piece spawns.
    /// Otherwise the held kind comes back as a fresh piece at its spawn
    /// position and drops one row if it can.
    pub fn hold(&mut self) -> bool {
        if self.hold_uses != 0 {
            return false;
        }
        match self.hold.replace(self.active.kind) {
            None => {
                self.spawn();
            }
            Some(kind) => {
                self.active = Tetrimino::new(kind);
                if self.check_spawn() && !blocked(&self.settled, &self.active).bottom {
                    self.active.y += 1;
                }
            }
        }
        self.hold_uses += 1;
        true
    }

    /// Merge the active piece, clear rows, score, and spawn the next piece
    pub fn lock_piece(&mut self) {
        let merged = append(&self.settled, &self.active);
        let (settled, cleared) = clear_full_rows(&merged);
        self.settled = settled;
        self.score_clear(cleared.len());
        self.spawn();
        self.hold_uses = 0;
    }

    fn score_clear(&mut self, lines: usize) {
        if lines == 0 {
            return;
        }
        self.stats.lines_cleared += lines as u32;
        self.stats.score += line_score(lines);
        self.stats.level = level_for_lines(self.stats.lines_cleared);
        self.gravity = gravity_for_level(self.stats.level);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Pop the queue front and push a fresh draw behind it
fn take_next(queue: &mut VecDeque<PieceKind>, bag: &mut SevenBag) -> PieceKind {
    let kind = queue.pop_front().unwrap_or_else(|| bag.draw());
    while queue.len() < QUEUE_LEN {
        queue.push_back(bag.draw());
    }
    kind
}
