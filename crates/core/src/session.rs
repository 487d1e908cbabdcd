//! Session module - the per-tick game state machine
//!
//! This module ties together all core components: board, pieces, bag, kicks
//! and scoring. It owns all mutable game state and advances it once per frame
//! from the elapsed time and the commands active during that frame.
//!
//! Within a tick the order is fixed: restart/pause/quit edges, cooldowns,
//! horizontal move, rotation, soft-drop flag, hard drop, gravity, lock delay.

use std::collections::VecDeque;

use log::{debug, info};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::kicks::try_rotate;
use crate::piece::Piece;
use crate::rng::Bag;
use crate::scoring::{calculate_drop_score, get_fall_interval_ms};
use crate::snapshot::{SessionSnapshot, TimersSnapshot};
use crate::types::{Command, InputFrame, PieceKind, SessionState};

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Pieces locked into the board (hard drop and lock delay can both fire)
    pub pieces_locked: u32,
    pub lines_cleared: u32,
    /// Board, bag and timers were reset this tick
    pub restarted: bool,
    /// The quit command was seen; exiting is up to the caller
    pub quit_requested: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    config: EngineConfig,
    board: Board,
    bag: Bag,
    next_queue: VecDeque<PieceKind>,
    active: Piece,
    state: SessionState,
    fall_timer_ms: u32,
    lock_timer_ms: u32,
    on_ground: bool,
    soft_dropping: bool,
    rotation_cooldown_ms: u32,
    hard_drop_cooldown_ms: u32,
    /// Time spent in `Running` since the last (re)start
    elapsed_ms: u64,
}

impl Session {
    /// Create a session on an empty board
    ///
    /// Fails if `config` does not validate.
    pub fn new(config: EngineConfig, seed: u32) -> Result<Self> {
        config.validate()?;
        let board = Board::new(config.width, config.height)?;
        Ok(Self::start(config, board, seed))
    }

    /// Classic 10x20 session with default timings
    pub fn with_seed(seed: u32) -> Self {
        Self::start(EngineConfig::default(), Board::standard(), seed)
    }

    /// Start from a prepared board (puzzles, scenarios)
    ///
    /// The board's dimensions override those in `config`. Restarting still
    /// resets to an empty board.
    pub fn with_board(config: EngineConfig, board: Board, seed: u32) -> Result<Self> {
        let config = EngineConfig {
            width: board.width(),
            height: board.height(),
            ..config
        };
        config.validate()?;
        Ok(Self::start(config, board, seed))
    }

    fn start(config: EngineConfig, board: Board, seed: u32) -> Self {
        let mut bag = Bag::new(seed);
        let next_queue = (0..config.preview_len).map(|_| bag.next_kind()).collect();
        // Placeholder until the first spawn below replaces it.
        let active = Piece::spawn(PieceKind::I, board.width());

        let mut session = Self {
            config,
            board,
            bag,
            next_queue,
            active,
            state: SessionState::Running,
            fall_timer_ms: 0,
            lock_timer_ms: 0,
            on_ground: false,
            soft_dropping: false,
            rotation_cooldown_ms: 0,
            hard_drop_cooldown_ms: 0,
            elapsed_ms: 0,
        };
        if !session.spawn_piece() {
            session.state = SessionState::GameOver;
        }
        session
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    /// Where the active piece would land if hard dropped now
    pub fn ghost(&self) -> Piece {
        self.active.moved(0, self.board.hard_drop_distance(&self.active))
    }

    /// Upcoming kinds, next to spawn first
    pub fn next_queue(&self) -> impl ExactSizeIterator<Item = PieceKind> + '_ {
        self.next_queue.iter().copied()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.board.score()
    }

    pub fn lines(&self) -> u32 {
        self.board.lines()
    }

    pub fn level(&self) -> u32 {
        self.board.level()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    pub fn lock_timer_ms(&self) -> u32 {
        self.lock_timer_ms
    }

    pub fn on_ground(&self) -> bool {
        self.on_ground
    }

    pub fn rotation_cooldown_ms(&self) -> u32 {
        self.rotation_cooldown_ms
    }

    pub fn hard_drop_cooldown_ms(&self) -> u32 {
        self.hard_drop_cooldown_ms
    }

    /// Seed that `restart` will use for the next bag
    pub fn seed(&self) -> u32 {
        self.bag.seed()
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.active;
        out.ghost = match self.state {
            SessionState::GameOver => None,
            _ => Some(self.ghost()),
        };
        out.next_queue.clear();
        out.next_queue.extend(self.next_queue());
        out.state = self.state;
        out.score = self.score();
        out.lines = self.lines();
        out.level = self.level();
        out.elapsed_ms = self.elapsed_ms;
        out.timers = TimersSnapshot {
            fall_ms: self.fall_timer_ms,
            lock_ms: self.lock_timer_ms,
            rotation_cooldown_ms: self.rotation_cooldown_ms,
            hard_drop_cooldown_ms: self.hard_drop_cooldown_ms,
        };
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Replace the active piece with the front of the preview queue
    ///
    /// Returns false if the new piece does not fit.
    fn spawn_piece(&mut self) -> bool {
        let kind = match self.next_queue.pop_front() {
            Some(kind) => kind,
            None => self.bag.next_kind(),
        };
        self.next_queue.push_back(self.bag.next_kind());
        self.active = Piece::spawn(kind, self.board.width());
        debug!("spawned {:?} at ({}, {})", kind, self.active.x, self.active.y);
        self.board.is_valid(&self.active)
    }

    /// Lock the active piece, spawn the next one and reset the fall/lock timers
    fn lock_active(&mut self, events: &mut TickEvents) {
        let cleared = self.board.lock(&self.active);
        events.pieces_locked += 1;
        events.lines_cleared += cleared as u32;

        let spawned = self.spawn_piece();
        self.fall_timer_ms = 0;
        self.lock_timer_ms = 0;
        self.on_ground = false;

        if !spawned || self.board.is_game_over() {
            self.state = SessionState::GameOver;
            info!(
                "game over: score={} lines={} level={}",
                self.score(),
                self.lines(),
                self.level()
            );
        }
    }

    /// Move the active piece if the board allows it
    pub(crate) fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        let moved = self.active.moved(dx, dy);
        if self.board.is_valid(&moved) {
            self.active = moved;
            true
        } else {
            false
        }
    }

    /// Rotate the active piece through the kick list
    pub(crate) fn try_rotate(&mut self, delta: i8) -> bool {
        match try_rotate(&self.board, &self.active, delta) {
            Some(rotated) => {
                self.active = rotated;
                true
            }
            None => false,
        }
    }

    /// Drop the active piece to the floor and lock it immediately
    ///
    /// Returns the number of rows dropped.
    pub(crate) fn hard_drop(&mut self, events: &mut TickEvents) -> u32 {
        let distance = self.board.hard_drop_distance(&self.active);
        let cells = distance as u32;
        self.board.add_score(calculate_drop_score(cells, true));
        self.active = self.active.moved(0, distance);
        self.lock_active(events);
        cells
    }

    /// Current gravity interval
    pub fn fall_interval_ms(&self) -> u32 {
        if self.soft_dropping {
            self.config.soft_drop_interval_ms
        } else {
            get_fall_interval_ms(self.level())
        }
    }

    /// Reset board, bag, preview queue and timers, then spawn
    pub fn restart(&mut self) {
        let seed = self.bag.seed();
        let board = Board::empty(self.config.width, self.config.height);
        *self = Self::start(self.config, board, seed);
        info!("restarted with seed {}", seed);
    }

    /// Flip between `Running` and `Paused`; ignored after game over
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            SessionState::Running => SessionState::Paused,
            SessionState::Paused => SessionState::Running,
            SessionState::GameOver => SessionState::GameOver,
        };
        info!("session state: {:?}", self.state);
    }

    /// Advance the session by `elapsed_ms` with the commands active this frame
    pub fn tick(&mut self, elapsed_ms: u32, input: &InputFrame) -> TickEvents {
        let mut events = TickEvents {
            quit_requested: input.contains(Command::Quit),
            ..TickEvents::default()
        };

        if input.contains(Command::Restart) {
            self.restart();
            events.restarted = true;
            return events;
        }
        if input.contains(Command::PauseToggle) {
            self.toggle_pause();
        }

        self.rotation_cooldown_ms = self.rotation_cooldown_ms.saturating_sub(elapsed_ms);
        self.hard_drop_cooldown_ms = self.hard_drop_cooldown_ms.saturating_sub(elapsed_ms);

        if self.state != SessionState::Running {
            return events;
        }
        self.elapsed_ms += elapsed_ms as u64;

        // Horizontal move: one cell per tick, left wins.
        if input.contains(Command::MoveLeft) {
            self.try_move(-1, 0);
        } else if input.contains(Command::MoveRight) {
            self.try_move(1, 0);
        }

        // Rotation: the cooldown restarts whether or not the rotation fit.
        if self.rotation_cooldown_ms == 0 {
            let delta = if input.contains(Command::RotateCcw) {
                Some(-1)
            } else if input.contains(Command::RotateCw) {
                Some(1)
            } else {
                None
            };
            if let Some(delta) = delta {
                self.try_rotate(delta);
                self.rotation_cooldown_ms = self.config.rotation_cooldown_ms;
            }
        }

        self.soft_dropping = input.contains(Command::SoftDrop);

        if self.hard_drop_cooldown_ms == 0 && input.contains(Command::HardDrop) {
            self.hard_drop(&mut events);
            self.hard_drop_cooldown_ms = self.config.hard_drop_cooldown_ms;
            if self.state != SessionState::Running {
                return events;
            }
        }

        let grounded_before = self.on_ground;
        let descended = self.apply_gravity(elapsed_ms);
        self.update_lock_delay(elapsed_ms, grounded_before && !descended, &mut events);

        events
    }

    /// Accumulate fall time and descend one row per elapsed interval
    ///
    /// Returns whether the piece moved down; any descent clears ground contact.
    fn apply_gravity(&mut self, elapsed_ms: u32) -> bool {
        let interval = self.fall_interval_ms();
        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        let mut descended = false;

        while self.fall_timer_ms >= interval {
            self.fall_timer_ms -= interval;
            if self.try_move(0, 1) {
                descended = true;
                self.on_ground = false;
                self.lock_timer_ms = 0;
                if self.soft_dropping {
                    self.board.add_score(calculate_drop_score(1, false));
                }
            } else {
                self.on_ground = true;
                break;
            }
        }
        descended
    }

    /// Track ground contact and lock once the delay has run out
    ///
    /// `grounded_before` is true only when the piece was resting before this
    /// tick's gravity step and gravity did not move it; the lock timer only
    /// starts counting on the tick after first contact.
    fn update_lock_delay(
        &mut self,
        elapsed_ms: u32,
        grounded_before: bool,
        events: &mut TickEvents,
    ) {
        if self.board.is_valid(&self.active.moved(0, 1)) {
            self.on_ground = false;
            self.lock_timer_ms = 0;
            return;
        }

        if grounded_before {
            self.lock_timer_ms = self.lock_timer_ms.saturating_add(elapsed_ms);
        } else {
            self.on_ground = true;
            self.lock_timer_ms = 0;
        }

        if self.on_ground && self.lock_timer_ms >= self.config.lock_delay_ms {
            self.lock_active(events);
        }
    }
}
