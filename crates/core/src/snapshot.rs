//! Read-only copies of session state for renderers and tests.

use crate::piece::Piece;
use crate::types::{Cell, PieceKind, Rotation, SessionState, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_ROW};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TimersSnapshot {
    pub fall_ms: u32,
    pub lock_ms: u32,
    pub rotation_cooldown_ms: u32,
    pub hard_drop_cooldown_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    pub width: u16,
    pub height: u16,
    /// Locked cells, row-major
    pub board: Vec<Cell>,
    pub active: Piece,
    /// Landing position of the active piece; absent after game over
    pub ghost: Option<Piece>,
    pub next_queue: Vec<PieceKind>,
    pub state: SessionState,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub elapsed_ms: u64,
    pub timers: TimersSnapshot,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: vec![None; BOARD_WIDTH as usize * BOARD_HEIGHT as usize],
            active: Piece::new(PieceKind::I, Rotation::North, 0, SPAWN_ROW),
            ghost: None,
            next_queue: Vec::new(),
            state: SessionState::Running,
            score: 0,
            lines: 0,
            level: 1,
            elapsed_ms: 0,
            timers: TimersSnapshot::default(),
        }
    }
}

impl SessionSnapshot {
    /// Locked cell at (x, y); `None` outside the board or when empty
    pub fn cell(&self, x: i16, y: i16) -> Cell {
        if x < 0 || y < 0 || x >= self.width as i16 || y >= self.height as i16 {
            return None;
        }
        self.board[y as usize * self.width as usize + x as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.board.chunks(self.width.max(1) as usize)
    }

    /// Whether the active piece covers (x, y)
    pub fn active_covers(&self, x: i16, y: i16) -> bool {
        self.active.occupied_cells().contains(&(x, y))
    }

    pub fn ghost_covers(&self, x: i16, y: i16) -> bool {
        self.ghost
            .is_some_and(|ghost| ghost.occupied_cells().contains(&(x, y)))
    }

    pub fn playable(&self) -> bool {
        self.state == SessionState::Running
    }
}
