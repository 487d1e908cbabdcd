//! Shared vocabulary for the blockfall crates: piece kinds, rotations,
//! commands, colors and the classic rule constants.
//!
//! All types are plain data with no I/O, making them usable in any context
//! (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Classic playfield dimensions (configurable per session, see `EngineConfig`):
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn row**: -2, so freshly spawned pieces start above the visible board
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval (~60 FPS) |
//! | `BASE_FALL_MS` | 900 | Gravity interval at level 1 |
//! | `FALL_STEP_MS` | 60 | Gravity speed-up per level |
//! | `MIN_FALL_MS` | 70 | Gravity floor |
//! | `SOFT_DROP_INTERVAL_MS` | 30 | Gravity while soft dropping |
//! | `LOCK_DELAY_MS` | 500 | Time before a grounded piece locks |
//! | `ROTATION_COOLDOWN_MS` | 120 | Minimum time between rotation attempts |
//! | `HARD_DROP_COOLDOWN_MS` | 150 | Minimum time between hard drops |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{Command, InputFrame, PieceKind, Rotation, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.box_size(), 3);
//!
//! let rotation = Rotation::North.rotated_by(-1);
//! assert_eq!(rotation, Rotation::West);
//!
//! let frame = InputFrame::with(&[Command::HardDrop, Command::HardDrop]);
//! assert_eq!(frame.len(), 1);
//! assert!(!Command::HardDrop.is_edge());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use arrayvec::ArrayVec;
use thiserror::Error;

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u16 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u16 = 20;

/// Row at which new pieces are anchored (above the visible board)
pub const SPAWN_ROW: i16 = -2;

/// Default number of upcoming pieces shown in the preview queue
pub const PREVIEW_LEN: usize = 5;

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1
pub const BASE_FALL_MS: u32 = 900;

/// Gravity speed-up per level above 1
pub const FALL_STEP_MS: u32 = 60;

/// Gravity never gets faster than this
pub const MIN_FALL_MS: u32 = 70;

/// Gravity interval while the soft-drop command is held
pub const SOFT_DROP_INTERVAL_MS: u32 = 30;

/// Grace period before a grounded piece locks
pub const LOCK_DELAY_MS: u32 = 500;

/// Minimum time between two rotation attempts
pub const ROTATION_COOLDOWN_MS: u32 = 120;

/// Minimum time between two hard drops
pub const HARD_DROP_COOLDOWN_MS: u32 = 150;

/// Points per cell descended by gravity while soft dropping
pub const SOFT_DROP_BONUS: u32 = 1;

/// Points per cell descended by a hard drop
pub const HARD_DROP_BONUS: u32 = 2;

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table, indexed by number of rows cleared at once.
///
/// Multiplied by the current level. Clears of more than 4 rows (only possible
/// on custom boards with taller pieces, i.e. never with the standard catalog)
/// score as a 4-row clear.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_timing_defaults() {
        assert_eq!(BASE_FALL_MS, 900);
        assert_eq!(FALL_STEP_MS, 60);
        assert_eq!(MIN_FALL_MS, 70);
        assert_eq!(SOFT_DROP_INTERVAL_MS, 30);
        assert_eq!(LOCK_DELAY_MS, 500);
        assert_eq!(ROTATION_COOLDOWN_MS, 120);
        assert_eq!(HARD_DROP_COOLDOWN_MS, 150);
    }

    #[test]
    fn rotation_index_roundtrip_and_rejects_out_of_range() {
        for i in 0..4u8 {
            assert_eq!(Rotation::try_from(i).unwrap().index(), i);
        }
        assert_eq!(Rotation::try_from(4), Err(InvalidRotation(4)));
    }

    #[test]
    fn rotation_delta_wraps_both_ways() {
        assert_eq!(Rotation::North.rotated_by(1), Rotation::East);
        assert_eq!(Rotation::North.rotated_by(-1), Rotation::West);
        assert_eq!(Rotation::West.rotated_by(1), Rotation::North);
        assert_eq!(Rotation::East.rotated_by(6), Rotation::West);
        assert_eq!(Rotation::South.rotated_by(-9), Rotation::East);
    }

    #[test]
    fn input_frame_deduplicates_commands() {
        let mut frame = InputFrame::new();
        frame.push(Command::MoveLeft);
        frame.push(Command::MoveLeft);
        frame.push(Command::HardDrop);
        assert_eq!(frame.len(), 2);
        assert!(frame.contains(Command::HardDrop));
        assert!(!frame.contains(Command::Quit));
    }
}

/// The seven tetromino kinds
///
/// I and O live in a 4x4 box, the rest in 3x3 (see [`PieceKind::box_size`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in canonical order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Side length of the square bounding box the shape masks live in
    pub fn box_size(&self) -> u16 {
        match self {
            PieceKind::I | PieceKind::O => 4,
            _ => 3,
        }
    }

    /// Display color of the piece and of the cells it locks
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0, 240, 240),
            PieceKind::J => Rgb::new(0, 0, 240),
            PieceKind::L => Rgb::new(240, 160, 0),
            PieceKind::O => Rgb::new(240, 240, 0),
            PieceKind::S => Rgb::new(0, 240, 0),
            PieceKind::T => Rgb::new(160, 0, 240),
            PieceKind::Z => Rgb::new(240, 0, 0),
        }
    }
}

/// Rotation states, indexed 0-3
///
/// - **North**: Spawn orientation (index 0)
/// - **East**: Rotated 90° clockwise (index 1)
/// - **South**: Rotated 180° (index 2)
/// - **West**: Rotated 90° counter-clockwise (index 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

/// Raw rotation index outside `0..=3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rotation index {0} is outside 0..=3")]
pub struct InvalidRotation(pub u8);

impl Rotation {
    /// Index of this rotation in the shape catalog
    pub fn index(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Apply a signed number of quarter turns (positive = clockwise), modulo 4
    pub fn rotated_by(&self, delta: i8) -> Self {
        let index = (self.index() as i16 + delta as i16).rem_euclid(4) as u8;
        match index {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }
}

impl TryFrom<u8> for Rotation {
    type Error = InvalidRotation;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Rotation::North),
            1 => Ok(Rotation::East),
            2 => Ok(Rotation::South),
            3 => Ok(Rotation::West),
            other => Err(InvalidRotation(other)),
        }
    }
}

/// Discrete commands fed to the session once per tick
///
/// `MoveLeft`, `MoveRight` and `SoftDrop` are level-triggered (present while
/// the key is held). `RotateCw`, `RotateCcw` and `HardDrop` are present while
/// held and throttled by session cooldowns. `PauseToggle`, `Restart` and
/// `Quit` are edge-triggered (present once per key press).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    PauseToggle,
    Restart,
    Quit,
}

impl Command {
    /// Whether the command is consumed once per key press rather than per tick held
    pub fn is_edge(&self) -> bool {
        matches!(self, Command::PauseToggle | Command::Restart | Command::Quit)
    }
}

/// Number of distinct commands
pub const COMMAND_COUNT: usize = 9;

/// The set of commands active during one tick
///
/// Stack-only; pushing a command twice keeps a single entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFrame {
    commands: ArrayVec<Command, COMMAND_COUNT>,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from a list of commands
    pub fn with(commands: &[Command]) -> Self {
        let mut frame = Self::new();
        for &c in commands {
            frame.push(c);
        }
        frame
    }

    pub fn push(&mut self, command: Command) {
        if !self.contains(command) {
            // Capacity equals the number of distinct commands, so this cannot fail.
            let _ = self.commands.try_push(command);
        }
    }

    pub fn contains(&self, command: Command) -> bool {
        self.commands.contains(&command)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Command> + '_ {
        self.commands.iter().copied()
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell locked by a piece of that kind (colored by `PieceKind::color`)
pub type Cell = Option<PieceKind>;

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Running,
    Paused,
    GameOver,
}
