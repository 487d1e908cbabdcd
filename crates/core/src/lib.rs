//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and timing logic.
//! It has **zero dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`shapes`]: The seven piece kinds and their four rotation states
//! - [`piece`]: The active piece as an immutable value (kind, rotation, anchor)
//! - [`rng`]: 7-bag random piece generation for fair distribution
//! - [`board`]: Grid of locked cells with collision checks, line clearing and counters
//! - [`kicks`]: Rotation with a fixed list of wall-kick offsets
//! - [`scoring`]: Line clear table, drop bonuses, level and gravity curves
//! - [`session`]: The per-tick state machine tying everything together
//! - [`snapshot`]: Read-only copies of session state for rendering
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: Every run of seven pieces contains each kind once
//! - **Wall Kicks**: Rotations try in place, then left, right, up, two left, two right
//! - **Lock Delay**: 500ms on the ground before a piece locks
//! - **Ghost Piece**: Shows where the current piece will land
//! - **Scoring**: 100/300/500/800 per clear times level, plus 1 per soft-dropped
//!   row and 2 per hard-dropped row
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::Session;
//! use tui_blockfall_core::types::{Command, InputFrame};
//!
//! let mut session = Session::with_seed(12345);
//!
//! session.tick(16, &InputFrame::with(&[Command::MoveRight]));
//! let events = session.tick(16, &InputFrame::with(&[Command::HardDrop]));
//!
//! assert_eq!(events.pieces_locked, 1);
//! assert!(session.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! - **Tick Rate**: 16ms (approximately 60 FPS)
//! - **Gravity**: 900ms per row at level 1, 60ms faster per level, never below 70ms
//! - **Soft Drop**: one row every 30ms
//!
//! Call [`Session::tick`](session::Session::tick) every frame with elapsed time.

pub mod board;
pub mod config;
pub mod error;
pub mod kicks;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use kicks::{try_rotate, KICK_OFFSETS};
pub use piece::Piece;
pub use rng::{Bag, SimpleRng};
pub use scoring::{calculate_drop_score, calculate_line_score, get_fall_interval_ms};
pub use session::{Session, TickEvents};
pub use shapes::{get_preview_shape, get_shape, PieceShape};
pub use snapshot::{SessionSnapshot, TimersSnapshot};
