//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Command`] and collects them into
//! one [`crate::types::InputFrame`] per tick, including on terminals without
//! key-release events.

pub mod handler;
pub mod map;

pub use tui_blockfall_types as types;

pub use handler::{InputTracker, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{map_key, CONTROLS_HELP};
