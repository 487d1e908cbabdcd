//! Terminal front-end for blockfall sessions.
//!
//! [`GameView`] paints a [`core::SessionSnapshot`] into a [`FrameBuffer`]
//! without touching the terminal; [`TerminalRenderer`] then flushes only the
//! glyphs that changed since the previous frame. Board cells default to two
//! columns by one row to offset the tall aspect of terminal glyphs.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
