//! TUI Blockfall (workspace facade crate).
//!
//! This package exposes `tui_blockfall::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`, plus the
//! environment-driven [`config::AppConfig`] used by the binary.

pub mod config;

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;
