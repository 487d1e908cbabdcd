//! Construction-time errors.
//!
//! Normal play never fails: rejected moves and rotations are no-ops. These
//! errors only surface when a caller builds a board or session from invalid
//! parameters.

use thiserror::Error;

/// Smallest accepted board side (the I and O bounding boxes are 4 wide)
pub const MIN_DIMENSION: u16 = 4;

/// Largest accepted board side
pub const MAX_DIMENSION: u16 = 255;

/// Largest accepted preview queue (two full bags)
pub const MAX_PREVIEW_LEN: usize = 14;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("board dimensions {width}x{height} must each be within {min}..={max}")]
    InvalidDimensions {
        width: u16,
        height: u16,
        min: u16,
        max: u16,
    },
    #[error("preview length {0} must be within 1..=14")]
    InvalidPreviewLen(usize),
    #[error("{name} must be greater than zero")]
    ZeroInterval { name: &'static str },
}

pub type Result<T> = std::result::Result<T, EngineError>;
